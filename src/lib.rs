pub mod batch;
pub mod config;
pub mod error;
pub mod interactive;
pub mod language;
pub mod options;
pub mod pipeline;
pub mod subtitle;
pub mod translate;
pub mod vocab;

pub use batch::{print_summary, run_batch, BatchSummary};
pub use config::Config;
pub use error::{Result, SubglossError, TransientError};
pub use options::EnhancementOptions;
pub use pipeline::{Enhancer, PipelineConfig, ProcessedFile};
