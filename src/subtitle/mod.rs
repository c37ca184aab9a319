pub mod srt;

pub use srt::{parse, parse_bytes, read_file, serialize};

/// One subtitle block.
///
/// `index` and `timecode` are kept as the exact text found in the file so that
/// non-numeric labels and unusual time formats survive a rewrite untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub index: String,
    pub timecode: String,
    pub text: String,
}

impl Cue {
    pub fn new(
        index: impl Into<String>,
        timecode: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            timecode: timecode.into(),
            text: text.into(),
        }
    }
}
