use crate::error::{Result, SubglossError};
use crate::options::EnhancementOptions;
use crate::subtitle::{self, Cue};
use crate::translate::TranslationClient;
use crate::vocab::VocabularyExtractor;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Pipeline settings that are not part of the user's enhancement options.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Pause after each cue; keeps request rate below endpoint throttling.
    pub pacing_delay: Duration,
    /// Show progress bars.
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pacing_delay: Duration::from_millis(100),
            show_progress: true,
        }
    }
}

/// Both artifacts of one successfully processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub cue_count: usize,
}

/// Runs the per-cue enhancement for every file of a batch.
pub struct Enhancer {
    options: EnhancementOptions,
    client: TranslationClient,
    extractor: Option<VocabularyExtractor>,
    config: PipelineConfig,
}

impl Enhancer {
    /// Create an enhancer; the vocabulary extractor is only built when the
    /// options ask for a gloss.
    pub fn new(
        options: EnhancementOptions,
        client: TranslationClient,
        config: PipelineConfig,
    ) -> Self {
        let extractor = options
            .include_vocabulary
            .then(|| VocabularyExtractor::for_language(&options.source_language));
        Self::with_extractor(options, client, extractor, config)
    }

    pub fn with_extractor(
        options: EnhancementOptions,
        client: TranslationClient,
        extractor: Option<VocabularyExtractor>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            options,
            client,
            extractor,
            config,
        }
    }

    pub fn options(&self) -> &EnhancementOptions {
        &self.options
    }

    /// Build the replacement text for one cue.
    pub async fn enhance_text(&self, original: &str) -> String {
        let source = &self.options.source_language;
        let target = &self.options.target_language;

        let translation = self.client.translate(original, source, target).await;

        let mut enhanced = String::new();
        if self.options.include_source {
            enhanced.push_str(original);
            enhanced.push('\n');
        }
        enhanced.push_str(&translation);

        if self.options.include_vocabulary {
            if let Some(extractor) = &self.extractor {
                let gloss = extractor
                    .extract(original, source, target, &self.client)
                    .await;
                if !gloss.is_empty() {
                    enhanced.push('\n');
                    enhanced.push_str(&gloss.join("\n"));
                }
            }
        }

        enhanced
    }

    /// Enhance every cue in order. Index and timecode are left untouched.
    pub async fn enhance_cues(&self, mut cues: Vec<Cue>) -> Vec<Cue> {
        let total = cues.len();

        let progress_bar = if self.config.show_progress && total > 0 {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cues ({eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        for (i, cue) in cues.iter_mut().enumerate() {
            if (i + 1) % 5 == 0 {
                debug!("Processing subtitle {}/{}", i + 1, total);
            }

            cue.text = self.enhance_text(&cue.text).await;

            if let Some(ref pb) = progress_bar {
                pb.inc(1);
            }

            tokio::time::sleep(self.config.pacing_delay).await;
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        cues
    }

    /// Enhance a whole SRT document held in memory.
    pub async fn enhance_str(&self, content: &str) -> String {
        let cues = subtitle::parse(content);
        let enhanced = self.enhance_cues(cues).await;
        subtitle::serialize(&enhanced)
    }

    /// Process one file and write `{TARGET}_{name}` into `output_dir`.
    ///
    /// Fails only when the input cannot be read as text or the output cannot
    /// be written; translation trouble ends up as sentinel text instead.
    pub async fn process_file(&self, input: &Path, output_dir: &Path) -> Result<ProcessedFile> {
        let cues = subtitle::read_file(input)?;
        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Processing {} with {} subtitle entries...", file_name, cues.len());

        let cue_count = cues.len();
        let enhanced = self.enhance_cues(cues).await;
        let content = subtitle::serialize(&enhanced);

        let output_path =
            output_dir.join(output_file_name(input, &self.options.target_language));
        write_atomic(&output_path, &content)?;

        info!("Enhanced file created: {}", output_path.display());

        Ok(ProcessedFile {
            input_path: input.to_path_buf(),
            output_path,
            cue_count,
        })
    }
}

/// `{TARGET_UPPER}_{stem}{.ext}` for an input path.
pub fn output_file_name(input: &Path, target_lang: &str) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{}_{}{}", target_lang.to_uppercase(), stem, ext)
}

/// Write through a temp file in the same directory so a failed run never
/// leaves a truncated output behind.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path)
        .map_err(|e| SubglossError::Io(e.error))?;
    Ok(())
}
