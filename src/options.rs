use crate::error::{Result, SubglossError};
use crate::language::{is_supported, normalize_code};

/// What to add to each cue. Fixed for a whole batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementOptions {
    pub source_language: String,
    pub target_language: String,
    /// Keep the original text above the translation.
    pub include_source: bool,
    /// Append a word-by-word gloss under the translation.
    pub include_vocabulary: bool,
}

impl Default for EnhancementOptions {
    fn default() -> Self {
        Self {
            source_language: "zh-cn".to_string(),
            target_language: "en".to_string(),
            include_source: true,
            include_vocabulary: true,
        }
    }
}

impl EnhancementOptions {
    /// Build options from raw user input, normalizing and validating both codes.
    pub fn new(
        source_language: &str,
        target_language: &str,
        include_source: bool,
        include_vocabulary: bool,
    ) -> Result<Self> {
        let options = Self {
            source_language: normalize_code(source_language),
            target_language: normalize_code(target_language),
            include_source,
            include_vocabulary,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_supported(&self.source_language) {
            return Err(SubglossError::Validation(format!(
                "Source language code '{}' is not valid.",
                self.source_language
            )));
        }
        if !is_supported(&self.target_language) {
            return Err(SubglossError::Validation(format!(
                "Target language code '{}' is not valid.",
                self.target_language
            )));
        }
        Ok(())
    }
}
