//! Single-text translation with bounded retry.
//!
//! Failures never leave this module: every outcome is a string, either the
//! translation or one of the sentinels below.

use super::{Translator, TranslatorFactory};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Returned when the input is blank after cleaning.
pub const NO_TEXT_TO_TRANSLATE: &str = "[No text to translate]";

/// Returned when the backend answered but gave nothing usable.
pub const NO_RESULT: &str = "[Translation failed - no result]";

/// Returned once every attempt has failed.
pub const FAILED_AFTER_RETRIES: &str = "[Translation failed after retries]";

/// Attempt budget and pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Translation client that owns a backend handle and knows how to replace it.
pub struct TranslationClient {
    factory: Arc<dyn TranslatorFactory>,
    translator: Box<dyn Translator>,
    policy: RetryPolicy,
}

impl TranslationClient {
    /// Create a client with a freshly built backend.
    pub fn new(factory: Arc<dyn TranslatorFactory>) -> Self {
        let translator = factory.create();
        Self {
            factory,
            translator,
            policy: RetryPolicy::default(),
        }
    }

    /// Override the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn backend_name(&self) -> &'static str {
        self.translator.name()
    }

    /// Translate `text`, flattening it to a single line first.
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        let clean_text = clean(text);
        if clean_text.is_empty() {
            return NO_TEXT_TO_TRANSLATE.to_string();
        }

        // A handle replaced after a failure only lives for the rest of this call.
        let mut replacement: Option<Box<dyn Translator>> = None;
        let attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=attempts {
            let translator = replacement.as_deref().unwrap_or(&*self.translator);
            let outcome = translator
                .translate(&clean_text, source_lang, target_lang)
                .await;

            match outcome {
                Ok(Some(translated)) if !translated.trim().is_empty() => {
                    debug!("Translated on attempt {}", attempt);
                    return translated;
                }
                Ok(_) => return NO_RESULT.to_string(),
                Err(e) => {
                    warn!("Translation attempt {} failed: {}", attempt, e);
                    if attempt < attempts {
                        tokio::time::sleep(self.policy.delay).await;
                        replacement = Some(self.factory.create());
                    }
                }
            }
        }

        FAILED_AFTER_RETRIES.to_string()
    }
}

fn clean(text: &str) -> String {
    text.trim().replace('\n', " ")
}
