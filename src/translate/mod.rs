pub mod client;
pub mod gemini;
pub mod google;

pub use client::{
    RetryPolicy, TranslationClient, FAILED_AFTER_RETRIES, NO_RESULT, NO_TEXT_TO_TRANSLATE,
};
pub use gemini::GeminiTranslator;
pub use google::GoogleTranslator;

use crate::config::{Config, Provider};
use crate::error::{Result, SubglossError, TransientError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// A remote translation backend.
///
/// `Ok(None)` means the call went through but produced nothing usable.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> std::result::Result<Option<String>, TransientError>;

    fn name(&self) -> &'static str;
}

/// Builds fresh backend handles, used to replace a handle after a failure.
pub trait TranslatorFactory: Send + Sync {
    fn create(&self) -> Box<dyn Translator>;
}

impl<F> TranslatorFactory for F
where
    F: Fn() -> Box<dyn Translator> + Send + Sync,
{
    fn create(&self) -> Box<dyn Translator> {
        self()
    }
}

/// Create a factory for the configured provider.
///
/// Every handle the factory builds carries the configured request timeout.
pub fn create_factory(provider: Provider, config: &Config) -> Result<Arc<dyn TranslatorFactory>> {
    let timeout = config.request_timeout();
    debug!("Request timeout: {:?}", timeout);

    match provider {
        Provider::Google => Ok(Arc::new(move || {
            Box::new(GoogleTranslator::new().with_timeout(timeout)) as Box<dyn Translator>
        })),
        Provider::Gemini => {
            let api_key = config.gemini_api_key.clone().ok_or_else(|| {
                SubglossError::Config(
                    "Gemini API key not set. Set GEMINI_API_KEY environment variable.".to_string(),
                )
            })?;
            let model = config.gemini_model.clone();
            Ok(Arc::new(move || {
                Box::new(gemini_translator(&api_key, model.as_deref(), timeout))
                    as Box<dyn Translator>
            }))
        }
    }
}

fn gemini_translator(
    api_key: &str,
    model: Option<&str>,
    timeout: std::time::Duration,
) -> GeminiTranslator {
    let translator = GeminiTranslator::new(api_key.to_string()).with_timeout(timeout);
    match model {
        Some(model) => translator.with_model(model),
        None => translator,
    }
}
