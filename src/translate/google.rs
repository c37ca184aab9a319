//! Translation through the public Google Translate web endpoint.

use crate::error::TransientError;
use crate::translate::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Per-request deadline; a stalled call becomes a failed attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Keyless translator using the `translate_a/single` endpoint.
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Give up on a request that has not completed within `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point the translator at another host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Option<String>, TransientError> {
        debug!("Requesting {} -> {} translation", source_lang, target_lang);

        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransientError(format!(
                "Translate endpoint error ({}): {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let value: Value = serde_json::from_str(&body)?;
        Ok(extract_translation(&value))
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

/// Join the translated pieces of a `dt=t` response.
///
/// The payload looks like `[[["Hello","你好",...],["world","世界",...]],...]`.
fn extract_translation(value: &Value) -> Option<String> {
    let segments = value.get(0)?.as_array()?;
    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        None
    } else {
        Some(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_translation_joins_segments() {
        let value = json!([[["Hello, ", "你好，", null], ["world", "世界", null]], null, "zh-CN"]);
        assert_eq!(extract_translation(&value).as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_extract_translation_missing() {
        assert_eq!(extract_translation(&json!(null)), None);
        assert_eq!(extract_translation(&json!([null, null, "en"])), None);
        assert_eq!(extract_translation(&json!([[]])), None);
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let translator = GoogleTranslator::new().with_base_url("http://localhost:1234/");
        assert_eq!(translator.base_url, "http://localhost:1234");
        assert_eq!(translator.name(), "google");
    }

    #[test]
    fn test_timeout() {
        assert_eq!(GoogleTranslator::new().timeout, DEFAULT_TIMEOUT);
        let translator = GoogleTranslator::new().with_timeout(Duration::from_millis(250));
        assert_eq!(translator.timeout, Duration::from_millis(250));
    }
}
