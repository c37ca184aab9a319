use crate::error::{Result, SubglossError};
use crate::translate::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Google,
    Gemini,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Google => write!(f, "google"),
            Provider::Gemini => write!(f, "gemini"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "gemini" => Ok(Provider::Gemini),
            _ => Err(format!("Unknown provider: {}. Use 'google' or 'gemini'", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: Provider,
    pub gemini_api_key: Option<String>,
    /// Gemini model name; the backend default is used when unset.
    pub gemini_model: Option<String>,
    /// Pause after each cue so the translation endpoint is not hammered.
    pub pacing_delay_ms: u64,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    /// Deadline for a single backend request.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            gemini_api_key: None,
            gemini_model: None,
            pacing_delay_ms: 100,
            max_attempts: 3,
            retry_delay_ms: 1000,
            request_timeout_secs: 5,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Load from config file if it exists
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                config = toml::from_str::<Config>(&contents).map_err(|e| {
                    SubglossError::Config(format!("{}: {}", config_path.display(), e))
                })?;
            }
        }

        config.apply_env();
        Ok(config)
    }

    /// Override fields from environment variables.
    fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Override fields from `lookup`. Values that do not parse are ignored.
    fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.gemini_api_key = Some(key);
        }
        if let Some(model) = lookup("SUBGLOSS_GEMINI_MODEL") {
            self.gemini_model = Some(model);
        }
        if let Some(p) = lookup("SUBGLOSS_PROVIDER").and_then(|v| v.parse().ok()) {
            self.provider = p;
        }
        if let Some(ms) = lookup("SUBGLOSS_PACING_MS").and_then(|v| v.parse().ok()) {
            self.pacing_delay_ms = ms;
        }
        if let Some(n) = lookup("SUBGLOSS_MAX_ATTEMPTS").and_then(|v| v.parse().ok()) {
            self.max_attempts = n;
        }
        if let Some(ms) = lookup("SUBGLOSS_RETRY_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.retry_delay_ms = ms;
        }
        if let Some(secs) = lookup("SUBGLOSS_REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.request_timeout_secs = secs;
        }
    }

    pub fn validate(&self, provider: Provider) -> Result<()> {
        if provider == Provider::Gemini && self.gemini_api_key.is_none() {
            return Err(SubglossError::Config(
                "GEMINI_API_KEY not set. Get one at https://aistudio.google.com/apikey"
                    .to_string(),
            ));
        }

        if self.max_attempts == 0 {
            return Err(SubglossError::Config(
                "max_attempts must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(SubglossError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: Duration::from_millis(self.retry_delay_ms),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("subgloss").join("config.toml"))
    }
}
