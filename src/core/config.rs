//! Configuration from the environment (and `.env`), plus credential resolution.

use std::env;
use std::time::Duration;

use async_openai::config::OpenAIConfig;

use crate::core::api_key;

pub const API_KEY_VAR: &str = "MISTRAL_API_KEY";
pub const BASE_URL_VAR: &str = "ADVISOR_BASE_URL";
pub const MODEL_VAR: &str = "ADVISOR_MODEL";
pub const TIMEOUT_VAR: &str = "ADVISOR_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_MODEL: &str = "mistral-large-latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Everything except the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub model_id: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub base_url: String,
    pub model_id: String,
    pub timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "MISTRAL_API_KEY is not set. Export it, add it to .env, or run `advisor-chat config set-api-key`."
    )]
    MissingApiKey,
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

impl Config {
    pub fn new(settings: &Settings, api_key: &str) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(settings.base_url.clone())
            .with_api_key(api_key.trim());
        Self {
            openai_config,
            base_url: settings.base_url.clone(),
            model_id: settings.model_id.clone(),
            timeout: settings.timeout,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build settings from a variable lookup. Separated from the process env for tests.
pub fn settings_from<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base_url = non_empty(lookup(BASE_URL_VAR)).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let model_id = non_empty(lookup(MODEL_VAR)).unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let timeout_secs = match non_empty(lookup(TIMEOUT_VAR)) {
        None => DEFAULT_TIMEOUT_SECS,
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                return Err(ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: raw,
                });
            }
        },
    };
    Ok(Settings {
        base_url,
        model_id,
        timeout: Duration::from_secs(timeout_secs),
    })
}

/// Load settings from the process environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    settings_from(|name| env::var(name).ok())
}

/// Where the API key was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    Stored,
}

/// Resolve the API key: environment first, then the stored key file.
pub fn resolve_api_key() -> Option<(String, KeySource)> {
    if let Some(key) = non_empty(env::var(API_KEY_VAR).ok()) {
        return Some((key, KeySource::Environment));
    }
    api_key::load_api_key().map(|key| (key, KeySource::Stored))
}
