use crate::BloomError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct BloomConfig {
    #[serde(default)]
    pub advice: AdviceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdviceConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_advice_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_advice_model")]
    pub model: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_advice_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_advice_endpoint(),
            model: default_advice_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_advice_timeout(),
            max_attempts: default_max_attempts(),
            retry_delay_secs: default_retry_delay(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_advice_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions".into()
}

fn default_advice_model() -> String {
    "gemini-2.0-flash".into()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}

fn default_advice_timeout() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    2
}

#[derive(Debug, Deserialize, Default)]
pub struct StorageConfig {
    pub data_file: Option<PathBuf>,
}

/// Load config from BLOOM_CONFIG env var, ~/.bloom/config.toml, or defaults.
pub fn load_config() -> Result<BloomConfig, BloomError> {
    let path = config_path();
    match path {
        Some(p) if p.exists() => {
            let content = std::fs::read_to_string(&p)?;
            let config: BloomConfig = toml::from_str(&content)
                .map_err(|e| BloomError::Config(format!("{}: {e}", p.display())))?;
            validate_config(&config)?;
            Ok(config)
        }
        _ => Ok(BloomConfig::default()),
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("BLOOM_CONFIG") {
        return Some(PathBuf::from(p));
    }
    bloom_dir().map(|d| d.join("config.toml"))
}

fn bloom_dir() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(Path::new(&home).join(".bloom"))
}

fn validate_config(config: &BloomConfig) -> Result<(), BloomError> {
    let advice = &config.advice;
    if advice.max_attempts == 0 {
        return Err(BloomError::Config("advice.max_attempts must be at least 1".into()));
    }
    if advice.model.trim().is_empty() {
        return Err(BloomError::Config("advice.model is empty".into()));
    }
    if advice.endpoint.trim().is_empty() {
        return Err(BloomError::Config("advice.endpoint is empty".into()));
    }
    Ok(())
}

/// Data file: explicit path (--data / BLOOM_DATA) > config > ~/.bloom/period_data.json.
pub fn resolve_data_path(explicit: Option<PathBuf>, config: &BloomConfig) -> PathBuf {
    explicit
        .or_else(|| config.storage.data_file.clone())
        .or_else(|| bloom_dir().map(|d| d.join("period_data.json")))
        .unwrap_or_else(|| PathBuf::from("period_data.json"))
}
