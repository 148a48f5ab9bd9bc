use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend address including the `/api` prefix, without a trailing slash
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("api.base_url must not be empty")]
    EmptyBaseUrl,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000/api"
"#;

/// Build-time override for the backend address
const API_URL_OVERRIDE: Option<&str> = option_env!("CIR_API_URL");

impl AppConfig {
    /// Parse a TOML document and normalise it
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(contents)?;
        config.api.base_url = normalize_base_url(&config.api.base_url)?;
        Ok(config)
    }

    fn with_override(mut self, base_url: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(url) = base_url {
            self.api.base_url = normalize_base_url(url)?;
        }
        Ok(self)
    }
}

/// Load configuration for the running bundle.
///
/// Search order:
/// 1. `CIR_API_URL` captured at build time
/// 2. Embedded default config
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::from_toml(DEFAULT_CONFIG)?.with_override(API_URL_OVERRIDE)?;
    log::info!("API base url: {}", config.api.base_url);
    Ok(config)
}

/// Same as [`load_config`] but never fails: an invalid override is logged and
/// the embedded default is used instead.
pub fn load_config_or_default() -> AppConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}, falling back to embedded config", e);
            default_config()
        }
    }
}

fn default_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: "http://localhost:8000/api".to_string(),
        },
    }
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    Ok(trimmed.to_string())
}
