use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;

/// Backend used when neither the file, the environment nor the CLI name one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Prefix of environment variables that override file settings,
/// e.g. `TRADEDASH_API__BASE_URL`
pub const ENV_PREFIX: &str = "TRADEDASH";

/// Top-level configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration, injected into the client at construction
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the trading bot backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional User-Agent header sent with every request
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level name ("error", "warn", "info", "debug", "trace")
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values for optional configuration
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level: {}", self.level))
    }
}

impl Config {
    /// Load configuration, layering the optional TOML file under
    /// `TRADEDASH_*` environment variables
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, Self::environment())
    }

    /// Environment source for `TRADEDASH_SECTION__KEY` variables
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    /// Load configuration with an explicit environment source layered
    /// over the file
    pub fn load_with_env<P: AsRef<Path>>(path: P, env: config::Environment) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .with_context(|| format!("Config path is not valid UTF-8: {:?}", path))?;

        let settings = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Toml).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = settings
            .try_deserialize()
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Override the backend base URL when one was given explicitly
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        self
    }
}
