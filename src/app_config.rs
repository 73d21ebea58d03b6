use anyhow::{anyhow, Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// Everything has a default; `conf.json` may override the non-secret values
/// and the API key only ever comes from the environment.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Secret for the hosted model, read from `API_KEY`
    #[serde(skip)]
    pub api_key: String,

    /// Hosted model settings
    #[serde(default)]
    pub model: ModelConfig,

    /// History store settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Web form listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Rows shown in the recent translations panel
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Hosted model configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelConfig {
    /// Model id
    #[serde(default = "default_model_name")]
    pub name: String,

    /// API base URL
    #[serde(default = "default_model_endpoint")]
    pub endpoint: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            endpoint: default_model_endpoint(),
        }
    }
}

/// History store configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// SQLite file, relative to the working directory
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

/// Web server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Name of the environment variable carrying the model API key
pub const API_KEY_VAR: &str = "API_KEY";

fn default_history_limit() -> usize {
    5
}

fn default_model_name() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_model_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_database_path() -> String {
    "translations.db".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Config {
    /// Load `path` if it exists, otherwise start from defaults, then pull the
    /// API key from the process environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Config::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Fill environment-provided values using `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_VAR) {
            self.api_key = key.trim().to_string();
        }
    }

    /// Validate the configuration for consistency and required values
    ///
    /// A missing API key is not fatal: it surfaces as an authentication error
    /// on the first translation.
    pub fn validate(&self) -> Result<()> {
        if self.model.name.trim().is_empty() {
            return Err(anyhow!("Model name must not be empty"));
        }
        if self.model.endpoint.trim().is_empty() {
            return Err(anyhow!("Model endpoint must not be empty"));
        }
        if self.storage.database_path.trim().is_empty() {
            return Err(anyhow!("Database path must not be empty"));
        }
        if self.history_limit == 0 {
            return Err(anyhow!("History limit must be at least 1"));
        }
        if self.api_key.is_empty() {
            warn!("{} is not set; translations will fail until it is", API_KEY_VAR);
        }

        Ok(())
    }

    /// Address the web form listens on
    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            model: ModelConfig::default(),
            storage: StorageConfig::default(),
            server: ServerConfig::default(),
            history_limit: default_history_limit(),
            log_level: LogLevel::default(),
        }
    }
}
