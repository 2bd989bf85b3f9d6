use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::metadata_scraper::DEFAULT_USER_AGENT;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Generation worker settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Watch-page scrape settings
    #[serde(default)]
    pub scrape: ScrapeConfig,

    /// Language the worker is expected to produce when no target is given.
    /// Used to skip the translation pass for same-language requests.
    #[serde(default)]
    pub source_language: Option<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: BackendConfig::default(),
            scrape: ScrapeConfig::default(),
            source_language: None,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration out as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Settings for the out-of-process generation worker
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BackendConfig {
    // @field: Program used to launch the worker
    #[serde(default = "default_backend_program")]
    pub program: String,

    // @field: Arguments placed before the video URL
    #[serde(default = "default_backend_args")]
    pub args: Vec<String>,

    // @field: Seconds to wait before treating the worker as failed
    #[serde(default = "default_backend_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            program: default_backend_program(),
            args: default_backend_args(),
            timeout_secs: default_backend_timeout_secs(),
        }
    }
}

/// Settings for the watch-page scrape
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScrapeConfig {
    // @field: Browser-identifying user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // @field: Seconds before an unresponsive fetch counts as unreachable
    #[serde(default = "default_scrape_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            user_agent: default_user_agent(),
            timeout_secs: default_scrape_timeout_secs(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_backend_program() -> String {
    "uv".to_string()
}

fn default_backend_args() -> Vec<String> {
    vec![
        "run".to_string(),
        "subtitle_backend/generate_subtitle.py".to_string(),
    ]
}

fn default_backend_timeout_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_scrape_timeout_secs() -> u64 {
    30
}
