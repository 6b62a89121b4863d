//! Configuration management for the voice QA service
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{env}.yaml)
//! - Environment variables (VAANI__ prefix, e.g. VAANI__SERVER__PORT)
//!
//! Provider credentials are read from the environment
//! (SARVAM_API_KEY, GEMINI_API_KEY), never from files.

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, LlmConfig, ObservabilityConfig, RagConfig, RuntimeEnvironment, ServerConfig,
    Settings, SpeechConfig,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
