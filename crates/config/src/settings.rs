//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{endpoints, llm, rag, speech};
use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech provider configuration (language ID, STT, TTS)
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Generative model configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// Retrieval configuration
    #[serde(default)]
    pub rag: RagConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS origin checks (disable only for development)
    #[serde(default)]
    pub cors_enabled: bool,

    /// Allowed CORS origins
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Base URL used to build absolute audio links in responses
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Directory where synthesized audio files are written and served from
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,

    /// Append-only exchange log path
    #[serde(default = "default_chat_log_path")]
    pub chat_log_path: String,
}

fn default_port() -> u16 {
    8000
}

fn default_public_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_audio_dir() -> String {
    "static".to_string()
}

fn default_chat_log_path() -> String {
    "chat_log.txt".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cors_enabled: false,
            cors_origins: Vec::new(),
            public_base_url: default_public_base_url(),
            audio_dir: default_audio_dir(),
            chat_log_path: default_chat_log_path(),
        }
    }
}

/// Speech provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Provider API base URL
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,

    /// Subscription key (from SARVAM_API_KEY)
    #[serde(default = "default_speech_api_key")]
    pub api_key: String,

    /// TTS model identifier
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Maximum characters per synthesis chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Request timeout in seconds
    #[serde(default = "default_speech_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_speech_endpoint() -> String {
    endpoints::SARVAM_DEFAULT.to_string()
}

fn default_speech_api_key() -> String {
    std::env::var("SARVAM_API_KEY").unwrap_or_default()
}

fn default_tts_model() -> String {
    speech::TTS_MODEL.to_string()
}

fn default_chunk_size() -> usize {
    speech::CHUNK_MAX_CHARS
}

fn default_speech_timeout_secs() -> u64 {
    60
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_speech_endpoint(),
            api_key: default_speech_api_key(),
            tts_model: default_tts_model(),
            chunk_size: default_chunk_size(),
            timeout_secs: default_speech_timeout_secs(),
        }
    }
}

/// Generative model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API base URL
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// API key (from GEMINI_API_KEY)
    #[serde(default = "default_llm_api_key")]
    pub api_key: String,

    /// Model identifier
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: usize,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_llm_endpoint() -> String {
    endpoints::GEMINI_DEFAULT.to_string()
}

fn default_llm_api_key() -> String {
    std::env::var("GEMINI_API_KEY").unwrap_or_default()
}

fn default_llm_model() -> String {
    llm::DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    llm::DEFAULT_TEMPERATURE
}

fn default_max_output_tokens() -> usize {
    1024
}

fn default_llm_timeout_secs() -> u64 {
    60
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            api_key: default_llm_api_key(),
            model: default_llm_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_llm_timeout_secs(),
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Pre-built passage index file (JSON)
    #[serde(default = "default_index_path")]
    pub index_path: String,

    /// Embedding service endpoint
    #[serde(default = "default_embedding_endpoint")]
    pub embedding_endpoint: String,

    /// Embedding model name
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Passages returned per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_index_path() -> String {
    "data/passage_index.json".to_string()
}

fn default_embedding_endpoint() -> String {
    endpoints::OLLAMA_DEFAULT.to_string()
}

fn default_embedding_model() -> String {
    rag::DEFAULT_EMBEDDING_MODEL.to_string()
}

fn default_top_k() -> usize {
    rag::DEFAULT_TOP_K
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
            embedding_endpoint: default_embedding_endpoint(),
            embedding_model: default_embedding_model(),
            top_k: default_top_k(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON-formatted logs
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speech.chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "speech.chunk_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.rag.top_k == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rag.top_k".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature".to_string(),
                message: format!("{} outside [0.0, 2.0]", self.llm.temperature),
            });
        }
        if self.environment.is_production() {
            if self.speech.api_key.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "speech.api_key".to_string(),
                    message: "SARVAM_API_KEY must be set in production".to_string(),
                });
            }
            if self.llm.api_key.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "llm.api_key".to_string(),
                    message: "GEMINI_API_KEY must be set in production".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("VAANI")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.speech.chunk_size, 300);
        assert_eq!(settings.rag.top_k, 3);
        assert!((settings.llm.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(settings.server.audio_dir, "static");
    }

    #[test]
    fn test_validate_rejects_zero_chunk_size() {
        let mut settings = Settings::default();
        settings.speech.chunk_size = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut settings = Settings::default();
        settings.llm.temperature = 3.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }
}
