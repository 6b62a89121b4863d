//! Generative model backend and prompt construction
//!
//! Provides the Gemini backend implementing the core `LanguageModel` trait
//! and the pure prompt constructor used by the QA chain.

pub mod gemini;
pub mod prompt;

pub use gemini::{GeminiBackend, GeminiConfig};
pub use prompt::build_prompt;

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Empty response from model")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}

impl From<LlmError> for vaani_core::Error {
    fn from(err: LlmError) -> Self {
        vaani_core::Error::Llm(err.to_string())
    }
}
