//! Core traits and types for the voice QA service
//!
//! This crate provides foundational types used across all other crates:
//! - Core traits for pluggable backends (language ID, STT, TTS, retrieval, LLM)
//! - Language definitions (12 supported languages) with greeting/fallback tables
//! - Transcription types
//! - Error types

pub mod error;
pub mod language;
pub mod traits;
pub mod transcript;

pub use error::{Error, Result};
pub use language::Language;
pub use transcript::Transcription;

pub use traits::{
    LanguageIdentifier,
    LanguageModel,
    Passage,
    Retriever,
    SpeechSynthesizer,
    SpeechToText,
};
