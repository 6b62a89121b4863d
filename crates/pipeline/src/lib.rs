//! Speech provider clients
//!
//! HTTP clients for the external speech services:
//! - `lid` - text language identification
//! - `stt` - speech-to-text (with provider-side translation)
//! - `tts` - chunked text-to-speech with per-chunk failure isolation
//! - `chunk` - text normalization and bounded chunk partitioning

pub mod chunk;
pub mod lid;
pub mod stt;
pub mod tts;

pub use chunk::{chunk_text, normalize_for_speech};
pub use lid::SarvamLanguageId;
pub use stt::SarvamTranscriber;
pub use tts::{SarvamSynthesizer, SynthesizerConfig};

use thiserror::Error;

/// Speech pipeline errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Service error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Audio decode error: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        SpeechError::Network(err.to_string())
    }
}

impl From<SpeechError> for vaani_core::Error {
    fn from(err: SpeechError) -> Self {
        vaani_core::Error::Speech(err.to_string())
    }
}
