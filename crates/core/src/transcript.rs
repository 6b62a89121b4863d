//! Transcription types

use serde::{Deserialize, Serialize};

/// Result of a successful speech-to-text call
///
/// Service failure is an `Err` at the trait level, so an empty `text` here
/// always means the provider genuinely heard nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed (and provider-translated) text
    pub text: String,
    /// Language tag detected by the provider (e.g. "hi-IN")
    pub language_code: String,
}

impl Transcription {
    pub fn new(text: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language_code: language_code.into(),
        }
    }

    /// True when the provider returned no speech content
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
