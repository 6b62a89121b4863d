//! Speech processing traits

use crate::{Language, Result, Transcription};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Text language identification interface
///
/// Absence of a signal is not an error: any transport or service failure
/// yields `None`, and callers degrade to the default language.
#[async_trait]
pub trait LanguageIdentifier: Send + Sync + 'static {
    /// Identify the language of free text, returning the provider tag
    /// (e.g. "hi-IN") or `None` when no signal is available
    async fn identify(&self, text: &str) -> Option<String>;
}

/// Speech-to-text interface
#[async_trait]
pub trait SpeechToText: Send + Sync + 'static {
    /// Transcribe an uploaded audio byte stream
    ///
    /// A legitimately empty transcript is `Ok` with empty text; a provider
    /// failure is an `Err`.
    async fn transcribe(&self, audio: &[u8]) -> Result<Transcription>;

    /// Service identifier for logging
    fn service_name(&self) -> &str;
}

/// Speech synthesis interface
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync + 'static {
    /// Synthesize text into a single audio file at `out_path`
    ///
    /// Returns `Ok(None)` when no audio could be produced at all; in that
    /// case no file is written. `speaker` pins a voice; when absent the
    /// implementation picks one and uses it for the whole request.
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        out_path: &Path,
        speaker: Option<&str>,
    ) -> Result<Option<PathBuf>>;

    /// Service identifier for logging
    fn service_name(&self) -> &str;
}
