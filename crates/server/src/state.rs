//! Application State
//!
//! Shared state across all handlers. Service handles are constructed once
//! at startup and injected here; handlers never re-instantiate clients.

use std::sync::Arc;
use tokio::sync::RwLock;

use vaani_agent::QaChain;
use vaani_config::Settings;
use vaani_core::{LanguageIdentifier, SpeechSynthesizer, SpeechToText};

use crate::chat_log::ChatLog;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration (read-only after startup)
    pub config: Arc<Settings>,
    /// Text language identification client
    pub identifier: Arc<dyn LanguageIdentifier>,
    /// Speech-to-text client
    pub transcriber: Arc<dyn SpeechToText>,
    /// Speech synthesis client
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    /// Retrieval-augmented QA chain
    pub qa: Arc<QaChain>,
    /// Append-only exchange log
    pub chat_log: Arc<ChatLog>,
    /// Number of passages in the loaded index (for health reporting)
    pub index_documents: usize,
    /// Guards the audio directory: synthesis writers hold the read half,
    /// the maintenance clear holds the write half
    pub audio_dir_lock: Arc<RwLock<()>>,
}

impl AppState {
    pub fn new(
        config: Settings,
        identifier: Arc<dyn LanguageIdentifier>,
        transcriber: Arc<dyn SpeechToText>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        qa: Arc<QaChain>,
        index_documents: usize,
    ) -> Self {
        let chat_log = Arc::new(ChatLog::new(&config.server.chat_log_path));
        Self {
            config: Arc::new(config),
            identifier,
            transcriber,
            synthesizer,
            qa,
            chat_log,
            index_documents,
            audio_dir_lock: Arc::new(RwLock::new(())),
        }
    }
}
