//! Core trait seams for pluggable backends

mod llm;
mod retriever;
mod speech;

pub use llm::LanguageModel;
pub use retriever::{Passage, Retriever};
pub use speech::{LanguageIdentifier, SpeechSynthesizer, SpeechToText};
