//! Retrieval-augmented context lookup
//!
//! Features:
//! - Pre-built passage index loaded once at startup (immutable thereafter)
//! - Query embeddings via an external embedding service
//! - Cosine top-k retrieval implementing the core `Retriever` trait

pub mod embeddings;
pub mod index;
pub mod retriever;

pub use embeddings::{Embedder, EmbeddingConfig, OllamaEmbedder};
pub use index::{IndexedPassage, PassageIndex, PassageIndexFile};
pub use retriever::IndexRetriever;

use thiserror::Error;

/// RAG errors
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Search error: {0}")]
    Search(String),
}

impl From<RagError> for vaani_core::Error {
    fn from(err: RagError) -> Self {
        vaani_core::Error::Rag(err.to_string())
    }
}
