//! Retrieval trait and types

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A retrieved passage with its similarity score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    /// Document ID within the index
    pub id: String,
    /// Passage text
    pub content: String,
    /// Similarity score (higher is closer)
    pub score: f32,
}

/// Context retriever interface
///
/// Returns the top-k most similar stored passages for a query, ordered by
/// descending score. The backing index is immutable for the process
/// lifetime.
#[async_trait]
pub trait Retriever: Send + Sync + 'static {
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>>;
}
