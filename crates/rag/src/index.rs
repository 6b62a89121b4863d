//! Pre-built passage index
//!
//! Loads a JSON index file produced by the offline embedding job and
//! answers cosine top-k queries against it. The index is read-only after
//! load; rebuilding requires a restart.

use serde::{Deserialize, Serialize};
use std::path::Path;

use vaani_core::Passage;

use crate::RagError;

/// One indexed passage with its precomputed embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedPassage {
    /// Unique passage ID
    pub id: String,
    /// Passage text
    pub content: String,
    /// Precomputed dense embedding
    pub embedding: Vec<f32>,
}

/// Index file format
#[derive(Debug, Serialize, Deserialize)]
pub struct PassageIndexFile {
    /// Version for format compatibility
    #[serde(default)]
    pub version: Option<String>,
    /// Embedding model the vectors were produced with
    #[serde(default)]
    pub embedding_model: Option<String>,
    /// Indexed passages
    pub documents: Vec<IndexedPassage>,
}

/// In-memory similarity index over precomputed passage embeddings
pub struct PassageIndex {
    passages: Vec<IndexedPassage>,
}

impl PassageIndex {
    /// Load the index from a JSON file
    pub fn load(path: &Path) -> Result<Self, RagError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RagError::Index(format!("Failed to read {}: {}", path.display(), e)))?;

        let file: PassageIndexFile = serde_json::from_str(&content)
            .map_err(|e| RagError::Index(format!("JSON parse error in {}: {}", path.display(), e)))?;

        tracing::info!(
            path = %path.display(),
            documents = file.documents.len(),
            embedding_model = file.embedding_model.as_deref().unwrap_or("unknown"),
            "Loaded passage index"
        );

        Ok(Self::from_passages(file.documents))
    }

    /// Build an index from in-memory passages
    pub fn from_passages(passages: Vec<IndexedPassage>) -> Self {
        Self { passages }
    }

    /// Number of indexed passages
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Return the top-k passages by cosine similarity to `query_embedding`,
    /// descending. Ties keep index order.
    pub fn top_k(&self, query_embedding: &[f32], k: usize) -> Vec<Passage> {
        let mut scored: Vec<(usize, f32)> = self
            .passages
            .iter()
            .enumerate()
            .map(|(i, p)| (i, cosine_similarity(query_embedding, &p.embedding)))
            .collect();

        // Stable sort keeps index order for equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(k)
            .map(|(i, score)| Passage {
                id: self.passages[i].id.clone(),
                content: self.passages[i].content.clone(),
                score,
            })
            .collect()
    }
}

/// Cosine similarity between two vectors
///
/// Dimension mismatch or a zero vector scores 0.0 rather than erroring;
/// such passages simply rank last.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
