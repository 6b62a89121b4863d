//! Index-backed retriever

use std::sync::Arc;

use async_trait::async_trait;
use vaani_core::{Passage, Result, Retriever};

use crate::embeddings::Embedder;
use crate::index::PassageIndex;

/// Retriever over the pre-built passage index
///
/// Embeds the query via the configured embedding service and returns the
/// top-k passages by cosine similarity, descending.
pub struct IndexRetriever {
    index: Arc<PassageIndex>,
    embedder: Arc<dyn Embedder>,
    top_k: usize,
}

impl IndexRetriever {
    pub fn new(index: Arc<PassageIndex>, embedder: Arc<dyn Embedder>, top_k: usize) -> Self {
        Self {
            index,
            embedder,
            top_k,
        }
    }
}

#[async_trait]
impl Retriever for IndexRetriever {
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>> {
        let embedding = self.embedder.embed(query).await?;
        let results = self.index.top_k(&embedding, self.top_k);

        tracing::debug!(
            query_len = query.len(),
            results = results.len(),
            "Retrieved context passages"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexedPassage;
    use crate::RagError;

    struct FixedEmbedder(Vec<f32>);

    #[async_trait]
    impl Embedder for FixedEmbedder {
        async fn embed(&self, _text: &str) -> std::result::Result<Vec<f32>, RagError> {
            Ok(self.0.clone())
        }
    }

    struct FailingEmbedder;

    #[async_trait]
    impl Embedder for FailingEmbedder {
        async fn embed(&self, _text: &str) -> std::result::Result<Vec<f32>, RagError> {
            Err(RagError::Embedding("service down".to_string()))
        }
    }

    fn index() -> Arc<PassageIndex> {
        Arc::new(PassageIndex::from_passages(vec![
            IndexedPassage {
                id: "a".to_string(),
                content: "loan terms".to_string(),
                embedding: vec![1.0, 0.0],
            },
            IndexedPassage {
                id: "b".to_string(),
                content: "branch hours".to_string(),
                embedding: vec![0.0, 1.0],
            },
            IndexedPassage {
                id: "c".to_string(),
                content: "interest rates".to_string(),
                embedding: vec![0.9, 0.1],
            },
            IndexedPassage {
                id: "d".to_string(),
                content: "documents needed".to_string(),
                embedding: vec![0.8, 0.2],
            },
        ]))
    }

    #[tokio::test]
    async fn test_retrieve_returns_at_most_top_k() {
        let retriever = IndexRetriever::new(index(), Arc::new(FixedEmbedder(vec![1.0, 0.0])), 3);
        let results = retriever.retrieve("what are the rates").await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "a");
    }

    #[tokio::test]
    async fn test_retrieve_orders_descending() {
        let retriever = IndexRetriever::new(index(), Arc::new(FixedEmbedder(vec![1.0, 0.0])), 3);
        let results = retriever.retrieve("query").await.unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[tokio::test]
    async fn test_embedding_failure_propagates() {
        let retriever = IndexRetriever::new(index(), Arc::new(FailingEmbedder), 3);
        assert!(retriever.retrieve("query").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_index_returns_no_passages() {
        let empty = Arc::new(PassageIndex::from_passages(Vec::new()));
        let retriever = IndexRetriever::new(empty, Arc::new(FixedEmbedder(vec![1.0, 0.0])), 3);
        let results = retriever.retrieve("query").await.unwrap();
        assert!(results.is_empty());
    }
}
