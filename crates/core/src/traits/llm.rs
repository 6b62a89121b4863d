//! Language model trait

use crate::Result;
use async_trait::async_trait;

/// Generative language model interface
///
/// Implementations delegate to an external generative API. There is no
/// backend-side retry; failures surface to the caller.
#[async_trait]
pub trait LanguageModel: Send + Sync + 'static {
    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier for logging
    fn model_name(&self) -> &str;
}
