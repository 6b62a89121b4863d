//! QA chain

use std::sync::Arc;

use vaani_core::{Language, LanguageModel, Result, Retriever};
use vaani_llm::prompt::{build_prompt, context_blob};

/// Greeting tokens answered without touching the retriever or generator
const GREETING_TOKENS: [&str; 3] = ["hi", "hello", "hey"];

/// Check whether the trimmed, lowercased input is a bare greeting
fn is_greeting(text: &str) -> bool {
    GREETING_TOKENS.contains(&text.trim().to_lowercase().as_str())
}

/// Retrieval-augmented answer pipeline
///
/// Holds long-lived handles to the retriever and generative model; one
/// instance serves all requests.
pub struct QaChain {
    retriever: Arc<dyn Retriever>,
    llm: Arc<dyn LanguageModel>,
}

impl QaChain {
    pub fn new(retriever: Arc<dyn Retriever>, llm: Arc<dyn LanguageModel>) -> Self {
        Self { retriever, llm }
    }

    /// Answer a question in the resolved language
    ///
    /// Greetings return the canned greeting immediately. Otherwise the
    /// question is answered strictly from retrieved context, with the
    /// language's fallback phrase when the context is insufficient.
    pub async fn answer(&self, question: &str, language: Language) -> Result<String> {
        if is_greeting(question) {
            tracing::debug!(language = %language, "Greeting short-circuit");
            return Ok(language.greeting().to_string());
        }

        let passages = self.retriever.retrieve(question).await?;
        let context = context_blob(&passages);

        tracing::debug!(
            passages = passages.len(),
            context_len = context.len(),
            language = %language,
            "Building QA prompt"
        );

        let prompt = build_prompt(question, &context, language);
        self.llm.generate(&prompt).await
    }
}
