//! Prompt construction
//!
//! The prompt pins the generator to the retrieved context: it must answer
//! strictly in the target language, only from the context, and reply with
//! the exact fallback phrase when the context does not contain the answer.

use vaani_core::{Language, Passage};

/// Build the QA prompt
///
/// Pure function of its inputs; constructed fresh per request. An empty
/// context blob still yields a well-formed prompt with the fallback
/// instruction intact.
pub fn build_prompt(question: &str, context: &str, language: Language) -> String {
    format!(
        "You are a helpful assistant. Always respond strictly in {lang}.\n\
         You must answer using **only** the provided context.\n\
         If the answer is not in the context, reply exactly: \"{fallback}\"\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         Question:\n\
         {question}\n",
        lang = language.name(),
        fallback = language.fallback(),
        context = context,
        question = question,
    )
}

/// Join retrieved passages into the context blob, blank-line separated
pub fn context_blob(passages: &[Passage]) -> String {
    passages
        .iter()
        .map(|p| p.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_fallback_verbatim() {
        let prompt = build_prompt("What is the rate?", "Rates are 10%.", Language::Hindi);
        assert!(prompt.contains(Language::Hindi.fallback()));
        assert!(prompt.contains("Hindi"));
        assert!(prompt.contains("What is the rate?"));
        assert!(prompt.contains("Rates are 10%."));
    }

    #[test]
    fn test_prompt_well_formed_with_empty_context() {
        let prompt = build_prompt("What is the rate?", "", Language::English);
        assert!(prompt.contains("Context:\n\n"));
        assert!(prompt.contains(Language::English.fallback()));
        assert!(prompt.contains("Question:\nWhat is the rate?"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt("q", "c", Language::Tamil);
        let b = build_prompt("q", "c", Language::Tamil);
        assert_eq!(a, b);
    }

    #[test]
    fn test_context_blob_joins_with_blank_line() {
        let passages = vec![
            Passage {
                id: "1".to_string(),
                content: "first".to_string(),
                score: 0.9,
            },
            Passage {
                id: "2".to_string(),
                content: "second".to_string(),
                score: 0.8,
            },
        ];
        assert_eq!(context_blob(&passages), "first\n\nsecond");
        assert_eq!(context_blob(&[]), "");
    }
}
