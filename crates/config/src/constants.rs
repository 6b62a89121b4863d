//! Centralized constants for the voice QA service
//!
//! Single source of truth for provider defaults and pipeline limits used
//! across the codebase.

/// Service endpoints (defaults; override via settings)
pub mod endpoints {
    /// Sarvam speech/language API
    pub const SARVAM_DEFAULT: &str = "https://api.sarvam.ai";

    /// Google Generative Language API
    pub const GEMINI_DEFAULT: &str = "https://generativelanguage.googleapis.com";

    /// Ollama embedding endpoint
    pub const OLLAMA_DEFAULT: &str = "http://localhost:11434";
}

/// Speech synthesis limits and roster
pub mod speech {
    /// Maximum characters per synthesis chunk (provider request limit)
    pub const CHUNK_MAX_CHARS: usize = 300;

    /// TTS model identifier
    pub const TTS_MODEL: &str = "bulbul:v2";

    /// Named speaker voices available for synthesis
    pub const SPEAKERS: [&str; 7] = [
        "anushka", "manisha", "vidya", "arya", "abhilash", "karun", "hitesh",
    ];
}

/// Retrieval defaults
pub mod rag {
    /// Passages returned per query
    pub const DEFAULT_TOP_K: usize = 3;

    /// Default embedding model served by the embedding endpoint
    pub const DEFAULT_EMBEDDING_MODEL: &str = "qwen3-embedding:0.6b";
}

/// Generation defaults
pub mod llm {
    /// Low temperature favoring deterministic, context-bound answers
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;

    /// Default generative model
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
}
