//! Text normalization and chunk partitioning for speech synthesis
//!
//! The voice service accepts at most 300 characters per request, so answer
//! text is partitioned into contiguous, non-overlapping chunks in original
//! order. Boundaries are Unicode scalar values, never bytes - Indic scripts
//! are multi-byte throughout.

/// Normalize answer text before synthesis: newlines become spaces, the
/// markdown emphasis marker is stripped, surrounding whitespace trimmed.
pub fn normalize_for_speech(text: &str) -> String {
    text.replace('\n', " ").replace("**", "").trim().to_string()
}

/// Partition `text` into chunks of at most `max_chars` characters
///
/// Chunks are contiguous and non-overlapping; the last chunk may be
/// shorter. Empty input produces no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    assert!(max_chars > 0, "max_chars must be positive");

    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_newlines_and_emphasis() {
        assert_eq!(
            normalize_for_speech("  **Rates** are\n10.5% per year.\n"),
            "Rates are 10.5% per year."
        );
    }

    #[test]
    fn test_exact_boundary_is_one_chunk() {
        let text = "a".repeat(300);
        let chunks = chunk_text(&text, 300);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chars().count(), 300);
    }

    #[test]
    fn test_one_over_boundary_is_two_chunks() {
        let text = "a".repeat(301);
        let chunks = chunk_text(&text, 300);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 300);
        assert_eq!(chunks[1].chars().count(), 1);
    }

    #[test]
    fn test_empty_text_produces_no_chunks() {
        assert!(chunk_text("", 300).is_empty());
    }

    #[test]
    fn test_repartition_is_idempotent() {
        let text = "नमस्ते दुनिया ".repeat(80);
        let chunks = chunk_text(&text, 300);
        let rejoined: String = chunks.concat();
        assert_eq!(rejoined, text);
        assert_eq!(chunk_text(&rejoined, 300), chunks);
    }

    #[test]
    fn test_chunks_respect_char_boundaries() {
        // Devanagari is multi-byte; chunking must count characters
        let text = "क".repeat(305);
        let chunks = chunk_text(&text, 300);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 300);
        assert_eq!(chunks[1].chars().count(), 5);
    }
}
