//! Append-only exchange log
//!
//! One human-readable entry per answered text query. Logging failures are
//! reported but never fail the request.

use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Append-only plain-text chat log
pub struct ChatLog {
    path: PathBuf,
}

impl ChatLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one exchange
    pub async fn append(&self, user_text: &str, bot_response: &str) {
        let entry = format!(
            "\n[{}] User: {}\nBot: {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
            user_text,
            bot_response
        );

        let result = async {
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .await?;
            file.write_all(entry.as_bytes()).await
        }
        .await;

        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to append chat log");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_writes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat_log.txt");

        let log = ChatLog::new(&path);
        log.append("What are the rates?", "Rates start at 10.5%.").await;

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("User: What are the rates?"));
        assert!(content.contains("Bot: Rates start at 10.5%."));
    }

    #[tokio::test]
    async fn test_append_is_append_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat_log.txt");

        let log = ChatLog::new(&path);
        log.append("first", "one").await;
        log.append("second", "two").await;

        let content = std::fs::read_to_string(&path).unwrap();
        let first = content.find("User: first").unwrap();
        let second = content.find("User: second").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_append_failure_is_not_fatal() {
        // Unwritable path: the parent directory does not exist
        let log = ChatLog::new("/nonexistent-dir/chat_log.txt");
        log.append("user", "bot").await;
    }
}
