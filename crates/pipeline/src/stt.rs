//! Speech-to-text client

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use vaani_core::{SpeechToText, Transcription};

use crate::SpeechError;

/// Response from the speech-to-text-translate endpoint
#[derive(Debug, Deserialize)]
struct SttResponse {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    language_code: String,
}

/// Transcription via the Sarvam speech-to-text-translate endpoint
///
/// The provider both transcribes and translates, returning the transcript
/// alongside the detected source language tag. A failed request is an
/// `Err`; a legitimately empty transcript is `Ok` with empty text.
pub struct SarvamTranscriber {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SarvamTranscriber {
    pub fn new(config: &vaani_config::SpeechConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl SpeechToText for SarvamTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> vaani_core::Result<Transcription> {
        let url = format!("{}/speech-to-text-translate", self.endpoint);

        let part = Part::bytes(audio.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| SpeechError::Network(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .header("api-subscription-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(SpeechError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Transcription failed");
            return Err(SpeechError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body: SttResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::Decode(format!("Failed to parse STT response: {}", e)))?;

        tracing::debug!(
            language_code = %body.language_code,
            transcript_len = body.transcript.len(),
            "Transcription complete"
        );

        Ok(Transcription::new(body.transcript, body.language_code))
    }

    fn service_name(&self) -> &str {
        "sarvam-stt-translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        let config = vaani_config::SpeechConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            api_key: "test".to_string(),
            timeout_secs: 1,
            ..Default::default()
        };
        let stt = SarvamTranscriber::new(&config);
        assert!(stt.transcribe(&[0u8; 16]).await.is_err());
    }

    #[test]
    fn test_response_fields_default_to_empty() {
        let parsed: SttResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.transcript.is_empty());
        assert!(parsed.language_code.is_empty());
    }
}
