//! Text language identification client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use vaani_core::LanguageIdentifier;

/// Request to the language identification endpoint
#[derive(Debug, Serialize)]
struct LidRequest {
    input: String,
}

/// Response from the language identification endpoint
#[derive(Debug, Deserialize)]
struct LidResponse {
    #[serde(default)]
    language_code: Option<String>,
}

/// Language identification via the Sarvam text-lid endpoint
///
/// Single attempt per call; any failure yields `None` and the caller
/// degrades to the default language.
pub struct SarvamLanguageId {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SarvamLanguageId {
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
impl LanguageIdentifier for SarvamLanguageId {
    async fn identify(&self, text: &str) -> Option<String> {
        let url = format!("{}/text-lid", self.endpoint);

        let response = self
            .client
            .post(&url)
            .header("api-subscription-key", &self.api_key)
            .json(&LidRequest {
                input: text.to_string(),
            })
            .send()
            .await;

        let response = match response {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                tracing::warn!(status = %r.status(), "Language detection failed");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Language detection failed");
                return None;
            }
        };

        match response.json::<LidResponse>().await {
            Ok(body) => {
                if let Some(code) = &body.language_code {
                    tracing::debug!(language_code = %code, "Detected language");
                }
                body.language_code
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse language detection response");
                None
            }
        }
    }
}
