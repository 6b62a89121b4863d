//! Chunked speech synthesis client
//!
//! Answer text is normalized, partitioned into bounded chunks, and each
//! chunk is synthesized independently by the voice service. Surviving
//! chunks are decoded and concatenated in original order into one WAV
//! file. One chunk's failure never aborts the batch.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use vaani_config::constants::speech::SPEAKERS;
use vaani_core::{Language, SpeechSynthesizer};

use crate::chunk::{chunk_text, normalize_for_speech};
use crate::SpeechError;

/// Synthesizer configuration
#[derive(Debug, Clone)]
pub struct SynthesizerConfig {
    /// Voice service base URL
    pub endpoint: String,
    /// Subscription key
    pub api_key: String,
    /// TTS model identifier
    pub model: String,
    /// Maximum characters per chunk
    pub chunk_size: usize,
    /// Per-request timeout
    pub timeout: Duration,
}

impl From<&vaani_config::SpeechConfig> for SynthesizerConfig {
    fn from(config: &vaani_config::SpeechConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.tts_model.clone(),
            chunk_size: config.chunk_size,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Request to the text-to-speech endpoint
#[derive(Debug, Serialize)]
struct TtsRequest {
    text: String,
    target_language_code: String,
    speaker: String,
    model: String,
}

/// Response from the text-to-speech endpoint
#[derive(Debug, Deserialize)]
struct TtsResponse {
    #[serde(default)]
    audios: Vec<String>,
}

/// Speech synthesis via the Sarvam text-to-speech endpoint
pub struct SarvamSynthesizer {
    client: Client,
    config: SynthesizerConfig,
}

impl SarvamSynthesizer {
    pub fn new(config: SynthesizerConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Pick the voice for one synthesis request
    ///
    /// Chosen once per request and reused for every chunk, so a multi-chunk
    /// answer never switches voices mid-stream.
    fn pick_speaker(requested: Option<&str>) -> String {
        match requested {
            Some(name) => name.to_string(),
            None => SPEAKERS
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(SPEAKERS[0])
                .to_string(),
        }
    }

    /// Synthesize one chunk, returning the decoded WAV payload
    async fn synthesize_chunk(
        &self,
        chunk: &str,
        language_code: &str,
        speaker: &str,
    ) -> Result<Vec<u8>, SpeechError> {
        let url = format!("{}/text-to-speech", self.config.endpoint);

        let request = TtsRequest {
            text: chunk.to_string(),
            target_language_code: language_code.to_string(),
            speaker: speaker.to_string(),
            model: self.config.model.clone(),
        };

        let response = self
            .client
            .post(&url)
            .header("api-subscription-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: TtsResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::Decode(format!("Failed to parse TTS response: {}", e)))?;

        let audio_b64 = body
            .audios
            .into_iter()
            .next()
            .ok_or_else(|| SpeechError::Decode("No audio payload returned".to_string()))?;

        BASE64
            .decode(audio_b64.as_bytes())
            .map_err(|e| SpeechError::Decode(format!("Invalid base64 audio: {}", e)))
    }
}

#[async_trait]
impl SpeechSynthesizer for SarvamSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        out_path: &Path,
        speaker: Option<&str>,
    ) -> vaani_core::Result<Option<PathBuf>> {
        let normalized = normalize_for_speech(text);
        let chunks = chunk_text(&normalized, self.config.chunk_size);
        if chunks.is_empty() {
            tracing::warn!("Nothing to synthesize after normalization");
            return Ok(None);
        }

        let speaker = Self::pick_speaker(speaker);
        let mut combined: Vec<i16> = Vec::new();
        let mut spec: Option<hound::WavSpec> = None;
        let mut succeeded = 0usize;

        for (i, chunk) in chunks.iter().enumerate() {
            match self
                .synthesize_chunk(chunk, language.code(), &speaker)
                .await
            {
                Ok(wav_bytes) => match append_wav(&wav_bytes, &mut combined, &mut spec) {
                    Ok(()) => succeeded += 1,
                    Err(e) => {
                        tracing::warn!(chunk = i, error = %e, "Skipping undecodable audio chunk");
                    }
                },
                Err(e) => {
                    tracing::warn!(chunk = i, error = %e, "Synthesis chunk failed");
                }
            }
        }

        if succeeded == 0 {
            tracing::warn!(chunks = chunks.len(), "No audio generated");
            return Ok(None);
        }

        let Some(spec) = spec else {
            return Ok(None);
        };
        write_wav(out_path, spec, &combined).map_err(vaani_core::Error::from)?;

        tracing::info!(
            path = %out_path.display(),
            chunks = succeeded,
            total = chunks.len(),
            speaker = %speaker,
            "Audio saved"
        );

        Ok(Some(out_path.to_path_buf()))
    }

    fn service_name(&self) -> &str {
        "sarvam-tts"
    }
}

/// Decode one WAV payload and append its samples to the combined buffer
///
/// The first successful chunk fixes the sample spec; later chunks with a
/// different spec are rejected so the combined file stays coherent.
fn append_wav(
    wav_bytes: &[u8],
    combined: &mut Vec<i16>,
    spec: &mut Option<hound::WavSpec>,
) -> Result<(), SpeechError> {
    let reader = hound::WavReader::new(Cursor::new(wav_bytes))
        .map_err(|e| SpeechError::Decode(format!("Invalid WAV payload: {}", e)))?;

    let chunk_spec = reader.spec();
    if chunk_spec.sample_format != hound::SampleFormat::Int || chunk_spec.bits_per_sample != 16 {
        return Err(SpeechError::Decode(format!(
            "Unsupported sample format: {:?}/{} bits",
            chunk_spec.sample_format, chunk_spec.bits_per_sample
        )));
    }

    if let Some(existing) = spec {
        if *existing != chunk_spec {
            return Err(SpeechError::Decode(
                "Sample spec mismatch between chunks".to_string(),
            ));
        }
    }

    let samples: Result<Vec<i16>, _> = reader.into_samples::<i16>().collect();
    let samples = samples.map_err(|e| SpeechError::Decode(format!("WAV sample error: {}", e)))?;

    combined.extend(samples);
    *spec = Some(chunk_spec);
    Ok(())
}

/// Write the combined samples to `out_path`
fn write_wav(out_path: &Path, spec: hound::WavSpec, samples: &[i16]) -> Result<(), SpeechError> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = hound::WavWriter::create(out_path, spec)
        .map_err(|e| SpeechError::Decode(format!("Failed to create WAV: {}", e)))?;
    for sample in samples {
        writer
            .write_sample(*sample)
            .map_err(|e| SpeechError::Decode(format!("Failed to write WAV: {}", e)))?;
    }
    writer
        .finalize()
        .map_err(|e| SpeechError::Decode(format!("Failed to finalize WAV: {}", e)))?;
    Ok(())
}
