//! Query flow handlers
//!
//! Two entry flows share the answer pipeline:
//! - text flow: identify language, answer, synthesize, log
//! - voice flow: persist upload, transcribe, answer, synthesize
//!
//! Any unexpected fault in either flow is caught at the flow boundary and
//! converted into the structured error payload; callers always receive
//! JSON. Audio absence is a null `voice_output`, never a failed request.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use vaani_core::Language;

use crate::state::AppState;
use crate::ServerError;

/// Text query request
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub text: String,
}

/// Text query response
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Generated answer text
    pub response: String,
    /// Absolute URL of the synthesized audio, or null when no audio
    pub voice_output: Option<String>,
}

/// Voice query response
#[derive(Debug, Serialize)]
pub struct VoiceAskResponse {
    /// Transcript of the uploaded audio
    pub transcript: String,
    /// Language tag detected by the transcriber
    pub language_code: String,
    /// Generated answer text
    pub response: String,
    /// Absolute URL of the synthesized audio, or null when no audio
    pub voice_output: Option<String>,
}

/// Structured error payload returned by both flows
#[derive(Debug, Serialize)]
pub struct FlowError {
    pub error: String,
    pub transcript: String,
    pub response: String,
}

impl FlowError {
    fn from_error(err: &ServerError) -> Self {
        Self {
            error: err.to_string(),
            transcript: String::new(),
            response: String::new(),
        }
    }
}

/// Handle a text query
pub async fn ask_text(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse {
    match text_flow(&state, &request.text).await {
        Ok(response) => (StatusCode::OK, Json(serde_json::json!(response))),
        Err(e) => {
            tracing::error!(error = %e, "Text query failed");
            (StatusCode::OK, Json(serde_json::json!(FlowError::from_error(&e))))
        }
    }
}

/// Handle a voice query
pub async fn ask_voice(
    State(state): State<AppState>,
    multipart: Multipart,
) -> impl IntoResponse {
    match voice_flow(&state, multipart).await {
        Ok(response) => (StatusCode::OK, Json(serde_json::json!(response))),
        Err(e) => {
            tracing::error!(error = %e, "Voice query failed");
            (StatusCode::OK, Json(serde_json::json!(FlowError::from_error(&e))))
        }
    }
}

/// Text flow: identify language, answer, synthesize, log
async fn text_flow(state: &AppState, text: &str) -> Result<AskResponse, ServerError> {
    let language = resolve_language(state, text).await;

    let response = state.qa.answer(text, language).await?;

    let voice_output = synthesize_answer(state, &response, language).await;

    state.chat_log.append(text, &response).await;

    Ok(AskResponse {
        response,
        voice_output,
    })
}

/// Voice flow: persist upload, transcribe, answer, synthesize
async fn voice_flow(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<VoiceAskResponse, ServerError> {
    let mut audio: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServerError::InvalidRequest(e.to_string()))?;
            audio = Some(bytes.to_vec());
            break;
        }
    }
    let audio = audio.ok_or_else(|| ServerError::InvalidRequest("Missing file field".to_string()))?;

    // Stage the upload on disk; the transcriber itself works from bytes
    let upload_path = persist_upload(&audio).await?;

    let result = state.transcriber.transcribe(&audio).await;

    let _ = tokio::fs::remove_file(&upload_path).await;

    let transcription = result.map_err(|e| {
        tracing::warn!(error = %e, "Transcription service failed");
        ServerError::Transcription
    })?;

    if transcription.is_empty() {
        return Err(ServerError::Transcription);
    }

    let language = Language::from_code_or_default(&transcription.language_code);

    let response = state.qa.answer(&transcription.text, language).await?;

    let voice_output = synthesize_answer(state, &response, language).await;

    Ok(VoiceAskResponse {
        transcript: transcription.text,
        language_code: transcription.language_code,
        response,
        voice_output,
    })
}

/// Write uploaded audio to a uniquely named temporary file
///
/// Names carry the process ID and a nanosecond timestamp so concurrent
/// uploads never clobber each other.
async fn persist_upload(audio: &[u8]) -> Result<std::path::PathBuf, ServerError> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "vaani_upload_{}_{}.wav",
        std::process::id(),
        timestamp
    ));

    tokio::fs::write(&path, audio)
        .await
        .map_err(|e| ServerError::Internal(format!("Failed to persist upload: {}", e)))?;

    Ok(path)
}

/// Resolve the response language from free text
///
/// No language signal means English; unknown tags also degrade to English.
async fn resolve_language(state: &AppState, text: &str) -> Language {
    match state.identifier.identify(text).await {
        Some(code) => Language::from_code_or_default(&code),
        None => Language::default(),
    }
}

/// Synthesize the answer into a timestamped file under the audio directory
///
/// Returns the absolute URL of the audio, or `None` when synthesis
/// produced nothing. Holds the directory read lock for the duration of the
/// write so a concurrent maintenance clear cannot race it.
async fn synthesize_answer(
    state: &AppState,
    answer: &str,
    language: Language,
) -> Option<String> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    let filename = format!("tts_{}.wav", timestamp);
    let out_path = Path::new(&state.config.server.audio_dir).join(&filename);

    let _guard = state.audio_dir_lock.read().await;

    match state
        .synthesizer
        .synthesize(answer, language, &out_path, None)
        .await
    {
        Ok(Some(_)) => Some(format!(
            "{}/static/{}",
            state.config.server.public_base_url.trim_end_matches('/'),
            filename
        )),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Speech synthesis failed");
            None
        }
    }
}
