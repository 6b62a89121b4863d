//! HTTP Endpoints
//!
//! REST API for the voice QA service.

use axum::{
    extract::State,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::ask;
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.config.server.cors_origins,
        state.config.server.cors_enabled,
    );

    Router::new()
        // Query endpoints
        .route("/api/ask", post(ask::ask_text))
        .route("/api/ask-voice", post(ask::ask_voice))
        // Maintenance
        .route("/api/admin/clear-audio", post(clear_audio))
        // Health check
        .route("/health", get(health_check))
        // Synthesized audio is served as static content
        .nest_service("/static", ServeDir::new(&state.config.server.audio_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(true)
}

/// Health check
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "index_documents": state.index_documents,
        "transcriber": state.transcriber.service_name(),
        "synthesizer": state.synthesizer.service_name(),
    }))
}

/// Clear the audio output directory
///
/// Takes the directory write lock so no in-flight synthesis write races
/// the deletions. Per-file failures are logged and skipped.
async fn clear_audio(State(state): State<AppState>) -> Json<serde_json::Value> {
    let _guard = state.audio_dir_lock.write().await;

    let dir = Path::new(&state.config.server.audio_dir);
    let mut deleted: Vec<String> = Vec::new();

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "Audio directory not readable");
            return Json(serde_json::json!({ "status": "success", "deleted": deleted }));
        }
    };

    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let path = entry.path();
                let is_file = entry
                    .file_type()
                    .await
                    .map(|t| t.is_file())
                    .unwrap_or(false);
                if !is_file {
                    continue;
                }
                match tokio::fs::remove_file(&path).await {
                    Ok(()) => deleted.push(entry.file_name().to_string_lossy().into_owned()),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to delete audio file");
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read audio directory entry");
                break;
            }
        }
    }

    tracing::info!(deleted = deleted.len(), "Cleared audio directory");
    Json(serde_json::json!({ "status": "success", "deleted": deleted }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    use vaani_agent::QaChain;
    use vaani_config::Settings;
    use vaani_core::{
        Language, LanguageIdentifier, LanguageModel, Passage, Result, Retriever,
        SpeechSynthesizer, SpeechToText, Transcription,
    };

    struct MockIdentifier(Option<String>);

    #[async_trait]
    impl LanguageIdentifier for MockIdentifier {
        async fn identify(&self, _text: &str) -> Option<String> {
            self.0.clone()
        }
    }

    struct MockTranscriber(Transcription);

    #[async_trait]
    impl SpeechToText for MockTranscriber {
        async fn transcribe(&self, _audio: &[u8]) -> Result<Transcription> {
            Ok(self.0.clone())
        }

        fn service_name(&self) -> &str {
            "mock-stt"
        }
    }

    #[derive(Default)]
    struct MockSynthesizer {
        called: AtomicBool,
    }

    #[async_trait]
    impl SpeechSynthesizer for MockSynthesizer {
        async fn synthesize(
            &self,
            _text: &str,
            _language: Language,
            _out_path: &std::path::Path,
            _speaker: Option<&str>,
        ) -> Result<Option<PathBuf>> {
            self.called.store(true, Ordering::SeqCst);
            Ok(None)
        }

        fn service_name(&self) -> &str {
            "mock-tts"
        }
    }

    struct MockRetriever;

    #[async_trait]
    impl Retriever for MockRetriever {
        async fn retrieve(&self, _query: &str) -> Result<Vec<Passage>> {
            Ok(Vec::new())
        }
    }

    #[derive(Default)]
    struct MockLlm {
        called: AtomicBool,
    }

    #[async_trait]
    impl LanguageModel for MockLlm {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.called.store(true, Ordering::SeqCst);
            Ok("mock answer".to_string())
        }

        fn model_name(&self) -> &str {
            "mock"
        }
    }

    struct TestHarness {
        state: AppState,
        llm: Arc<MockLlm>,
        synthesizer: Arc<MockSynthesizer>,
        _audio_dir: tempfile::TempDir,
    }

    fn harness(identified: Option<String>, transcription: Transcription) -> TestHarness {
        let audio_dir = tempfile::tempdir().unwrap();
        let mut config = Settings::default();
        config.server.audio_dir = audio_dir.path().to_string_lossy().into_owned();
        config.server.chat_log_path = audio_dir
            .path()
            .join("chat_log.txt")
            .to_string_lossy()
            .into_owned();

        let llm = Arc::new(MockLlm::default());
        let synthesizer = Arc::new(MockSynthesizer::default());
        let qa = Arc::new(QaChain::new(Arc::new(MockRetriever), llm.clone()));

        let state = AppState::new(
            config,
            Arc::new(MockIdentifier(identified)),
            Arc::new(MockTranscriber(transcription)),
            synthesizer.clone(),
            qa,
            0,
        );

        TestHarness {
            state,
            llm,
            synthesizer,
            _audio_dir: audio_dir,
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_router_creation() {
        let h = harness(None, Transcription::new("", ""));
        let _ = create_router(h.state);
    }

    #[tokio::test]
    async fn test_health_check() {
        let h = harness(None, Transcription::new("", ""));
        let app = create_router(h.state);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["index_documents"], 0);
    }

    #[tokio::test]
    async fn test_clear_audio_empty_directory() {
        let h = harness(None, Transcription::new("", ""));
        let app = create_router(h.state);

        let response = app
            .oneshot(
                Request::post("/api/admin/clear-audio")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["deleted"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_clear_audio_deletes_files() {
        let h = harness(None, Transcription::new("", ""));
        let audio_dir = h.state.config.server.audio_dir.clone();
        std::fs::write(format!("{}/tts_1.wav", audio_dir), b"a").unwrap();
        std::fs::write(format!("{}/tts_2.wav", audio_dir), b"b").unwrap();

        let app = create_router(h.state);
        let response = app
            .oneshot(
                Request::post("/api/admin/clear-audio")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["deleted"].as_array().unwrap().len(), 2);
        assert_eq!(std::fs::read_dir(&audio_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_ask_text_greeting_short_circuits() {
        let h = harness(Some("hi-IN".to_string()), Transcription::new("", ""));
        let llm = h.llm.clone();
        let app = create_router(h.state);

        let response = app
            .oneshot(
                Request::post("/api/ask")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text":"hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["response"], Language::Hindi.greeting());
        assert_eq!(json["voice_output"], serde_json::Value::Null);
        assert!(!llm.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_ask_text_unknown_language_defaults_to_english() {
        let h = harness(Some("fr-FR".to_string()), Transcription::new("", ""));
        let app = create_router(h.state);

        let response = app
            .oneshot(
                Request::post("/api/ask")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text":"hey"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["response"], Language::English.greeting());
    }

    fn multipart_request(uri: &str) -> Request<Body> {
        let boundary = "test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"audio.wav\"\r\n\
             Content-Type: audio/wav\r\n\
             \r\n\
             RIFFfake\r\n\
             --{boundary}--\r\n"
        );
        Request::post(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_ask_voice_empty_transcript_short_circuits() {
        let h = harness(None, Transcription::new("", ""));
        let llm = h.llm.clone();
        let synthesizer = h.synthesizer.clone();
        let app = create_router(h.state);

        let response = app.oneshot(multipart_request("/api/ask-voice")).await.unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["transcript"], "");
        assert_eq!(json["response"], "");
        assert_eq!(json["error"], "Transcription failed");
        assert!(!llm.called.load(Ordering::SeqCst));
        assert!(!synthesizer.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_ask_voice_answers_in_detected_language() {
        let h = harness(
            None,
            Transcription::new("What are the rates?", "ta-IN"),
        );
        let llm = h.llm.clone();
        let app = create_router(h.state);

        let response = app.oneshot(multipart_request("/api/ask-voice")).await.unwrap();

        let json = body_json(response).await;
        assert_eq!(json["transcript"], "What are the rates?");
        assert_eq!(json["language_code"], "ta-IN");
        assert_eq!(json["response"], "mock answer");
        assert!(llm.called.load(Ordering::SeqCst));
    }
}
