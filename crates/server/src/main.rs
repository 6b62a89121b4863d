//! Voice QA Server Entry Point

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use vaani_agent::QaChain;
use vaani_config::{load_settings, Settings};
use vaani_llm::{GeminiBackend, GeminiConfig};
use vaani_pipeline::{SarvamLanguageId, SarvamSynthesizer, SarvamTranscriber, SynthesizerConfig};
use vaani_rag::{EmbeddingConfig, IndexRetriever, OllamaEmbedder, PassageIndex};
use vaani_server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from files and environment
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("VAANI_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!(
                "Loaded configuration (env: {})",
                env.as_deref().unwrap_or("default")
            );
            settings
        }
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!("Starting Voice QA Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    // Audio output directory must exist before the static file service
    // and the first synthesis write
    std::fs::create_dir_all(&config.server.audio_dir)?;

    // Load the pre-built passage index (immutable for the process lifetime)
    let index = PassageIndex::load(Path::new(&config.rag.index_path))?;
    let index_documents = index.len();
    tracing::info!(
        path = %config.rag.index_path,
        documents = index_documents,
        "Passage index loaded"
    );

    // Long-lived service handles, constructed once and injected into handlers
    let embedder = Arc::new(OllamaEmbedder::new(EmbeddingConfig::from(&config.rag)));
    let retriever = Arc::new(IndexRetriever::new(
        Arc::new(index),
        embedder,
        config.rag.top_k,
    ));

    let llm = Arc::new(GeminiBackend::new(GeminiConfig::from(&config.llm))?);
    tracing::info!(model = %config.llm.model, "Generative backend ready");

    let qa = Arc::new(QaChain::new(retriever, llm));

    let identifier = Arc::new(SarvamLanguageId::new(&config.speech));
    let transcriber = Arc::new(SarvamTranscriber::new(&config.speech));
    let synthesizer = Arc::new(SarvamSynthesizer::new(SynthesizerConfig::from(
        &config.speech,
    )));

    let port = config.server.port;
    let state = AppState::new(
        config,
        identifier,
        transcriber,
        synthesizer,
        qa,
        index_documents,
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Initialize tracing from the observability config
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("vaani={},tower_http=debug", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
