//! Voice QA Server
//!
//! HTTP endpoints for the text and voice query flows, audio maintenance,
//! and static audio serving.

pub mod ask;
pub mod chat_log;
pub mod http;
pub mod state;

pub use chat_log::ChatLog;
pub use http::create_router;
pub use state::AppState;

use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Transcription failed")]
    Transcription,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<vaani_core::Error> for ServerError {
    fn from(err: vaani_core::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

impl From<ServerError> for axum::http::StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::Transcription => axum::http::StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::InvalidRequest(_) => axum::http::StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
