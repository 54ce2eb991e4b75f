use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::arbiter::ArbiterError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal position, checkmate or stalemate. Not a fault, but
    /// there is no move to return.
    #[error("no legal moves in position")]
    NoLegalMoves,

    #[error("invalid position: {0}")]
    BadPosition(String),
}

impl From<ArbiterError> for AppError {
    fn from(e: ArbiterError) -> Self {
        match e {
            ArbiterError::NoLegalMoves => AppError::NoLegalMoves,
            ArbiterError::BadPosition(msg) => AppError::BadPosition(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NoLegalMoves => (StatusCode::BAD_REQUEST, self.to_string()),
            // An unparseable position payload is reported as a server
            // fault rather than a client error.
            AppError::BadPosition(msg) => {
                tracing::error!("Bad position payload: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
