use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::engine::{DictionaryEngine, EngineError};
use crate::query::DecodeError;

/// Uniform error/scalar envelope. Every error path serializes to this shape,
/// so clients distinguish success from failure by HTTP status only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed numeric path segment; message is localized and names the
    /// offending token.
    #[error("{0}")]
    InvalidInput(String),

    /// Well-formed query that matched nothing. Deliberately a client-visible
    /// 400, never a 200 with an empty body.
    #[error("no results")]
    NoResults,

    /// Engine-internal failure, e.g. a failed dictionary reload.
    #[error("dictionary engine failure: {0}")]
    Engine(String),
}

impl ApiError {
    /// Map a decode failure to a localized 400, the way the original service
    /// wrapped the engine's `invalidDecimalError`/`invalidIntError` texts
    /// around the offending token.
    pub fn from_decode(e: DecodeError, engine: &dyn DictionaryEngine, lang: &str) -> Self {
        let (key, token) = match &e {
            DecodeError::InvalidDecimal(token) => ("invalidDecimalError", token),
            DecodeError::InvalidInteger(token) => ("invalidIntError", token),
        };
        ApiError::InvalidInput(format!("{}: {}", engine.text(key, lang), token))
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::NoResults => ApiError::NoResults,
            other => ApiError::Engine(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidInput(_) | ApiError::NoResults => StatusCode::BAD_REQUEST,
            ApiError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            ApiError::NoResults => Message::new("no results"),
            ApiError::Engine(_) => Message::new("dictionary update failed"),
            ApiError::InvalidInput(text) => Message::new(text.clone()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_results_is_bad_request() {
        let response = ApiError::NoResults.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_failure_is_internal() {
        let response = ApiError::Engine("reload failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
