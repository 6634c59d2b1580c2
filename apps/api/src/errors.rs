use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::CompletionError;
use crate::parser_client::ParseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Date format error: {0}")]
    DateFormat(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Http(e) => AppError::Transport(e.to_string()),
            ParseError::Api { status, message } => AppError::Provider { status, message },
            ParseError::Decode(message) => AppError::MalformedResponse(message),
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Http(e) => AppError::Transport(e.to_string()),
            CompletionError::Api { status, message } => AppError::Provider { status, message },
            // A success response missing its choices is a provider fault
            CompletionError::Decode(message) => AppError::Provider {
                status: 200,
                message,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Transport(msg) => {
                tracing::error!("Transport error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "TRANSPORT_ERROR",
                    "A provider could not be reached".to_string(),
                )
            }
            AppError::Provider { status, message } => {
                tracing::error!("Provider error (status {status}): {message}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    "A provider call failed".to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed provider response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_RESPONSE",
                    "A provider returned an unexpected response".to_string(),
                )
            }
            AppError::DateFormat(msg) => {
                tracing::error!("Date format error: {msg}");
                (StatusCode::BAD_GATEWAY, "DATE_FORMAT_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_error_maps_to_provider() {
        let err: AppError = ParseError::Api {
            status: 402,
            message: "account limit".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Provider { status: 402, .. }));
    }

    #[test]
    fn test_parse_decode_error_maps_to_malformed_response() {
        let err: AppError = ParseError::Decode("missing field `Value`".to_string()).into();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_completion_decode_error_maps_to_provider() {
        let err: AppError = CompletionError::Decode("missing field `choices`".to_string()).into();
        assert!(matches!(err, AppError::Provider { .. }));
    }
}
