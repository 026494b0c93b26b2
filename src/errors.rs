use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

/// Ways a POST /commands request can be rejected, one variant per
/// validation stage.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    #[error("Invalid JSON body")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Missing command in payload")]
    MissingCommand,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Request body too large")]
    BodyTooLarge,

    #[error("Failed to read request body")]
    BodyRead,
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        match self {
            CommandError::UnknownCommand(_) => {
                debug!("Rejected command: {}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "status": "error", "message": self.to_string() })),
                )
                    .into_response()
            }
            CommandError::BodyTooLarge => {
                warn!("{}, cutting off request", self);
                // Bare status with no JSON payload. The handler leaves the
                // rest of the upload unread, so the connection cannot be
                // reused and is closed instead of completing gracefully.
                let mut response = StatusCode::PAYLOAD_TOO_LARGE.into_response();
                response
                    .headers_mut()
                    .insert(header::CONNECTION, HeaderValue::from_static("close"));
                response
            }
            _ => {
                debug!("Rejected request: {}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message_names_the_command() {
        let err = CommandError::UnknownCommand("launch".to_string());
        assert_eq!(err.to_string(), "Unknown command 'launch'");
    }

    #[test]
    fn test_too_large_response_is_bare_and_closes() {
        let response = CommandError::BodyTooLarge.into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            response.headers().get(header::CONNECTION),
            Some(&HeaderValue::from_static("close"))
        );
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }
}
