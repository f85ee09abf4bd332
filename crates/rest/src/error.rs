//! Error types for the todotag REST API.
//!
//! This module defines the REST layer's error type, with automatic
//! conversion from storage errors and request body rejections, and
//! translation into an HTTP status plus JSON error body.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Code |
//! |-------|-------------|------|
//! | NotFound | 404 | not-found |
//! | BadRequest (validation) | 400 | invalid |
//! | MalformedJson | 400 | malformed-json |
//! | UnsupportedMediaType | 415 | not-supported |
//! | InternalError | 500 | exception |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use todotag_store::StoreError;

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status
/// codes and JSON error bodies.
#[derive(Debug)]
pub enum RestError {
    /// Item or association not found (HTTP 404).
    NotFound {
        /// The entity kind ("todo" or "tag").
        kind: &'static str,
        /// The entity ID.
        id: String,
    },

    /// Bad request - validation error (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Request body is not parseable JSON (HTTP 400).
    ///
    /// Kept distinct from [`RestError::BadRequest`] so a client can tell a
    /// syntactically broken body apart from a well-formed body with invalid
    /// fields.
    MalformedJson {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { kind, id } => {
                write!(f, "Item not found: {}/{}", kind, id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::MalformedJson { message } => {
                write!(f, "Malformed JSON: {}", message)
            }
            RestError::UnsupportedMediaType { message } => {
                write!(f, "Unsupported media type: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            RestError::NotFound { kind, id } => (
                StatusCode::NOT_FOUND,
                "not-found",
                format!("Item {}/{} not found", kind, id),
            ),
            RestError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid", message.clone())
            }
            RestError::MalformedJson { message } => {
                (StatusCode::BAD_REQUEST, "malformed-json", message.clone())
            }
            RestError::UnsupportedMediaType { message } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "not-supported",
                message.clone(),
            ),
            RestError::InternalError { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "exception",
                message.clone(),
            ),
        };

        let body = error_body(code, &details);
        (status, Json(body)).into_response()
    }
}

/// Creates the JSON error body.
fn error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message,
        }
    })
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, id } => RestError::NotFound {
                kind: kind.as_str(),
                id,
            },
            StoreError::LockPoisoned => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(err) => RestError::MalformedJson {
                message: err.to_string(),
            },
            JsonRejection::JsonDataError(err) => RestError::BadRequest {
                message: err.to_string(),
            },
            JsonRejection::MissingJsonContentType(err) => RestError::UnsupportedMediaType {
                message: err.to_string(),
            },
            other => RestError::BadRequest {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use todotag_store::ItemKind;

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            kind: "todo",
            id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Item not found: todo/123");
    }

    #[test]
    fn test_store_not_found_converts_to_404() {
        let err: RestError = StoreError::not_found(ItemKind::Tag, "abc").into();
        assert!(matches!(
            err,
            RestError::NotFound { kind: "tag", .. }
        ));
    }

    #[test]
    fn test_lock_poisoned_converts_to_internal() {
        let err: RestError = StoreError::LockPoisoned.into();
        assert!(matches!(err, RestError::InternalError { .. }));
    }

    #[test]
    fn test_error_body_shape() {
        let body = error_body("not-found", "Item todo/123 not found");
        assert_eq!(body["error"]["code"], "not-found");
        assert_eq!(body["error"]["message"], "Item todo/123 not found");
    }
}
