//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! Every failure surfaced to a client goes through it, so the HTTP status and the
//! `{"message": ...}` body shape stay consistent across authentication, habits and tasks.
//!
//! `AppError` implements `actix_web::error::ResponseError` to convert application
//! errors into HTTP responses. It also provides `From` implementations for
//! `validator::ValidationErrors`, `jsonwebtoken::errors::Error`, `bcrypt::BcryptError`
//! and `tokio::task::JoinError`, allowing for easy conversion using the `?` operator.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Message returned for every internal failure. Details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failed or is missing (HTTP 401).
    Unauthorized(String),
    /// Malformed request, e.g. a body that is not valid JSON (HTTP 400).
    BadRequest(String),
    /// Missing or blank required fields (HTTP 400).
    ValidationError(String),
    /// The resource already exists, e.g. a registered email (HTTP 400).
    Conflict(String),
    /// The requested habit or task does not exist (HTTP 404).
    NotFound(String),
    /// Unexpected server-side failure (HTTP 500).
    /// The message is logged but never sent to the client.
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::ValidationError(_) | AppError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Unauthorized(msg)
            | AppError::BadRequest(msg)
            | AppError::ValidationError(msg)
            | AppError::Conflict(msg)
            | AppError::NotFound(msg) => msg.as_str(),
            AppError::InternalServerError(detail) => {
                log::error!("internal error: {}", detail);
                INTERNAL_ERROR_MESSAGE
            }
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

/// Reports the first failing rule that carries its own message, in field
/// order. Rules without one (blank or missing fields) read as "All fields required".
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        log::debug!("validation failed: {}", error);
        let mut fields: Vec<_> = error.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        let message = fields
            .iter()
            .flat_map(|(_, errors)| errors.iter())
            .find_map(|e| e.message.as_ref())
            .map(|message| message.to_string())
            .unwrap_or_else(|| "All fields required".to_string());
        AppError::ValidationError(message)
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthorized`.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        log::warn!("token rejected: {}", error);
        AppError::Unauthorized("Invalid token".into())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
/// Used by `hash_password` and `verify_password`.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(format!("bcrypt failed: {}", error))
    }
}

/// A blocking hash task that panicked or was cancelled.
impl From<tokio::task::JoinError> for AppError {
    fn from(error: tokio::task::JoinError) -> AppError {
        AppError::InternalServerError(format!("blocking task failed: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_error_responses() {
        let error = AppError::Unauthorized("Invalid token".into());
        assert_eq!(error.error_response().status(), 401);

        let error = AppError::BadRequest("Invalid input".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::ValidationError("All fields required".into());
        assert_eq!(error.error_response().status(), 400);

        // Duplicate registration keeps the 400 the web client already handles.
        let error = AppError::Conflict("User already exists".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::NotFound("Habit not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::InternalServerError("lock poisoned".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[actix_rt::test]
    async fn test_internal_error_hides_detail() {
        let error = AppError::InternalServerError("users lock poisoned at store.rs".into());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
        assert!(!String::from_utf8_lossy(&body).contains("poisoned"));
    }

    #[actix_rt::test]
    async fn test_error_body_uses_message_key() {
        let error = AppError::NotFound("Task not found".into());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, json!({ "message": "Task not found" }));
    }

    #[test]
    fn test_validation_message_names_the_rule() {
        use validator::ValidationError;

        let mut blank = ValidationErrors::new();
        blank.add("title", ValidationError::new("blank"));
        match AppError::from(blank) {
            AppError::ValidationError(msg) => assert_eq!(msg, "All fields required"),
            other => panic!("expected ValidationError, got {:?}", other),
        }

        let mut too_long = ValidationErrors::new();
        let mut length = ValidationError::new("length");
        length.message = Some("Title must be at most 200 characters".into());
        too_long.add("title", length);
        too_long.add("notes", ValidationError::new("blank"));
        match AppError::from(too_long) {
            AppError::ValidationError(msg) => {
                assert_eq!(msg, "Title must be at most 200 characters")
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
