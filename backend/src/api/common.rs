//! Error handling utilities for API responses.
//!
//! Provides the conversion between service-layer errors and HTTP responses.
//!
//! # Response Format
//! Failures carry a minimal JSON body: `{"message": ...}` for most errors,
//! `{"error": [...]}` with field-level messages for validation failures.
//! Internal detail (driver errors, stack context) goes to the log, never
//! to the client.

use crate::errors::ServiceError;
use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

/// Converts a ServiceError to the corresponding HTTP status and JSON body.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, Json<Value>) {
    match error {
        ServiceError::Validation { messages } => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": messages })))
        }
        ServiceError::NotFound { entity, .. } => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("{} not found", entity) })),
        ),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::CONFLICT,
            Json(json!({ "message": format!("{} '{}' already exists", entity, identifier) })),
        ),
        error @ (ServiceError::InvalidCredentials | ServiceError::InvalidToken) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": error.to_string() })),
        ),
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
        }
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_error_taxonomy_to_statuses() {
        let (status, _) = service_error_to_http(ServiceError::validation(vec![
            "email: Must be a valid email".to_string(),
        ]));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = service_error_to_http(ServiceError::not_found("Content", "c-1"));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = service_error_to_http(ServiceError::already_exists("User", "alice"));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = service_error_to_http(ServiceError::InvalidCredentials);
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = service_error_to_http(ServiceError::InvalidToken);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn validation_body_lists_field_messages() {
        let (_, Json(body)) = service_error_to_http(ServiceError::validation(vec![
            "title: Title is required".to_string(),
        ]));

        let messages = body["error"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], "title: Title is required");
    }

    #[test]
    fn internal_errors_never_leak_detail() {
        let inner = anyhow::anyhow!("connection refused at 127.0.0.1:5432");
        let (status, Json(body)) = service_error_to_http(ServiceError::Database { source: inner });

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
        assert!(!body.to_string().contains("127.0.0.1"));
    }

    #[test]
    fn not_found_body_matches_the_entity() {
        let (_, Json(body)) = service_error_to_http(ServiceError::not_found("Content", "c-1"));
        assert_eq!(body["message"], "Content not found");
    }
}
