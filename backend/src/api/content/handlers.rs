//! Handler functions for content management API endpoints.
//!
//! Thin passthroughs between the HTTP layer and the content repository.
//! The session middleware has already attached the caller's identity; no
//! handler restricts access to the record's owner.

use crate::api::common::service_error_to_http;
use crate::database::models::{Content, CreateContentRequest, UpdateContentRequest};
use crate::errors::ServiceError;
use crate::repositories::content_repository::ContentRepository;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use validator::Validate;

/// Retrieves every content record.
#[axum::debug_handler]
pub async fn list_contents(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Vec<Content>>, (StatusCode, Json<Value>)> {
    let repo = ContentRepository::new(&pool);

    match repo.list_all().await {
        Ok(contents) => Ok(Json(contents)),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Retrieves the content records created by the requesting user.
#[axum::debug_handler]
pub async fn get_user_contents(
    Extension(claims): Extension<Claims>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Vec<Content>>, (StatusCode, Json<Value>)> {
    let repo = ContentRepository::new(&pool);

    match repo.list_by_user(claims.user_id()).await {
        Ok(contents) => Ok(Json(contents)),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Retrieves a content record by its ID.
#[axum::debug_handler]
pub async fn get_content_by_id(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Content>, (StatusCode, Json<Value>)> {
    let repo = ContentRepository::new(&pool);

    match repo.get_by_id(&id).await {
        Ok(Some(content)) => Ok(Json(content)),
        Ok(None) => Err(service_error_to_http(ServiceError::not_found(
            "Content", &id,
        ))),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Creates a content record owned by the requesting user.
#[axum::debug_handler]
pub async fn create_content(
    Extension(claims): Extension<Claims>,
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<CreateContentRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if let Err(errors) = payload.validate() {
        return Err(service_error_to_http(ServiceError::from_validation_errors(
            errors,
        )));
    }

    let repo = ContentRepository::new(&pool);

    match repo.create(claims.user_id(), payload).await {
        Ok(content) => Ok(Json(json!({ "message": "Content saved", "content": content }))),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Updates a content record by its ID, keeping fields absent from the body.
#[axum::debug_handler]
pub async fn update_content(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateContentRequest>,
) -> Result<Json<Content>, (StatusCode, Json<Value>)> {
    let repo = ContentRepository::new(&pool);

    match repo.update(&id, payload).await {
        Ok(Some(content)) => Ok(Json(content)),
        Ok(None) => Err(service_error_to_http(ServiceError::not_found(
            "Content", &id,
        ))),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Deletes a content record by its ID.
#[axum::debug_handler]
pub async fn delete_content(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let repo = ContentRepository::new(&pool);

    match repo.delete(&id).await {
        Ok(true) => Ok(Json(json!({ "message": "Content deleted" }))),
        Ok(false) => Err(service_error_to_http(ServiceError::not_found(
            "Content", &id,
        ))),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}
