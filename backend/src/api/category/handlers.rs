//! Handler functions for category management API endpoints.
//!
//! Same thin-passthrough contract as the content handlers; categories have
//! no owner.

use crate::api::common::service_error_to_http;
use crate::database::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::errors::ServiceError;
use crate::repositories::category_repository::CategoryRepository;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use validator::Validate;

/// Retrieves every category record.
#[axum::debug_handler]
pub async fn list_categories(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Vec<Category>>, (StatusCode, Json<Value>)> {
    let repo = CategoryRepository::new(&pool);

    match repo.list_all().await {
        Ok(categories) => Ok(Json(categories)),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Retrieves a category record by its ID.
#[axum::debug_handler]
pub async fn get_category_by_id(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Category>, (StatusCode, Json<Value>)> {
    let repo = CategoryRepository::new(&pool);

    match repo.get_by_id(&id).await {
        Ok(Some(category)) => Ok(Json(category)),
        Ok(None) => Err(service_error_to_http(ServiceError::not_found(
            "Category", &id,
        ))),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Creates a category record.
#[axum::debug_handler]
pub async fn create_category(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if let Err(errors) = payload.validate() {
        return Err(service_error_to_http(ServiceError::from_validation_errors(
            errors,
        )));
    }

    let repo = CategoryRepository::new(&pool);

    match repo.create(payload).await {
        Ok(category) => Ok(Json(
            json!({ "message": "Category saved", "category": category }),
        )),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Updates a category record by its ID, keeping fields absent from the body.
#[axum::debug_handler]
pub async fn update_category(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, (StatusCode, Json<Value>)> {
    let repo = CategoryRepository::new(&pool);

    match repo.update(&id, payload).await {
        Ok(Some(category)) => Ok(Json(category)),
        Ok(None) => Err(service_error_to_http(ServiceError::not_found(
            "Category", &id,
        ))),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}

/// Deletes a category record by its ID.
#[axum::debug_handler]
pub async fn delete_category(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let repo = CategoryRepository::new(&pool);

    match repo.delete(&id).await {
        Ok(true) => Ok(Json(json!({ "message": "Category deleted" }))),
        Ok(false) => Err(service_error_to_http(ServiceError::not_found(
            "Category", &id,
        ))),
        Err(error) => Err(service_error_to_http(error.into())),
    }
}
