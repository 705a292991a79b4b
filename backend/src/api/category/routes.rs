//! Defines the HTTP routes for category management.
//!
//! Every category route sits behind the session middleware.

use super::handlers::*;
use crate::auth::middleware::auth_required;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn category_router() -> Router {
    Router::new()
        .route("/list-categories", get(list_categories))
        .route("/get-category/{id}", get(get_category_by_id))
        .route("/create-category", post(create_category))
        .route("/update-category/{id}", put(update_category))
        .route("/delete-category/{id}", delete(delete_category))
        .layer(middleware::from_fn(auth_required))
}
