//! Defines the HTTP routes for content management.
//!
//! Every content route sits behind the session middleware; any
//! authenticated user may read or modify any record.

use super::handlers::*;
use crate::auth::middleware::auth_required;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn content_router() -> Router {
    Router::new()
        .route("/list-contents", get(list_contents))
        .route("/get-user-contents", get(get_user_contents))
        .route("/get-content/{id}", get(get_content_by_id))
        .route("/create-content", post(create_content))
        .route("/update-content/{id}", put(update_content))
        .route("/delete-content/{id}", delete(delete_content))
        .layer(middleware::from_fn(auth_required))
}
