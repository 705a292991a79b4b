//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user registration, login, logout and profile lookup.
//! Register and login establish the session, so only the profile route sits
//! behind the session middleware.

use crate::auth::handlers::*;
use crate::auth::middleware::auth_required;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route(
            "/profile",
            get(profile).layer(middleware::from_fn(auth_required)),
        )
}
