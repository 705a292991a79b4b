//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for registration, login,
//! logout and profile lookup, manage the session cookie, and delegate the
//! business logic to `auth::service`.

use crate::api::common::service_error_to_http;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::utils::cookies;
use crate::utils::jwt::{Claims, JwtUtils};
use axum::{
    extract::{Extension, Json},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::{Value, json};
use sqlx::SqlitePool;

/// Handle user registration: create the account and open the session.
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let cookie_max_age = jwt_utils.expires_in_seconds();
    let auth_service = AuthService::new(&pool, jwt_utils);

    match auth_service.register(payload).await {
        Ok(session) => Ok(session_response(session, cookie_max_age)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let cookie_max_age = jwt_utils.expires_in_seconds();
    let auth_service = AuthService::new(&pool, jwt_utils);

    match auth_service.login(payload).await {
        Ok(session) => Ok(session_response(session, cookie_max_age)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle logout by clearing the session cookie.
///
/// The token itself is not revoked server-side; only the client's copy is
/// destroyed. Logging out twice is fine.
#[axum::debug_handler]
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, cookies::clear_access_token_cookie())],
        Json(json!({ "message": "Logged out successfully" })),
    )
}

/// Return the authenticated user's public profile.
#[axum::debug_handler]
pub async fn profile(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserResponse>, (StatusCode, Json<Value>)> {
    let auth_service = AuthService::new(&pool, jwt_utils);

    match auth_service.get_profile(claims.user_id()).await {
        Ok(user) => Ok(Json(UserResponse::from_user(&user))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Success response shared by register and login: the session cookie plus
/// the public user fields.
fn session_response(session: SessionUser, max_age_seconds: u64) -> impl IntoResponse {
    let cookie = cookies::access_token_cookie(&session.token, max_age_seconds);

    (
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from_user(&session.user)),
    )
}
