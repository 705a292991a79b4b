//! Middleware for protecting authenticated routes.
//!
//! This module contains the session-validation logic gating every protected
//! endpoint: read the token from the session cookie, verify it, and attach
//! the resulting identity to the request.

use crate::utils::cookies::{ACCESS_TOKEN_COOKIE, get_cookie};
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
};
use serde_json::{Value, json};

/// Session authentication middleware.
///
/// On success the verified [`Claims`](crate::utils::jwt::Claims) are
/// inserted into the request extensions for handlers to read; on failure
/// the request is rejected with 401 and a generic message, and no
/// downstream handler runs.
pub async fn auth_required(
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    let jwt_utils = request
        .extensions()
        .get::<JwtUtils>()
        .cloned()
        .ok_or_else(|| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
        })?;

    let token = match get_cookie(request.headers(), ACCESS_TOKEN_COOKIE) {
        Some(token) => token.to_string(),
        None => return Err(unauthorized("No token, authorization denied")),
    };

    match jwt_utils.validate_token(&token) {
        Ok(claims) => {
            // Expose the identity to downstream handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err(unauthorized("Token is not valid")),
    }
}

fn unauthorized(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": message })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::cookies;
    use crate::utils::jwt::Claims;
    use axum::{
        Extension, Router,
        body::{Body, to_bytes},
        http::{Request as HttpRequest, header::COOKIE},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    async fn whoami(Extension(claims): Extension<Claims>) -> String {
        claims.sub
    }

    fn protected_app(jwt: JwtUtils) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn(auth_required))
            .layer(Extension(jwt))
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn rejects_request_without_cookie() {
        let app = protected_app(JwtUtils::new("test-secret", 3600));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("No token"));
    }

    #[tokio::test]
    async fn rejects_invalid_token() {
        let app = protected_app(JwtUtils::new("test-secret", 3600));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header(COOKIE, "access_token=garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("Token is not valid"));
    }

    #[tokio::test]
    async fn passes_identity_to_the_handler() {
        let jwt = JwtUtils::new("test-secret", 3600);
        let token = jwt.generate_token("user-1").unwrap();
        let app = protected_app(jwt);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header(
                        COOKIE,
                        format!("{}={}", cookies::ACCESS_TOKEN_COOKIE, token),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "user-1");
    }
}
