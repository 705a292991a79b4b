//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::database::models::{NewUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service for registration, login and profile lookup.
pub struct AuthService<'a> {
    jwt_utils: JwtUtils,
    user_service: UserService<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, jwt_utils: JwtUtils) -> Self {
        AuthService {
            jwt_utils,
            user_service: UserService::new(pool),
        }
    }

    /// Register a new user and issue their first session token.
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<SessionUser> {
        request
            .validate()
            .map_err(ServiceError::from_validation_errors)?;

        let user = self
            .user_service
            .create_user(NewUser {
                username: request.user_name,
                email: request.email,
                password: request.password,
                account_type: request.account_type,
            })
            .await?;

        let token = self.jwt_utils.generate_token(&user.id)?;

        Ok(SessionUser { user, token })
    }

    /// Authenticate an existing user and issue a session token.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<SessionUser> {
        request
            .validate()
            .map_err(ServiceError::from_validation_errors)?;

        let user = self
            .user_service
            .authenticate_user(&request.email, &request.password)
            .await?;

        let token = self.jwt_utils.generate_token(&user.id)?;

        Ok(SessionUser { user, token })
    }

    /// Look up the user behind a verified session.
    ///
    /// The token only proves who the caller was when it was issued; the
    /// account may have been deleted since, which surfaces as `NotFound`.
    pub async fn get_profile(&self, user_id: &str) -> ServiceResult<User> {
        self.user_service.get_user_required(user_id).await
    }
}
