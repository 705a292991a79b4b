//! User business logic service.
//!
//! Handles user creation, credential verification and lookups, including
//! the one-way password hashing that keeps plaintext out of the database.

use crate::database::models::{CreateUser, NewUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::{UserRepository, is_unique_violation};
use bcrypt::{hash, verify};
use sqlx::SqlitePool;

/// Bcrypt work factor. Tune per deployment.
const BCRYPT_COST: u32 = 10;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user.
    ///
    /// Username and email are trimmed before storage. Uniqueness is checked
    /// up front for a friendly error; a concurrent registration that slips
    /// past the check still loses at the database unique index and is mapped
    /// to the same conflict error.
    ///
    /// # Errors
    /// Returns `ServiceError::AlreadyExists` when username or email is taken
    pub async fn create_user(&self, new_user: NewUser) -> ServiceResult<User> {
        let username = new_user.username.trim().to_string();
        let email = new_user.email.trim().to_string();

        let repo = UserRepository::new(self.pool);

        if repo.username_exists(&username).await? {
            return Err(ServiceError::already_exists("User", &username));
        }
        if repo.email_exists(&email).await? {
            return Err(ServiceError::already_exists("User", &email));
        }

        let password_hash = Self::hash_password(&new_user.password)?;

        let data = CreateUser {
            username: username.clone(),
            email,
            password_hash,
            account_type: new_user.account_type,
        };

        match repo.create_user(data).await {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => {
                Err(ServiceError::already_exists("User", &username))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Verifies an email/password pair against the stored credentials.
    ///
    /// Unknown email and wrong password return the same error so the caller
    /// cannot tell which one failed.
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        let user = repo
            .get_user_by_email(email.trim())
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Retrieves a user by ID with existence verification.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the user doesn't exist
    pub async fn get_user_required(&self, id: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;
        Ok(user)
    }

    /// Hashes a password before it is stored.
    pub fn hash_password(password: &str) -> ServiceResult<String> {
        hash(password, BCRYPT_COST)
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Verifies a password against the stored hash. The comparison itself is
    /// delegated to bcrypt.
    pub fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash).map_err(|e| {
            ServiceError::internal_error(format!("Password verification failed: {}", e))
        })
    }
}
