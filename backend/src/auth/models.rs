//! Data structures for authentication-related entities.
//!
//! This module defines the request payloads for registration and login and
//! the public user projection returned to clients, used for data transfer
//! within the authentication flow.

use crate::database::models::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub user_name: String,

    #[validate(
        email(message = "Must be a valid email"),
        length(max = 255, message = "Email too long")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "Password too short"))]
    pub password: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub account_type: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password too short"))]
    pub password: String,
}

/// A freshly authenticated user together with their session token.
///
/// The handler turns the token into the session cookie and the user into
/// the public response body.
#[derive(Debug)]
pub struct SessionUser {
    pub user: User,
    pub token: String,
}

/// Public user fields returned by register, login and profile.
///
/// Built from a [`User`] row; the password hash has no representation here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub success: bool,
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        UserResponse {
            success: true,
            id: user.id.clone(),
            user_name: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_has_public_fields_only() {
        let user = User {
            id: "u-1".to_string(),
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            account_type: "user".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(UserResponse::from_user(&user)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["success"], true);
        assert_eq!(object["userName"], "alice");
        assert_eq!(object["email"], "alice@x.com");
        assert!(object.contains_key("createdAt"));
        assert!(object.contains_key("updatedAt"));
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("passwordHash"));
    }

    #[test]
    fn register_request_reads_the_type_field() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"userName":"alice","email":"alice@x.com","password":"secret1","type":"user"}"#,
        )
        .unwrap();

        assert_eq!(request.user_name, "alice");
        assert_eq!(request.account_type, "user");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn register_request_validates_email_and_password() {
        let bad_email: RegisterRequest = serde_json::from_str(
            r#"{"userName":"alice","email":"not-an-email","password":"secret1","type":"user"}"#,
        )
        .unwrap();
        assert!(bad_email.validate().is_err());

        let short_password: RegisterRequest = serde_json::from_str(
            r#"{"userName":"alice","email":"alice@x.com","password":"short","type":"user"}"#,
        )
        .unwrap();
        assert!(short_password.validate().is_err());
    }
}
