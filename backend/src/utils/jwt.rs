//! JWT token utilities for authentication and session management.
//!
//! Provides secure token creation, validation, and claims management for
//! the cookie-carried session credential.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::ServiceError;

/// JWT Claims structure carrying the authenticated user's identity
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

/// JWT token utility for creating and validating tokens.
///
/// Built once at startup from [`Config`] and injected into the router as an
/// extension; tests construct it directly with [`JwtUtils::new`].
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expires_in_seconds)
    }

    pub fn new(secret: &str, expires_in_seconds: u64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds,
        }
    }

    /// Generate a new access token for the given user id
    pub fn generate_token(&self, user_id: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode an access token.
    ///
    /// Malformed tokens, bad signatures and expired tokens all collapse into
    /// the same `InvalidToken` error, so callers cannot tell them apart.
    pub fn validate_token(&self, token: &str) -> Result<Claims, ServiceError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::InvalidToken)
    }

    /// Access token lifetime in seconds, as configured.
    pub fn expires_in_seconds(&self) -> u64 {
        self.expires_in_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let jwt = JwtUtils::new("test-secret", 3600);

        let token = jwt.generate_token("user-1").unwrap();
        let claims = jwt.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.user_id(), "user-1");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_tampered_payload() {
        let jwt = JwtUtils::new("test-secret", 3600);

        let a = jwt.generate_token("user-1").unwrap();
        let b = jwt.generate_token("user-2").unwrap();

        // Signature of b over the payload of a
        let payload_a = a.split('.').nth(1).unwrap();
        let parts: Vec<&str> = b.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], payload_a, parts[2]);

        assert!(matches!(
            jwt.validate_token(&forged),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let jwt = JwtUtils::new("test-secret", 3600);
        let other = JwtUtils::new("other-secret", 3600);

        let token = other.generate_token("user-1").unwrap();

        assert!(matches!(
            jwt.validate_token(&token),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = JwtUtils::new("test-secret", 3600);

        let now = Utc::now();
        let claims = Claims {
            sub: "user-1".to_string(),
            exp: (now - Duration::hours(2)).timestamp() as usize,
            iat: (now - Duration::hours(3)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            jwt.validate_token(&token),
            Err(ServiceError::InvalidToken)
        ));
    }

    #[test]
    fn rejects_malformed_token() {
        let jwt = JwtUtils::new("test-secret", 3600);

        assert!(matches!(
            jwt.validate_token("not-a-token"),
            Err(ServiceError::InvalidToken)
        ));
    }
}
