//! # vestor-auth
//!
//! Credential and token primitives: argon2 password hashes and HS256
//! bearer tokens carrying the user's id, email, and name. Tokens are
//! stateless and expire seven days after issuance; there is no revocation
//! list - the claims are the sole identity on later requests.

use argon2::Argon2;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthError>;

/// Token lifetime in days
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Fallback secret for local development when JWT_SECRET is unset
const DEV_SECRET: &str = "dev_smartvestor_secret_change_me";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("token expired")]
    Expired,

    #[error("credential processing failed: {0}")]
    Internal(String),
}

/// Identity embedded in every issued token
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,

    pub email: String,

    pub name: String,

    /// Issued at (unix seconds)
    pub iat: i64,

    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Hashes passwords and signs/verifies bearer tokens
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_ttl: Duration::days(TOKEN_TTL_DAYS),
        }
    }

    /// Build from the JWT_SECRET environment variable, falling back to the
    /// development secret.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEV_SECRET.to_string());
        Self::new(secret.as_bytes())
    }

    /// Override the token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(format!("failed to hash password: {e}")))
    }

    /// Check a candidate password against a stored hash.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<()> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AuthError::Internal(format!("stored hash is malformed: {e}")))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => AuthError::InvalidCredentials,
                other => AuthError::Internal(format!("password verification failed: {other}")),
            })
    }

    /// Sign a token for a user.
    pub fn issue_token(&self, user_id: &str, email: &str, name: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("failed to sign token: {e}")))
    }

    /// Validate a token and return its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(b"test_secret")
    }

    #[test]
    fn test_password_round_trip() {
        let auth = service();
        let hash = auth.hash_password("s3cret").unwrap();
        assert!(hash.starts_with("$argon2"));
        auth.verify_password("s3cret", &hash).unwrap();
    }

    #[test]
    fn test_wrong_password_is_invalid_credentials() {
        let auth = service();
        let hash = auth.hash_password("s3cret").unwrap();
        let err = auth.verify_password("nope", &hash).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_token_round_trip() {
        let auth = service();
        let token = auth.issue_token("u1", "asha@example.com", "Asha").unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email, "asha@example.com");
        assert_eq!(claims.name, "Asha");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let auth = service();
        let token = auth.issue_token("u1", "asha@example.com", "Asha").unwrap();
        let other = AuthService::new(b"different_secret");
        let err = other.verify_token(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let auth = service().with_token_ttl(Duration::days(-1));
        let token = auth.issue_token("u1", "asha@example.com", "Asha").unwrap();
        let err = service().verify_token(&token).unwrap_err();
        assert!(matches!(err, AuthError::Expired));
    }
}
