//! Signed access tokens.
//!
//! Tokens are HS256 JWTs carrying the subject id and role. The signing key
//! comes from configuration, is injected here once at startup, and is never
//! referenced as ambient state elsewhere.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role claim carried by every admin token.
pub const ROLE_ADMIN: &str = "admin";

/// Errors from issuing or verifying tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is missing, malformed, expired, or badly signed.
    #[error("invalid token")]
    Invalid,
    /// System clock is unusable.
    #[error("system time error: {0}")]
    Clock(#[from] std::time::SystemTimeError),
    /// Encoding failed.
    #[error("token encoding error: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

/// Token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin ID as a UUID string)
    pub sub: String,
    /// Role claim, checked again by every admin handler
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Whether the role claim grants admin access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Issues and verifies signed access tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: u64,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString, ttl_secs: u64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            ttl_secs,
        }
    }

    /// Issue a token for the given subject and role.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if the clock is unusable or encoding fails.
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();

        let claims = Claims {
            sub: subject.to_owned(),
            role: role.to_owned(),
            exp: now + self.ttl_secs,
            iat: now,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` for malformed, expired, or badly signed
    /// tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SecretString::from(secret.to_owned()), 3600)
    }

    #[test]
    fn test_token_roundtrip() {
        let tokens = service("test-signing-key-at-least-32-chars!");
        let token = tokens.issue("6f1c1a34-0000-4000-8000-000000000001", ROLE_ADMIN).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, "6f1c1a34-0000-4000-8000-000000000001");
        assert_eq!(claims.role, "admin");
        assert!(claims.is_admin());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_non_admin_role() {
        let tokens = service("test-signing-key-at-least-32-chars!");
        let token = tokens.issue("some-subject", "viewer").unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let tokens = service("test-signing-key-at-least-32-chars!");
        assert!(matches!(
            tokens.verify("not-a-token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = service("signing-key-one-at-least-32-chars!!");
        let verifier = service("signing-key-two-at-least-32-chars!!");

        let token = issuer.issue("subject", ROLE_ADMIN).unwrap();
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid)));
    }
}
