//! Supabase access-token verification
//!
//! Supabase signs session tokens with the project's JWT secret (HS256). The
//! subject is the auth user's UUID and the audience is `authenticated` for
//! signed-in users.

use booknest_core::UserId;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by a Supabase access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (auth user UUID)
    pub sub: String,
    /// Audience, `authenticated` for signed-in users
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Claims {
    /// Get the user ID from the subject
    ///
    /// # Errors
    /// Returns an error if the subject is not a UUID
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub.parse::<UserId>().map_err(|_| AppError::InvalidToken)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Verifies (and, for local tooling, mints) Supabase-style tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    audience: String,
}

impl JwtService {
    /// Create a new JWT service from the project secret
    #[must_use]
    pub fn new(secret: &str, audience: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            audience: audience.into(),
        }
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns `TokenExpired` for stale tokens and `InvalidToken` for bad
    /// signatures, wrong audience or a non-UUID subject
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?
            .claims;

        claims.user_id()?;
        Ok(claims)
    }

    /// Sign an access token for `user_id`, valid for `ttl_seconds`.
    ///
    /// Production tokens come from Supabase; this exists for seeding and tests.
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token(
        &self,
        user_id: UserId,
        email: Option<&str>,
        ttl_seconds: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            email: email.map(String::from),
            role: Some("authenticated".to_string()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const SECRET: &str = "test-secret-key-that-is-long-enough";

    fn create_test_service() -> JwtService {
        JwtService::new(SECRET, "authenticated")
    }

    #[test]
    fn test_issue_and_validate() {
        let service = create_test_service();
        let user_id = UserId::new(Uuid::new_v4());

        let token = service
            .issue_access_token(user_id, Some("reader@example.com"), 900)
            .unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.aud, "authenticated");
        assert_eq!(claims.email.as_deref(), Some("reader@example.com"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token() {
        let service = create_test_service();
        let token = service
            .issue_access_token(UserId::new(Uuid::new_v4()), None, -3600)
            .unwrap();

        let result = service.validate_access_token(&token);
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_wrong_audience() {
        let issuer = JwtService::new(SECRET, "anon");
        let token = issuer
            .issue_access_token(UserId::new(Uuid::new_v4()), None, 900)
            .unwrap();

        let result = create_test_service().validate_access_token(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret() {
        let issuer = JwtService::new("another-secret-key-that-is-long-enough", "authenticated");
        let token = issuer
            .issue_access_token(UserId::new(Uuid::new_v4()), None, 900)
            .unwrap();

        let result = create_test_service().validate_access_token(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_invalid_token() {
        let result = create_test_service().validate_access_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_non_uuid_subject_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "12345".to_string(),
            aud: "authenticated".to_string(),
            iat: now,
            exp: now + 900,
            email: None,
            role: None,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = create_test_service().validate_access_token(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
