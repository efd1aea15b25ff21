//! Bearer tokens handed out by `/users/register` and `/users/login`.
//!
//! HS256 JWTs signed with the shared secret from [`JwtConfig`]. Nothing is
//! stored server-side; a token is valid until `exp`.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sysasistencia_core::error::CoreError;
use sysasistencia_core::types::DbId;
use uuid::Uuid;

use crate::error::AppError;

/// Payload carried by every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// `users.id` of the holder.
    pub sub: DbId,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

/// A freshly signed token and its lifetime in seconds.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(e) => AppError::InternalError(e.to_string()),
            TokenError::Rejected(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                CoreError::Unauthorized("Invalid or expired token".into()).into()
            }
        }
    }
}

impl JwtConfig {
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    /// Sign a token for `user_id` carrying `role`.
    pub fn issue(&self, user_id: DbId, role: &str) -> Result<IssuedToken, TokenError> {
        let iat = chrono::Utc::now().timestamp();
        let expires_in = self.expires_in_secs();
        let claims = Claims {
            sub: user_id,
            role: role.to_owned(),
            exp: iat + expires_in,
            iat,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Signing)?;

        Ok(IssuedToken { token, expires_in })
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(TokenError::Rejected)
    }
}
