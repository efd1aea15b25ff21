//! Bearer-token guard for the academic resources.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sysasistencia_core::error::CoreError;
use sysasistencia_core::types::DbId;

use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Caller identity taken from a verified `Authorization: Bearer` token.
///
/// Taking this as a handler argument is what protects a route.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id_usuario: DbId,
    pub rol: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id_usuario: claims.sub,
            rol: claims.role,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = bearer_token(parts)?;
        let claims = state.config.jwt.verify(token)?;
        Ok(claims.into())
    }
}

/// The token part of the `Authorization` header.
fn bearer_token(parts: &Parts) -> Result<&str, CoreError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| CoreError::Unauthorized("Expected Authorization: Bearer <token>".into()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::Request;

    use super::*;

    fn parts(authorization: Option<&str>) -> Parts {
        let mut builder = Request::builder();
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn extracts_token_after_bearer_prefix() {
        let parts = parts(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_header_is_unauthorized() {
        assert_matches!(bearer_token(&parts(None)), Err(CoreError::Unauthorized(_)));
    }

    #[test]
    fn other_schemes_and_empty_tokens_are_unauthorized() {
        assert_matches!(
            bearer_token(&parts(Some("Basic dXNlcjpwdw=="))),
            Err(CoreError::Unauthorized(_))
        );
        assert_matches!(
            bearer_token(&parts(Some("Bearer   "))),
            Err(CoreError::Unauthorized(_))
        );
    }

    #[test]
    fn claims_become_caller_identity() {
        let claims = Claims {
            sub: 12,
            role: "ADMIN".into(),
            exp: 0,
            iat: 0,
            jti: "x".into(),
        };
        assert_eq!(
            AuthUser::from(claims),
            AuthUser {
                id_usuario: 12,
                rol: "ADMIN".into()
            }
        );
    }
}
