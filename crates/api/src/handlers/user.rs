//! Handlers for the `/users` resource (register, login).
//!
//! Both endpoints are public and answer with a bearer token for the
//! protected routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sysasistencia_core::error::CoreError;
use sysasistencia_core::types::DbId;
use sysasistencia_core::validation::validate_input;
use sysasistencia_db::models::user::{CreateUser, User};
use sysasistencia_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Role assigned when the registration payload omits `rol`.
const DEFAULT_ROLE: &str = "USER";

/// Account state that is allowed to log in.
const ACTIVE_ESTADO: &str = "Activo";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub user: String,
    pub clave: String,
    pub rol: Option<String>,
    pub estado: Option<String>,
}

/// Request body for `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub clave: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id_usuario: DbId,
    pub user: String,
    pub rol: String,
    pub estado: String,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_input(&input)?;
    validate_password_strength(&input.clave, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::exists_by_username(&state.pool, &input.user).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "User '{}' already exists",
            input.user
        ))));
    }

    let password_hash = hash_password(&input.clave)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.user,
            password_hash,
            role: input.rol.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            estado: input.estado.unwrap_or_else(|| ACTIVE_ESTADO.to_string()),
        },
    )
    .await?;
    tracing::info!(user_id = user.id, role = %user.role, "User registered");

    Ok((StatusCode::CREATED, Json(auth_response(&state, user)?)))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.user)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid user or password".into()))
        })?;

    let password_valid = verify_password(&input.clave, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid user or password".into(),
        )));
    }

    if user.estado != ACTIVE_ESTADO {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is not active".into(),
        )));
    }

    Ok(Json(auth_response(&state, user)?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue an access token for `user` and build the response body.
fn auth_response(state: &AppState, user: User) -> AppResult<AuthResponse> {
    let issued = state.config.jwt.issue(user.id, &user.role)?;

    Ok(AuthResponse {
        id_usuario: user.id,
        user: user.username,
        rol: user.role,
        estado: user.estado,
        token: issued.token,
        expires_in: issued.expires_in,
    })
}
