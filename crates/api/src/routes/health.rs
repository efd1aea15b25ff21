//! Public liveness probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// `UP` when every dependency answered, `DOWN` otherwise.
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// 200 while PostgreSQL answers, 503 otherwise.
async fn probe(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let (code, status) = match sysasistencia_db::health_check(&state.pool).await {
        Ok(()) => (StatusCode::OK, "UP"),
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "DOWN")
        }
    };

    (
        code,
        Json(HealthStatus {
            status,
            database: status,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(probe))
}
