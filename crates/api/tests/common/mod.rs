#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use sysasistencia_api::auth::jwt::JwtConfig;
use sysasistencia_api::config::ServerConfig;
use sysasistencia_api::router::build_app_router;
use sysasistencia_api::state::AppState;
use sysasistencia_db::repositories::{FacultadRepository, ProgramaEstudioRepository};

/// Signing secret shared by every test app.
pub const TEST_JWT_SECRET: &str = "test-secret-for-integration-tests";

/// Password used for every user registered through [`TestContext`].
pub const TEST_PASSWORD: &str = "secreto-de-prueba-1";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router over a real database pool.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the whole middleware
/// stack is exercised.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

/// A pool that never reaches a server; any query fails fast.
fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://127.0.0.1:1/unused")
        .expect("lazy pool should not connect")
}

/// Build the application router over caller-supplied repositories.
///
/// Only handlers that go through the repositories can be exercised this
/// way; the pool behind the auth endpoints is unreachable.
pub fn build_mock_app(
    programas: Arc<dyn ProgramaEstudioRepository>,
    facultades: Arc<dyn FacultadRepository>,
) -> Router {
    build_app_router(AppState::with_repositories(
        unreachable_pool(),
        test_config(),
        programas,
        facultades,
    ))
}

/// Production wiring over a database that cannot be reached.
pub fn build_unreachable_app() -> Router {
    build_app_router(AppState::new(unreachable_pool(), test_config()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

/// Unauthenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Authenticated context
// ---------------------------------------------------------------------------

/// An app plus a bearer token for a freshly registered user.
pub struct TestContext {
    pub app: Router,
    pub token: String,
}

impl TestContext {
    /// Register `tester@example.com` against a real database and keep its token.
    pub async fn new(pool: PgPool) -> Self {
        let app = build_test_app(pool);
        let response = post_json(
            app.clone(),
            "/users/register",
            serde_json::json!({ "user": "tester@example.com", "clave": TEST_PASSWORD }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        let token = json["token"].as_str().unwrap().to_string();
        Self { app, token }
    }

    /// Wrap a mock-backed app with a token signed by the test secret.
    pub fn with_app(app: Router) -> Self {
        let token = test_config().jwt.issue(1, "USER").unwrap().token;
        Self { app, token }
    }

    pub async fn get(&self, uri: &str) -> Response {
        get_auth(self.app.clone(), uri, &self.token).await
    }

    pub async fn post(&self, uri: &str, body: serde_json::Value) -> Response {
        post_json_auth(self.app.clone(), uri, body, &self.token).await
    }

    pub async fn put(&self, uri: &str, body: serde_json::Value) -> Response {
        put_json_auth(self.app.clone(), uri, body, &self.token).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        delete_auth(self.app.clone(), uri, &self.token).await
    }
}
