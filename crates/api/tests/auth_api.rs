//! HTTP-level integration tests for `/users/register` and `/users/login`.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;
use sysasistencia_api::auth::password::hash_password;
use sysasistencia_db::models::user::CreateUser;
use sysasistencia_db::repositories::UserRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_token_and_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/users/register",
        json!({ "user": "ana@example.com", "clave": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["idUsuario"].is_number());
    assert_eq!(json["user"], "ana@example.com");
    assert_eq!(json["rol"], "USER");
    assert_eq!(json["estado"], "Activo");
    assert!(json["token"].is_string());
    assert_eq!(json["expiresIn"], 3600);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_duplicate_user_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "user": "dup@example.com", "clave": TEST_PASSWORD });

    let response = post_json(app.clone(), "/users/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app, "/users/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_invalid_email_and_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/users/register",
        json!({ "user": "not-an-email", "clave": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/users/register",
        json!({ "user": "short@example.com", "clave": "abc" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_usable_on_protected_routes(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/users/register",
        json!({ "user": "login@example.com", "clave": TEST_PASSWORD }),
    )
    .await;

    let response = post_json(
        app.clone(),
        "/users/login",
        json!({ "user": "login@example.com", "clave": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = common::get_auth(app, "/programas", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        app.clone(),
        "/users/register",
        json!({ "user": "wrong@example.com", "clave": TEST_PASSWORD }),
    )
    .await;

    let response = post_json(
        app,
        "/users/login",
        json!({ "user": "wrong@example.com", "clave": "incorrecta-123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_unknown_user_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/users/login",
        json!({ "user": "nadie@example.com", "clave": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_inactive_user_returns_403(pool: PgPool) {
    let input = CreateUser {
        username: "inactivo@example.com".to_string(),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        role: "USER".to_string(),
        estado: "Inactivo".to_string(),
    };
    UserRepo::create(&pool, &input).await.unwrap();
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/users/login",
        json!({ "user": "inactivo@example.com", "clave": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
