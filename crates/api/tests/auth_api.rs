//! HTTP-level integration tests for registration, login, and the
//! bearer-token gate on entity endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, register_and_login, TEST_SECRET};
use sqlx::PgPool;

use campus_api::auth::jwt::{generate_token, JwtConfig};

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_returns_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/register",
        serde_json::json!({"username": "alice", "password": "secret123"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_username_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/register",
        serde_json::json!({"username": "alice", "password": "secret123"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/register",
        serde_json::json!({"username": "alice", "password": "other-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_password_over_72_bytes_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let long_password = "x".repeat(73);
    let response = post_json(
        app,
        "/register",
        serde_json::json!({"username": "alice", "password": long_password}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_empty_username_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/register",
        serde_json::json!({"username": "   ", "password": "secret123"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success_returns_bearer_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/register",
        serde_json::json!({"username": "alice", "password": "secret123"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"username": "alice", "password": "secret123"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "bearer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/register",
        serde_json::json!({"username": "alice", "password": "secret123"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"username": "alice", "password": "wrong"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/login",
        serde_json::json!({"username": "ghost", "password": "whatever"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Bearer-token gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_entity_endpoint_without_token_unauthorized(pool: PgPool) {
    for uri in ["/students", "/courses", "/classes", "/subjects", "/chatbot-entries"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "unauthenticated GET {uri} must be rejected"
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_entity_endpoint_with_garbage_token_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/students", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_expired_token_unauthorized(pool: PgPool) {
    // A registered user whose token was issued with expiry in the past.
    let _token = register_and_login(&pool, "alice").await;

    let expired_config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry_mins: -10,
    };
    let expired = generate_token("alice", &expired_config).unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/students", &expired).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_for_removed_credential_unauthorized(pool: PgPool) {
    let token = register_and_login(&pool, "alice").await;

    // The subject disappears between issuance and use.
    sqlx::query("DELETE FROM credentials WHERE username = $1")
        .bind("alice")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/students", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_valid_token_grants_access(pool: PgPool) {
    let token = register_and_login(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/students", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}
