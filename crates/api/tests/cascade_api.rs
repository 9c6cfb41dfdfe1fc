//! Cascade-delete behavior: removing a course destroys its classes and,
//! transitively, the students and subjects referencing them.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, register_and_login};
use sqlx::PgPool;

/// Build the full dependency chain: course -> class -> student + subject.
/// Returns the course id.
async fn seed_chain(pool: &PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let course = body_json(
        post_json_auth(
            app,
            "/courses",
            serde_json::json!({"name": "Systems", "code": "ADS", "area": "Technology"}),
            token,
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/classes",
        serde_json::json!({"name": "1A", "course_code": "ADS"}),
        token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/students",
        serde_json::json!({
            "name": "Ana", "registration": "RA1", "email": "a@b.com",
            "course_code": "ADS", "class_name": "1A"
        }),
        token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/subjects",
        serde_json::json!({
            "name": "Software Engineering", "instructor": "Carlos",
            "instructor_email": "c@uni.edu", "course_code": "ADS", "class_name": "1A"
        }),
        token,
    )
    .await;

    course["id"].as_i64().unwrap()
}

/// Assert that a list endpoint returns the expected number of rows.
async fn assert_count(pool: &PgPool, token: &str, uri: &str, expected: usize) {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, uri, token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json.as_array().unwrap().len(),
        expected,
        "unexpected row count for {uri}"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cascade_delete_removes_dependents(pool: PgPool) {
    let token = register_and_login(&pool, "alice").await;
    let course_id = seed_chain(&pool, &token).await;

    assert_count(&pool, &token, "/classes", 1).await;
    assert_count(&pool, &token, "/students", 1).await;
    assert_count(&pool, &token, "/subjects", 1).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/courses/{course_id}/cascade"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_count(&pool, &token, "/courses", 0).await;
    assert_count(&pool, &token, "/classes", 0).await;
    assert_count(&pool, &token, "/students", 0).await;
    assert_count(&pool, &token, "/subjects", 0).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cascade_delete_missing_course_not_found(pool: PgPool) {
    let token = register_and_login(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/courses/999999/cascade", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_plain_course_delete_also_cascades(pool: PgPool) {
    let token = register_and_login(&pool, "alice").await;
    let course_id = seed_chain(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/courses/{course_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The store-level cascade removed the dependents either way.
    assert_count(&pool, &token, "/classes", 0).await;
    assert_count(&pool, &token, "/students", 0).await;
    assert_count(&pool, &token, "/subjects", 0).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_class_delete_cascades_to_enrollments_only(pool: PgPool) {
    let token = register_and_login(&pool, "alice").await;
    seed_chain(&pool, &token).await;

    let class_id = {
        let app = common::build_test_app(pool.clone());
        let response = get_auth(app, "/classes", &token).await;
        body_json(response).await[0]["id"].as_i64().unwrap()
    };

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/classes/{class_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Students and subjects of the class are gone; the course survives.
    assert_count(&pool, &token, "/students", 0).await;
    assert_count(&pool, &token, "/subjects", 0).await;
    assert_count(&pool, &token, "/courses", 1).await;
}
