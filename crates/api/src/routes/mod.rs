//! Route definitions.

pub mod chatbot;
pub mod class;
pub mod course;
pub mod health;
pub mod student;
pub mod subject;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the application route tree (everything except `/health`).
///
/// ```text
/// /register                 register (public)
/// /login                    login (public)
/// /ws                       WebSocket change signals
///
/// /students                 list, create
/// /students/{id}            update, delete
/// /courses                  list, create
/// /courses/{id}             update, delete
/// /courses/{id}/cascade     delete with explicit cascade
/// /classes                  list, create
/// /classes/{id}             update, delete
/// /subjects                 list, create
/// /subjects/{id}            update, delete
/// /chatbot-entries          list, create
/// /chatbot-entries/{id}     update, delete
/// ```
///
/// Everything below `/students` requires a bearer token; the handlers
/// enforce it through the `AuthUser` extractor.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/ws", get(ws::ws_handler))
        .nest("/students", student::router())
        .nest("/courses", course::router())
        .nest("/classes", class::router())
        .nest("/subjects", subject::router())
        .nest("/chatbot-entries", chatbot::router())
}
