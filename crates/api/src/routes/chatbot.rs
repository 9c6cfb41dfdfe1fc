//! Route definitions for the `/chatbot-entries` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::chatbot;
use crate::state::AppState;

/// Routes mounted at `/chatbot-entries`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(chatbot::list).post(chatbot::create))
        .route("/{id}", put(chatbot::update).delete(chatbot::delete))
}
