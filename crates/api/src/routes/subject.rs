//! Route definitions for the `/subjects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::subject;
use crate::state::AppState;

/// Routes mounted at `/subjects`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(subject::list).post(subject::create))
        .route("/{id}", put(subject::update).delete(subject::delete))
}
