//! Route definitions for the `/courses` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::course;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// PUT    /{id}            -> update (code rename guarded)
/// DELETE /{id}            -> delete
/// DELETE /{id}/cascade    -> delete_cascade
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list).post(course::create))
        .route("/{id}", put(course::update).delete(course::delete))
        .route("/{id}/cascade", delete(course::delete_cascade))
}
