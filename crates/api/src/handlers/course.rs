//! Handlers for the `/courses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::normalize::{clean, normalize_code, title_case};
use campus_core::types::DbId;
use campus_db::models::course::{Course, CreateCourse};
use campus_db::repositories::{ClassRepo, CourseRepo};
use campus_events::Topic;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::require;

/// Validate required fields and apply write normalization.
fn normalize_input(input: CreateCourse) -> Result<CreateCourse, CoreError> {
    require("name", &input.name)?;
    require("code", &input.code)?;
    require("area", &input.area)?;
    Ok(CreateCourse {
        name: title_case(&input.name),
        code: normalize_code(&input.code),
        area: title_case(&input.area),
        description: input.description.as_deref().map(clean),
    })
}

/// POST /courses
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    let course = CourseRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    state.change_bus.publish(Topic::Courses);
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /courses
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(courses))
}

/// PUT /courses/{id}
///
/// Full-field replace. A code change is rejected while any class still
/// references the old code: a rename is not a delete, so the cascade
/// rules cannot repair the dangling references.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCourse>,
) -> AppResult<Json<Course>> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    let current = CourseRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            key: id.to_string(),
        }))?;

    if current.code != input.code && ClassRepo::any_for_course(&mut *tx, &current.code).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot change the course code: classes still reference it".into(),
        )));
    }

    let course = CourseRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            key: id.to_string(),
        }))?;
    tx.commit().await?;

    state.change_bus.publish(Topic::Courses);
    Ok(Json(course))
}

/// DELETE /courses/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete_inner(&state, id).await
}

/// DELETE /courses/{id}/cascade
///
/// Explicit variant for clients that want to acknowledge the cascade:
/// the store removes dependent classes, students and subjects along
/// with the course.
pub async fn delete_cascade(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete_inner(&state, id).await
}

async fn delete_inner(state: &AppState, id: DbId) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = CourseRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            key: id.to_string(),
        }));
    }
    tx.commit().await?;

    // The cascade implicitly destroyed dependent rows, so every affected
    // list must be re-fetched.
    for topic in [
        Topic::Courses,
        Topic::Classes,
        Topic::Students,
        Topic::Subjects,
    ] {
        state.change_bus.publish(topic);
    }
    Ok(StatusCode::NO_CONTENT)
}
