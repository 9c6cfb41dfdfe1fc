//! Handlers for the `/classes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::normalize::{clean, normalize_code};
use campus_core::types::DbId;
use campus_db::models::class::{Class, CreateClass};
use campus_db::repositories::ClassRepo;
use campus_events::Topic;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::{ensure_course_exists, require};

/// Validate required fields and apply write normalization.
///
/// Class names are code-like identifiers (e.g. `1A-MORNING`), so they
/// are upper-cased rather than title-cased.
fn normalize_input(input: CreateClass) -> Result<CreateClass, CoreError> {
    require("name", &input.name)?;
    require("course_code", &input.course_code)?;
    Ok(CreateClass {
        name: normalize_code(&input.name),
        course_code: normalize_code(&input.course_code),
        description: input.description.as_deref().map(clean),
    })
}

/// POST /classes
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateClass>,
) -> AppResult<(StatusCode, Json<Class>)> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    ensure_course_exists(&mut tx, &input.course_code).await?;
    let class = ClassRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    state.change_bus.publish(Topic::Classes);
    Ok((StatusCode::CREATED, Json(class)))
}

/// GET /classes
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Class>>> {
    let classes = ClassRepo::list(&state.pool).await?;
    Ok(Json(classes))
}

/// PUT /classes/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateClass>,
) -> AppResult<Json<Class>> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    ensure_course_exists(&mut tx, &input.course_code).await?;
    let class = ClassRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            key: id.to_string(),
        }))?;
    tx.commit().await?;

    state.change_bus.publish(Topic::Classes);
    Ok(Json(class))
}

/// DELETE /classes/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = ClassRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Class",
            key: id.to_string(),
        }));
    }
    tx.commit().await?;

    state.change_bus.publish(Topic::Classes);
    Ok(StatusCode::NO_CONTENT)
}
