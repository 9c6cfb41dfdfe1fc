//! Handlers for the `/subjects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::normalize::{clean, normalize_code, normalize_email, title_case};
use campus_core::types::DbId;
use campus_db::models::subject::{CreateSubject, Subject};
use campus_db::repositories::SubjectRepo;
use campus_events::Topic;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::{ensure_class_in_course, ensure_course_exists, require};

/// Validate required fields and apply write normalization.
fn normalize_input(input: CreateSubject) -> Result<CreateSubject, CoreError> {
    require("name", &input.name)?;
    require("instructor", &input.instructor)?;
    require("instructor_email", &input.instructor_email)?;
    require("course_code", &input.course_code)?;
    require("class_name", &input.class_name)?;
    Ok(CreateSubject {
        name: title_case(&input.name),
        instructor: title_case(&input.instructor),
        instructor_email: normalize_email(&input.instructor_email),
        course_code: normalize_code(&input.course_code),
        class_name: normalize_code(&input.class_name),
        description: input.description.as_deref().map(clean),
    })
}

/// Reference checks shared by create and update. Subjects carry the same
/// (course code, class name) pair as students, so the pairing rule is
/// enforced identically.
async fn check_references(
    conn: &mut sqlx::PgConnection,
    input: &CreateSubject,
) -> Result<(), AppError> {
    ensure_course_exists(conn, &input.course_code).await?;
    ensure_class_in_course(conn, &input.class_name, &input.course_code).await
}

/// POST /subjects
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateSubject>,
) -> AppResult<(StatusCode, Json<Subject>)> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    check_references(&mut tx, &input).await?;
    let subject = SubjectRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    state.change_bus.publish(Topic::Subjects);
    Ok((StatusCode::CREATED, Json(subject)))
}

/// GET /subjects
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Subject>>> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(subjects))
}

/// PUT /subjects/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSubject>,
) -> AppResult<Json<Subject>> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    check_references(&mut tx, &input).await?;
    let subject = SubjectRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            key: id.to_string(),
        }))?;
    tx.commit().await?;

    state.change_bus.publish(Topic::Subjects);
    Ok(Json(subject))
}

/// DELETE /subjects/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = SubjectRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            key: id.to_string(),
        }));
    }
    tx.commit().await?;

    state.change_bus.publish(Topic::Subjects);
    Ok(StatusCode::NO_CONTENT)
}
