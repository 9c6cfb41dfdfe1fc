//! Handlers for the `/students` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::normalize::{normalize_code, normalize_email, title_case};
use campus_core::types::DbId;
use campus_db::models::student::{CreateStudent, Student};
use campus_db::repositories::StudentRepo;
use campus_events::Topic;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::{ensure_class_in_course, ensure_course_exists, require};

/// Validate required fields and apply write normalization.
fn normalize_input(input: CreateStudent) -> Result<CreateStudent, CoreError> {
    require("name", &input.name)?;
    require("registration", &input.registration)?;
    require("email", &input.email)?;
    require("course_code", &input.course_code)?;
    require("class_name", &input.class_name)?;
    Ok(CreateStudent {
        name: title_case(&input.name),
        registration: normalize_code(&input.registration),
        email: normalize_email(&input.email),
        course_code: normalize_code(&input.course_code),
        class_name: normalize_code(&input.class_name),
    })
}

/// Run the reference checks shared by create and update: the course must
/// exist and the class must both exist and belong to that course.
async fn check_references(
    conn: &mut sqlx::PgConnection,
    input: &CreateStudent,
) -> Result<(), AppError> {
    ensure_course_exists(conn, &input.course_code).await?;
    ensure_class_in_course(conn, &input.class_name, &input.course_code).await
}

/// POST /students
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    check_references(&mut tx, &input).await?;
    let student = StudentRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    state.change_bus.publish(Topic::Students);
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /students
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// PUT /students/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateStudent>,
) -> AppResult<Json<Student>> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    check_references(&mut tx, &input).await?;
    let student = StudentRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            key: id.to_string(),
        }))?;
    tx.commit().await?;

    state.change_bus.publish(Topic::Students);
    Ok(Json(student))
}

/// DELETE /students/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = StudentRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            key: id.to_string(),
        }));
    }
    tx.commit().await?;

    state.change_bus.publish(Topic::Students);
    Ok(StatusCode::NO_CONTENT)
}
