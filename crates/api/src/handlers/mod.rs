//! Request handlers, one module per resource.
//!
//! Every mutating handler follows the same shape: validate and normalize
//! the input, open a transaction, run the reference checks, execute the
//! statement, commit, then publish the entity topic on the change bus.

pub mod auth;
pub mod chatbot;
pub mod class;
pub mod course;
pub mod student;
pub mod subject;

use campus_core::error::CoreError;
use campus_db::repositories::{ClassRepo, CourseRepo};

use crate::error::AppError;

/// Reject empty (or whitespace-only) required fields.
fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must not be empty"
        )));
    }
    Ok(())
}

/// Verify the referenced course exists. Runs inside the caller's
/// transaction so the check and the subsequent write see the same state.
async fn ensure_course_exists(
    conn: &mut sqlx::PgConnection,
    code: &str,
) -> Result<(), AppError> {
    if !CourseRepo::code_exists(&mut *conn, code).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            key: code.to_string(),
        }));
    }
    Ok(())
}

/// Verify the referenced class exists and belongs to the given course.
///
/// Foreign keys alone cannot express the pairing: both references could
/// resolve while naming a class from a different course.
async fn ensure_class_in_course(
    conn: &mut sqlx::PgConnection,
    class_name: &str,
    course_code: &str,
) -> Result<(), AppError> {
    let class = ClassRepo::find_by_name(&mut *conn, class_name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            key: class_name.to_string(),
        }))?;

    if class.course_code != course_code {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Class '{class_name}' does not belong to course '{course_code}'"
        ))));
    }
    Ok(())
}
