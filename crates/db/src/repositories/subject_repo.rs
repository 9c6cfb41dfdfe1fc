//! Repository for the `subjects` table.

use campus_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::subject::{CreateSubject, Subject};

const COLUMNS: &str =
    "id, name, instructor, instructor_email, course_code, class_name, description, created_at";

/// Provides CRUD operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateSubject,
    ) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects
                (name, instructor, instructor_email, course_code, class_name, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.name)
            .bind(&input.instructor)
            .bind(&input.instructor_email)
            .bind(&input.course_code)
            .bind(&input.class_name)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    /// List all subjects ordered by name ascending.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects ORDER BY name");
        sqlx::query_as::<_, Subject>(&query).fetch_all(executor).await
    }

    /// Full-field replace of a subject. Returns `None` if the id is absent.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &CreateSubject,
    ) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!(
            "UPDATE subjects
             SET name = $2, instructor = $3, instructor_email = $4,
                 course_code = $5, class_name = $6, description = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.instructor)
            .bind(&input.instructor_email)
            .bind(&input.course_code)
            .bind(&input.class_name)
            .bind(&input.description)
            .fetch_optional(executor)
            .await
    }

    /// Delete a subject by ID. Returns `true` if a row was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
