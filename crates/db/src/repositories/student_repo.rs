//! Repository for the `students` table.

use campus_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::student::{CreateStudent, Student};

const COLUMNS: &str = "id, name, registration, email, course_code, class_name, created_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateStudent,
    ) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, registration, email, course_code, class_name)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.registration)
            .bind(&input.email)
            .bind(&input.course_code)
            .bind(&input.class_name)
            .fetch_one(executor)
            .await
    }

    /// List all students ordered by name ascending.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY name");
        sqlx::query_as::<_, Student>(&query).fetch_all(executor).await
    }

    /// Full-field replace of a student. Returns `None` if the id is absent.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &CreateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students
             SET name = $2, registration = $3, email = $4, course_code = $5, class_name = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.registration)
            .bind(&input.email)
            .bind(&input.course_code)
            .bind(&input.class_name)
            .fetch_optional(executor)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
