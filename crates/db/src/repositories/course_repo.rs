//! Repository for the `courses` table.

use campus_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::course::{Course, CreateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, code, area, description, created_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (name, code, area, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.area)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    /// List all courses ordered by name ascending.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY name");
        sqlx::query_as::<_, Course>(&query).fetch_all(executor).await
    }

    /// Find a course by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Whether a course with the given short code exists.
    pub async fn code_exists(
        executor: impl PgExecutor<'_>,
        code: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM courses WHERE code = $1)")
            .bind(code)
            .fetch_one(executor)
            .await
    }

    /// Full-field replace of a course. Returns `None` if the id is absent.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &CreateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET name = $2, code = $3, area = $4, description = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.area)
            .bind(&input.description)
            .fetch_optional(executor)
            .await
    }

    /// Delete a course by ID. Dependent classes, students and subjects
    /// are removed by the store-level cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
