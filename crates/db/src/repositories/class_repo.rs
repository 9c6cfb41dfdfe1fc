//! Repository for the `classes` table.

use campus_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::class::{Class, CreateClass};

const COLUMNS: &str = "id, name, course_code, description, created_at";

/// Provides CRUD operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateClass,
    ) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (name, course_code, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(&input.name)
            .bind(&input.course_code)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    /// List all classes ordered by name ascending.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY name");
        sqlx::query_as::<_, Class>(&query).fetch_all(executor).await
    }

    /// Find a class by its unique name.
    pub async fn find_by_name(
        executor: impl PgExecutor<'_>,
        name: &str,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE name = $1");
        sqlx::query_as::<_, Class>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Whether any class references the given course code.
    pub async fn any_for_course(
        executor: impl PgExecutor<'_>,
        course_code: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM classes WHERE course_code = $1)")
            .bind(course_code)
            .fetch_one(executor)
            .await
    }

    /// Full-field replace of a class. Returns `None` if the id is absent.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &CreateClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET name = $2, course_code = $3, description = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.course_code)
            .bind(&input.description)
            .fetch_optional(executor)
            .await
    }

    /// Delete a class by ID. Enrolled students and subjects are removed
    /// by the store-level cascade. Returns `true` if a row was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
