//! Repository for the `chatbot_entries` table.

use campus_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::chatbot_entry::{ChatbotEntry, CreateChatbotEntry};

const COLUMNS: &str = "id, question, answer, created_at";

/// Provides CRUD operations for chatbot question/answer pairs.
pub struct ChatbotRepo;

impl ChatbotRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateChatbotEntry,
    ) -> Result<ChatbotEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO chatbot_entries (question, answer)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatbotEntry>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .fetch_one(executor)
            .await
    }

    /// List all entries ordered by question ascending.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<ChatbotEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chatbot_entries ORDER BY question");
        sqlx::query_as::<_, ChatbotEntry>(&query)
            .fetch_all(executor)
            .await
    }

    /// All stored questions. Used by the startup seeder to skip entries
    /// that already exist.
    pub async fn questions(executor: impl PgExecutor<'_>) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT question FROM chatbot_entries")
            .fetch_all(executor)
            .await
    }

    /// Full-field replace of an entry. Returns `None` if the id is absent.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &CreateChatbotEntry,
    ) -> Result<Option<ChatbotEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE chatbot_entries SET question = $2, answer = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatbotEntry>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .fetch_optional(executor)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chatbot_entries WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
