//! Repository for the `credentials` table.

use sqlx::PgExecutor;

use crate::models::credential::{CreateCredential, Credential};

const COLUMNS: &str = "id, username, password_hash, created_at";

/// Provides lookup and storage for login credentials.
pub struct CredentialRepo;

impl CredentialRepo {
    /// Store a new credential, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateCredential,
    ) -> Result<Credential, sqlx::Error> {
        let query = format!(
            "INSERT INTO credentials (username, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Credential>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(executor)
            .await
    }

    /// Find a credential by username.
    pub async fn find_by_username(
        executor: impl PgExecutor<'_>,
        username: &str,
    ) -> Result<Option<Credential>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM credentials WHERE username = $1");
        sqlx::query_as::<_, Credential>(&query)
            .bind(username)
            .fetch_optional(executor)
            .await
    }

    /// Whether a credential with the given username exists. Used by the
    /// request guard to reject tokens whose subject has been removed.
    pub async fn exists(
        executor: impl PgExecutor<'_>,
        username: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM credentials WHERE username = $1)")
            .bind(username)
            .fetch_one(executor)
            .await
    }
}
