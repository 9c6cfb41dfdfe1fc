//! Login credential model and DTO.

use campus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `credentials` table.
///
/// The password hash is a PHC-formatted Argon2id string and is never
/// serialized into API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Credential {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for storing a new credential.
#[derive(Debug, Clone)]
pub struct CreateCredential {
    pub username: String,
    pub password_hash: String,
}
