//! Class entity model and DTO.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    /// Class name, e.g. `1A-MORNING`. Unique; referenced by students
    /// and subjects.
    pub name: String,
    pub course_code: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating or fully replacing a class.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClass {
    pub name: String,
    pub course_code: String,
    pub description: Option<String>,
}
