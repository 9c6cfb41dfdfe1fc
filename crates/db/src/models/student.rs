//! Student entity model and DTO.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    /// Registration number. Unique per student.
    pub registration: String,
    pub email: String,
    pub course_code: String,
    pub class_name: String,
    pub created_at: Timestamp,
}

/// DTO for creating or fully replacing a student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub registration: String,
    pub email: String,
    pub course_code: String,
    pub class_name: String,
}
