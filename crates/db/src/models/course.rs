//! Course entity model and DTO.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub name: String,
    /// Short code, e.g. `ADS`. Unique; referenced by classes, students
    /// and subjects.
    pub code: String,
    pub area: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating or fully replacing a course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub name: String,
    pub code: String,
    pub area: String,
    pub description: Option<String>,
}
