//! Subject entity model and DTO.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub name: String,
    pub instructor: String,
    pub instructor_email: String,
    pub course_code: String,
    pub class_name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating or fully replacing a subject.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubject {
    pub name: String,
    pub instructor: String,
    pub instructor_email: String,
    pub course_code: String,
    pub class_name: String,
    pub description: Option<String>,
}
