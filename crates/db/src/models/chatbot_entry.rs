//! Chatbot question/answer entity model and DTO.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `chatbot_entries` table. No uniqueness is enforced;
/// duplicate questions are allowed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatbotEntry {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub created_at: Timestamp,
}

/// DTO for creating or fully replacing a chatbot entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatbotEntry {
    pub question: String,
    pub answer: String,
}
