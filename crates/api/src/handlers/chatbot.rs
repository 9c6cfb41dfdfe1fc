//! Handlers for the `/chatbot-entries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::normalize::clean;
use campus_core::types::DbId;
use campus_db::models::chatbot_entry::{ChatbotEntry, CreateChatbotEntry};
use campus_db::repositories::ChatbotRepo;
use campus_events::Topic;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::require;

/// Validate required fields; question and answer keep their case.
fn normalize_input(input: CreateChatbotEntry) -> Result<CreateChatbotEntry, CoreError> {
    require("question", &input.question)?;
    require("answer", &input.answer)?;
    Ok(CreateChatbotEntry {
        question: clean(&input.question),
        answer: clean(&input.answer),
    })
}

/// POST /chatbot-entries
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateChatbotEntry>,
) -> AppResult<(StatusCode, Json<ChatbotEntry>)> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    let entry = ChatbotRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    state.change_bus.publish(Topic::ChatbotEntries);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /chatbot-entries
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<ChatbotEntry>>> {
    let entries = ChatbotRepo::list(&state.pool).await?;
    Ok(Json(entries))
}

/// PUT /chatbot-entries/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateChatbotEntry>,
) -> AppResult<Json<ChatbotEntry>> {
    let input = normalize_input(input)?;

    let mut tx = state.pool.begin().await?;
    let entry = ChatbotRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChatbotEntry",
            key: id.to_string(),
        }))?;
    tx.commit().await?;

    state.change_bus.publish(Topic::ChatbotEntries);
    Ok(Json(entry))
}

/// DELETE /chatbot-entries/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let deleted = ChatbotRepo::delete(&mut *tx, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ChatbotEntry",
            key: id.to_string(),
        }));
    }
    tx.commit().await?;

    state.change_bus.publish(Topic::ChatbotEntries);
    Ok(StatusCode::NO_CONTENT)
}
