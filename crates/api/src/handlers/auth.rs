//! Handlers for `/register` and `/login`.

use axum::extract::State;
use axum::Json;
use campus_core::error::CoreError;
use campus_db::models::credential::CreateCredential;
use campus_db::repositories::CredentialRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, validate_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register` and `POST /login`.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Confirmation message returned by `POST /register`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful authentication response returned by `POST /login`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Store a new credential. The username must be unused; the password is
/// bounded at 72 bytes and stored only as a salted Argon2id hash.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<AuthRequest>,
) -> AppResult<Json<MessageResponse>> {
    let username = input.username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Field 'username' must not be empty".into(),
        )));
    }
    validate_password(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let mut tx = state.pool.begin().await?;
    CredentialRepo::create(
        &mut *tx,
        &CreateCredential {
            username,
            password_hash,
        },
    )
    .await?;
    tx.commit().await?;

    Ok(Json(MessageResponse {
        message: "User registered".into(),
    }))
}

/// POST /login
///
/// Authenticate with username + password. Returns a signed, time-limited
/// bearer token carrying the login name as subject.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<AuthRequest>,
) -> AppResult<Json<TokenResponse>> {
    let credential = CredentialRepo::find_by_username(&state.pool, input.username.trim())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &credential.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let access_token = generate_token(&credential.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
