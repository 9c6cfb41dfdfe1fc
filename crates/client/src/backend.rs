//! Server access for the client session.
//!
//! [`Backend`] is the seam the session refreshes through; [`HttpBackend`]
//! is the real implementation over reqwest, with a fixed request timeout
//! and the stored bearer token. Tests inject an in-memory fake instead.

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use campus_events::Topic;
use serde_json::Value;

use crate::cache::descriptor;
use crate::error::ClientError;

/// Fixed ceiling for every outbound request. A timeout is a transport
/// failure, surfaced to the caller and never retried automatically.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum accepted password length in bytes, checked locally before
/// registering (mirrors the server-side bound).
const MAX_PASSWORD_BYTES: usize = 72;

/// What the session needs from the server: full-list fetches per topic.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn list(&self, topic: Topic) -> Result<Vec<Value>, ClientError>;
}

/// HTTP implementation of [`Backend`] plus the mutating calls the UI
/// issues directly.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    /// Exactly one credential token; cleared when the server answers 401.
    token: RwLock<Option<String>>,
}

impl HttpBackend {
    /// Create a backend for the given server base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            token: RwLock::new(None),
        })
    }

    /// Whether a credential token is currently held.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    /// Drop the stored token, forcing re-authentication.
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    fn bearer(&self) -> Result<String, ClientError> {
        self.token
            .read()
            .expect("token lock poisoned")
            .clone()
            .ok_or_else(|| ClientError::Unauthorized("Not logged in".into()))
    }

    /// POST /register. The password length bound is checked locally so
    /// the user gets immediate feedback.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ClientError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ClientError::InvalidInput(
                "Username and password are required".into(),
            ));
        }
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(ClientError::InvalidInput(format!(
                "Password too long (max {MAX_PASSWORD_BYTES} bytes)"
            )));
        }
        let response = self
            .http
            .post(format!("{}/register", self.base_url))
            .json(&serde_json::json!({"username": username, "password": password}))
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    /// POST /login. On success the returned token is stored for all
    /// subsequent calls.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .json(&serde_json::json!({"username": username, "password": password}))
            .send()
            .await?;
        let body = check_status(response).await?;
        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::Transport("Login response missing token".into()))?
            .to_string();
        *self.token.write().expect("token lock poisoned") = Some(token);
        Ok(())
    }

    /// POST /<group> -- create a record, returning the stored row.
    pub async fn add(&self, topic: Topic, fields: Value) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(self.topic_url(topic))
            .bearer_auth(self.bearer()?)
            .json(&fields)
            .send()
            .await?;
        self.authed(check_status(response).await)
    }

    /// PUT /<group>/{id} -- full-field replace, returning the stored row.
    pub async fn update(&self, topic: Topic, id: i64, fields: Value) -> Result<Value, ClientError> {
        let response = self
            .http
            .put(format!("{}/{id}", self.topic_url(topic)))
            .bearer_auth(self.bearer()?)
            .json(&fields)
            .send()
            .await?;
        self.authed(check_status(response).await)
    }

    /// DELETE /<group>/{id}.
    pub async fn delete(&self, topic: Topic, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/{id}", self.topic_url(topic)))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        self.authed(check_status(response).await).map(|_| ())
    }

    /// DELETE /courses/{id}/cascade -- remove a course and everything
    /// that depends on it.
    pub async fn delete_course_cascade(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/courses/{id}/cascade", self.base_url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        self.authed(check_status(response).await).map(|_| ())
    }

    fn topic_url(&self, topic: Topic) -> String {
        format!("{}/{}", self.base_url, descriptor(topic).path)
    }

    /// Post-process an authenticated call: a 401 clears the stored
    /// token so the session can force re-login.
    fn authed(&self, result: Result<Value, ClientError>) -> Result<Value, ClientError> {
        if matches!(result, Err(ClientError::Unauthorized(_))) {
            self.clear_token();
        }
        result
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list(&self, topic: Topic) -> Result<Vec<Value>, ClientError> {
        let response = self
            .http
            .get(self.topic_url(topic))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let body = self.authed(check_status(response).await)?;
        match body {
            Value::Array(rows) => Ok(rows),
            other => Err(ClientError::Transport(format!(
                "Expected a list, got: {other}"
            ))),
        }
    }
}

/// Map a response to its JSON body, or to the matching error kind.
///
/// Responses without a body (204) yield `Value::Null`.
async fn check_status(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    if status.is_success() {
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        return Ok(response.json().await?);
    }

    // Pull the human-readable message out of the error envelope.
    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("error")
                .or_else(|| body.get("detail"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.to_string());

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized(message));
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
