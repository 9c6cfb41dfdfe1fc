use std::sync::Arc;

use campus_events::ChangeBus;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: campus_db::DbPool,
    /// Server configuration (JWT secret/expiry, bind address).
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (realtime client sessions).
    pub ws_manager: Arc<WsManager>,
    /// Change bus: handlers publish here after every committed write.
    pub change_bus: Arc<ChangeBus>,
}
