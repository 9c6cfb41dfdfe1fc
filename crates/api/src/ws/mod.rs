//! WebSocket infrastructure for realtime change signals.
//!
//! Provides connection management, heartbeat monitoring, and the HTTP
//! upgrade handler used by Axum routes. Every connected session receives
//! every `changed:<topic>` signal; there is no per-session subscription
//! state because clients subscribe to all topics on connect.

mod handler;
mod heartbeat;
pub mod manager;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
