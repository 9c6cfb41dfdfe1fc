//! Change-event to WebSocket-signal forwarding.
//!
//! [`SignalForwarder`] subscribes to the change bus and pushes a
//! `changed:<topic>` frame to every connected session for each event.
//! Delivery is best-effort end to end: a session disconnected at publish
//! time misses the signal and relies on its own polling fallback.

use std::sync::Arc;

use axum::extract::ws::Message;
use campus_events::ChangeEvent;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Forwards change events to all realtime sessions.
pub struct SignalForwarder {
    ws_manager: Arc<WsManager>,
}

impl SignalForwarder {
    /// Create a new forwarder targeting the given connection manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the forwarding loop.
    ///
    /// Consumes events from `receiver` until the channel is closed
    /// (i.e. the [`ChangeBus`](campus_events::ChangeBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<ChangeEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    let frame = serde_json::json!({
                        "signal": event.topic.signal(),
                        "payload": {},
                    });
                    let message = Message::Text(frame.to_string().into());
                    self.ws_manager.broadcast(message).await;
                    tracing::debug!(topic = %event.topic, "Change signal broadcast");
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Signal forwarder lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Change bus closed, signal forwarder shutting down");
                    break;
                }
            }
        }
    }
}
