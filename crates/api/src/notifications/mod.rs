//! Bridges the change bus onto realtime WebSocket sessions.

mod forwarder;

pub use forwarder::SignalForwarder;
