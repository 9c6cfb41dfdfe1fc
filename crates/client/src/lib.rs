//! Client session library for the campus system.
//!
//! A [`Session`] authenticates once, keeps a local cache per entity
//! topic, and re-synchronizes a cache whenever a realtime change signal
//! arrives or the polling fallback fires. UI layers consume
//! [`SessionEvent`]s from the session's event channel; they never block
//! on network I/O themselves.

pub mod backend;
pub mod cache;
pub mod error;
pub mod realtime;
pub mod session;

pub use backend::{Backend, HttpBackend};
pub use cache::{descriptor, EntityDescriptor, SyncState, TopicCache};
pub use error::ClientError;
pub use realtime::spawn_signal_listener;
pub use session::{Session, SessionEvent};
