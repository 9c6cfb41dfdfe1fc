//! In-process change bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`ChangeBus`] is the fan-out hub for [`ChangeEvent`]s. It is designed
//! to be shared via `Arc<ChangeBus>` across the application: resource
//! handlers publish after each committed write, the WebSocket forwarder
//! subscribes once and pushes the matching signal to every connection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// Entity topics a change can be published under.
///
/// The wire name is the kebab-case entity group used in URLs and in the
/// `changed:<topic>` signal names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Students,
    Courses,
    Classes,
    Subjects,
    ChatbotEntries,
}

impl Topic {
    /// Every topic, in the order clients subscribe to them.
    pub const ALL: [Topic; 5] = [
        Topic::Students,
        Topic::Courses,
        Topic::Classes,
        Topic::Subjects,
        Topic::ChatbotEntries,
    ];

    /// The kebab-case wire name, also used as the URL path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Students => "students",
            Topic::Courses => "courses",
            Topic::Classes => "classes",
            Topic::Subjects => "subjects",
            Topic::ChatbotEntries => "chatbot-entries",
        }
    }

    /// The realtime signal name pushed to sessions, e.g. `changed:students`.
    pub fn signal(self) -> String {
        format!("changed:{}", self.as_str())
    }

    /// Parse a `changed:<topic>` signal name back into a topic.
    pub fn from_signal(signal: &str) -> Option<Topic> {
        let name = signal.strip_prefix("changed:")?;
        Topic::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// A "something changed" notification for one entity topic.
///
/// Carries no payload beyond the topic; receivers re-fetch the full list
/// rather than applying a diff.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEvent {
    pub topic: Topic,
    /// When the change was published (UTC).
    pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// ChangeBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out change bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ChangeEvent`]. Delivery is
/// best-effort: there is no persistence and no retry, and a session that
/// subscribes after a publish simply never sees that event.
pub struct ChangeBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed events are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a change for the given topic to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, topic: Topic) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(ChangeEvent::new(topic));
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
