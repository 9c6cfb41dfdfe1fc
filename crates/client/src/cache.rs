//! Per-topic cache with the sync state machine.
//!
//! `Idle -> Loading -> Cached -> Refreshing -> Cached`. The first fetch
//! for a topic is blocking from the user's point of view (`Loading`,
//! busy indicator); later fetches happen in the background
//! (`Refreshing`) while the stale list stays on screen.

use campus_events::Topic;
use serde_json::Value;

/// Sync state of one topic's cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No data has ever been fetched.
    Idle,
    /// First fetch in flight; the view shows a busy indicator.
    Loading,
    /// Cache holds the last fetched list.
    Cached,
    /// Background re-fetch in flight; the stale list stays visible.
    Refreshing,
}

/// Static description of one entity topic: its URL path segment and the
/// row key the local text filter matches against.
///
/// Looked up once per topic through [`descriptor`]; there is no
/// name-string dispatch anywhere.
#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    pub topic: Topic,
    pub path: &'static str,
    pub search_key: &'static str,
}

const DESCRIPTORS: [EntityDescriptor; 5] = [
    EntityDescriptor {
        topic: Topic::Students,
        path: "students",
        search_key: "name",
    },
    EntityDescriptor {
        topic: Topic::Courses,
        path: "courses",
        search_key: "name",
    },
    EntityDescriptor {
        topic: Topic::Classes,
        path: "classes",
        search_key: "name",
    },
    EntityDescriptor {
        topic: Topic::Subjects,
        path: "subjects",
        search_key: "name",
    },
    EntityDescriptor {
        topic: Topic::ChatbotEntries,
        path: "chatbot-entries",
        search_key: "question",
    },
];

/// Look up the descriptor for a topic.
pub fn descriptor(topic: Topic) -> &'static EntityDescriptor {
    DESCRIPTORS
        .iter()
        .find(|d| d.topic == topic)
        .expect("every topic has a descriptor")
}

/// Local cache for one entity topic.
#[derive(Debug)]
pub struct TopicCache {
    pub state: SyncState,
    rows: Vec<Value>,
    selected_id: Option<i64>,
}

impl TopicCache {
    pub fn new() -> Self {
        Self {
            state: SyncState::Idle,
            rows: Vec::new(),
            selected_id: None,
        }
    }

    /// The cached rows, in server order.
    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    /// The identity of the currently-selected row, if any.
    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    /// Mark a fetch as started. Returns `true` when this is the first
    /// load for the topic (the view should show a busy indicator).
    pub fn begin_fetch(&mut self) -> bool {
        match self.state {
            SyncState::Idle | SyncState::Loading => {
                self.state = SyncState::Loading;
                true
            }
            SyncState::Cached | SyncState::Refreshing => {
                self.state = SyncState::Refreshing;
                false
            }
        }
    }

    /// Replace the cache with a freshly fetched list.
    ///
    /// The selection is preserved by identity when a row with the same
    /// id is still present, and cleared otherwise.
    pub fn apply(&mut self, rows: Vec<Value>) {
        if let Some(selected) = self.selected_id {
            let still_present = rows
                .iter()
                .any(|row| row.get("id").and_then(Value::as_i64) == Some(selected));
            if !still_present {
                self.selected_id = None;
            }
        }
        self.rows = rows;
        self.state = SyncState::Cached;
    }

    /// Record a failed fetch. A failed first load returns to `Idle`; a
    /// failed background refresh keeps the stale rows on screen.
    pub fn fetch_failed(&mut self) {
        self.state = match self.state {
            SyncState::Loading => SyncState::Idle,
            _ => SyncState::Cached,
        };
    }

    /// Select a row by id (or clear the selection with `None`).
    pub fn select(&mut self, id: Option<i64>) {
        self.selected_id = id;
    }

    /// Case-insensitive substring filter over the cached rows.
    ///
    /// Matches `search_key` of each row; purely local, never a network
    /// call.
    pub fn filter(&self, search_key: &str, query: &str) -> Vec<&Value> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .filter(|row| {
                row.get(search_key)
                    .and_then(Value::as_str)
                    .is_some_and(|v| v.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

impl Default for TopicCache {
    fn default() -> Self {
        Self::new()
    }
}
