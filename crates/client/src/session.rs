//! Session: owns the per-topic caches and the single refresh path.
//!
//! Both refresh triggers -- a realtime `changed:<topic>` signal and the
//! polling fallback for the active view -- funnel into
//! [`Session::request_refresh`], so there is exactly one code path that
//! talks to the server and replaces a cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use campus_events::Topic;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::backend::Backend;
use crate::cache::{descriptor, TopicCache};
use crate::error::ClientError;

/// Polling fallback interval for the active view.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Notifications delivered to the UI layer over the session's event
/// channel. The consumer applies them on its own (interaction) thread;
/// the session never touches interactive state directly.
#[derive(Debug)]
pub enum SessionEvent {
    /// A topic's cache was replaced with a fresh list.
    Updated { topic: Topic, first_load: bool },
    /// A refresh failed; the previous cache (if any) is untouched.
    RefreshFailed { topic: Topic, error: String },
    /// The credential expired or was rejected. The UI must force a new
    /// login; there is no silent refresh.
    Expired,
}

/// A connected user session: one credential, one cache per topic.
pub struct Session {
    backend: Arc<dyn Backend>,
    caches: HashMap<Topic, TopicCache>,
    events: mpsc::UnboundedSender<SessionEvent>,
    /// The topic whose view is currently on screen; only this one is
    /// polled on the fallback interval.
    active_topic: Option<Topic>,
}

impl Session {
    /// Create a session over the given backend. Returns the session and
    /// the receiving half of its event channel.
    pub fn new(backend: Arc<dyn Backend>) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let caches = Topic::ALL
            .into_iter()
            .map(|topic| (topic, TopicCache::new()))
            .collect();
        (
            Self {
                backend,
                caches,
                events,
                active_topic: None,
            },
            rx,
        )
    }

    /// The cache for a topic.
    pub fn cache(&self, topic: Topic) -> &TopicCache {
        &self.caches[&topic]
    }

    /// Select a row in a topic's cache (or clear with `None`).
    pub fn select(&mut self, topic: Topic, id: Option<i64>) {
        self.caches
            .get_mut(&topic)
            .expect("every topic has a cache")
            .select(id);
    }

    /// Mark which topic's view is on screen; the polling fallback only
    /// refreshes this one.
    pub fn set_active_topic(&mut self, topic: Option<Topic>) {
        self.active_topic = topic;
    }

    /// Filter the cached rows of a topic by its search key. Purely
    /// local; never triggers a network call.
    pub fn filter(&self, topic: Topic, query: &str) -> Vec<&Value> {
        self.cache(topic).filter(descriptor(topic).search_key, query)
    }

    /// The single refresh path. Fetches the full list for the topic and
    /// replaces the cache; emits the outcome on the event channel.
    ///
    /// A stale result can overwrite a newer one when refreshes race --
    /// acceptable, since both came from the authoritative server list
    /// and the next refresh converges.
    pub async fn request_refresh(&mut self, topic: Topic) {
        let cache = self
            .caches
            .get_mut(&topic)
            .expect("every topic has a cache");
        let first_load = cache.begin_fetch();

        let backend = Arc::clone(&self.backend);
        match backend.list(topic).await {
            Ok(rows) => {
                let cache = self
                    .caches
                    .get_mut(&topic)
                    .expect("every topic has a cache");
                cache.apply(rows);
                let _ = self.events.send(SessionEvent::Updated { topic, first_load });
            }
            Err(ClientError::Unauthorized(_)) => {
                self.caches
                    .get_mut(&topic)
                    .expect("every topic has a cache")
                    .fetch_failed();
                let _ = self.events.send(SessionEvent::Expired);
            }
            Err(e) => {
                self.caches
                    .get_mut(&topic)
                    .expect("every topic has a cache")
                    .fetch_failed();
                let _ = self.events.send(SessionEvent::RefreshFailed {
                    topic,
                    error: e.to_string(),
                });
            }
        }
    }

    /// Drive the session: realtime signals and the polling fallback both
    /// call [`request_refresh`](Self::request_refresh).
    ///
    /// Runs until the signal channel closes.
    pub async fn run(mut self, mut signals: mpsc::UnboundedReceiver<Topic>) {
        let mut poll = tokio::time::interval(POLL_INTERVAL);
        // The first tick fires immediately; skip it so polling starts
        // one interval from now.
        poll.tick().await;

        loop {
            tokio::select! {
                maybe_topic = signals.recv() => {
                    match maybe_topic {
                        Some(topic) => self.request_refresh(topic).await,
                        None => {
                            tracing::info!("Signal channel closed, session loop ending");
                            break;
                        }
                    }
                }
                _ = poll.tick() => {
                    if let Some(topic) = self.active_topic {
                        self.request_refresh(topic).await;
                    }
                }
            }
        }
    }
}
