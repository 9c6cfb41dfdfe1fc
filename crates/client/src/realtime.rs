//! Realtime signal listener.
//!
//! Connects to the server's `/ws` endpoint and turns every
//! `changed:<topic>` frame into a refresh request for the session loop.
//! Signals published while disconnected are simply missed, so every
//! (re)connect starts by requesting a refresh of all topics.

use std::time::Duration;

use campus_events::Topic;
use futures::StreamExt;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// Delay before attempting to reconnect after a drop.
const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// Spawn the listener task. It runs until the signal channel is closed
/// (i.e. the session loop ended).
pub fn spawn_signal_listener(
    ws_url: String,
    signals: mpsc::UnboundedSender<Topic>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match connect_async(ws_url.as_str()).await {
                Ok((stream, _)) => {
                    tracing::info!(url = %ws_url, "Realtime channel connected");

                    // Catch up on anything missed while disconnected.
                    for topic in Topic::ALL {
                        if signals.send(topic).is_err() {
                            return;
                        }
                    }

                    let (_write, mut read) = stream.split();
                    while let Some(frame) = read.next().await {
                        match frame {
                            Ok(Message::Text(text)) => {
                                if let Some(topic) = parse_signal(&text) {
                                    if signals.send(topic).is_err() {
                                        return;
                                    }
                                }
                            }
                            Ok(Message::Close(_)) => break,
                            Ok(_) => {}
                            Err(e) => {
                                tracing::debug!(error = %e, "Realtime channel receive error");
                                break;
                            }
                        }
                    }
                    tracing::info!("Realtime channel disconnected");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Realtime channel connect failed");
                }
            }

            if signals.is_closed() {
                return;
            }
            tokio::time::sleep(RECONNECT_DELAY).await;
        }
    })
}

/// Parse a `{"signal": "changed:<topic>", ...}` frame.
fn parse_signal(text: &str) -> Option<Topic> {
    let frame: Value = serde_json::from_str(text).ok()?;
    let signal = frame.get("signal")?.as_str()?;
    Topic::from_signal(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_change_signal_frames() {
        let topic = parse_signal(r#"{"signal": "changed:students", "payload": {}}"#);
        assert_eq!(topic, Some(Topic::Students));

        let topic = parse_signal(r#"{"signal": "changed:chatbot-entries", "payload": {}}"#);
        assert_eq!(topic, Some(Topic::ChatbotEntries));
    }

    #[test]
    fn ignores_unknown_or_malformed_frames() {
        assert_eq!(parse_signal(r#"{"signal": "changed:nope"}"#), None);
        assert_eq!(parse_signal(r#"{"other": 1}"#), None);
        assert_eq!(parse_signal("not json"), None);
    }
}
