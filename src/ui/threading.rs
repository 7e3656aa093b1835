//! Threading and Async Integration Helpers
//!
//! Channel plumbing between tokio tasks and the egui event loop.

use tokio::sync::mpsc;

use crate::ui::controller::CompareEvent;

/// Completions are rare (one per submit); this only bounds a burst of stale ones
pub const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Sender half handed to the controller; the UI keeps the receiver
pub struct AsyncBridge {
    pub event_tx: mpsc::Sender<CompareEvent>,
}

impl AsyncBridge {
    pub fn new() -> (Self, mpsc::Receiver<CompareEvent>) {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        (Self { event_tx }, event_rx)
    }
}

/// Request UI repaint from a background task
pub fn request_ui_repaint(ctx: Option<&egui::Context>) {
    if let Some(c) = ctx {
        c.request_repaint();
    }
}

/// Drain everything currently queued without blocking the frame
pub fn drain_events(rx: &mut mpsc::Receiver<CompareEvent>) -> Vec<CompareEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_drain_events() {
        let (bridge, mut rx) = AsyncBridge::new();
        assert!(drain_events(&mut rx).is_empty());

        for token in 1..=3 {
            bridge
                .event_tx
                .send(CompareEvent::Finished {
                    token,
                    outcome: Err("x".to_string()),
                })
                .await
                .unwrap();
        }

        let tokens: Vec<u64> = drain_events(&mut rx)
            .into_iter()
            .map(|CompareEvent::Finished { token, .. }| token)
            .collect();
        assert_eq!(tokens, vec![1, 2, 3]);
    }
}
