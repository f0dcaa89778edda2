//! Named broadcast group for real-time WebSocket updates.
//!
//! Uses a tokio broadcast channel for in-process fan-out. A publish reaches
//! the subscriptions alive at that moment; dropping a [`Subscription`]
//! unsubscribes it.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, warn};

/// Group every leaderboard connection joins.
pub const LEADERBOARD_GROUP: &str = "leaderboard";

const GROUP_CAPACITY: usize = 100;

#[derive(Clone, Debug)]
pub struct BroadcastGroup {
    name: Arc<str>,
    tx: broadcast::Sender<String>,
}

impl BroadcastGroup {
    pub fn new(name: &str) -> Self {
        let (tx, _rx) = broadcast::channel(GROUP_CAPACITY);
        Self {
            name: Arc::from(name),
            tx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscribe(&self) -> Subscription {
        let rx = self.tx.subscribe();
        debug!(group = %self.name, subscribers = self.tx.receiver_count(), "Subscribed");
        Subscription {
            group: self.name.clone(),
            rx,
        }
    }

    /// Send `payload` to every current subscriber. Returns how many there were.
    pub fn publish(&self, payload: String) -> usize {
        // No subscribers is not an error for a live display.
        self.tx.send(payload).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// One connection's membership in a group.
#[derive(Debug)]
pub struct Subscription {
    group: Arc<str>,
    rx: broadcast::Receiver<String>,
}

impl Subscription {
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Wait for the next payload. `None` once the group is gone.
    ///
    /// A subscriber that falls behind skips ahead; payloads are full boards,
    /// so only the latest one matters.
    pub async fn next(&mut self) -> Option<String> {
        loop {
            match self.rx.recv().await {
                Ok(payload) => return Some(payload),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(group = %self.group, skipped, "Subscriber lagged, skipping ahead");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`Subscription::next`].
    pub fn try_next(&mut self) -> Option<String> {
        loop {
            match self.rx.try_recv() {
                Ok(payload) => return Some(payload),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(group = %self.group, skipped, "Subscriber lagged, skipping ahead");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn unsubscribe(self) {
        debug!(group = %self.group, "Unsubscribed");
    }
}
