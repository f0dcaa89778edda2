//! Realtime leaderboard channel.
//!
//! Transport-independent connection lifecycle:
//! - `open`: subscribe to the `leaderboard` group and produce the snapshot
//!   to unicast to the new client,
//! - `receive`: parse an update, persist it, broadcast it to the group,
//! - `close`: unsubscribe.

use std::sync::Arc;

use leaderboard_core::{ScoreBoard, ScoreService, WriteOutcome};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::broadcast::{BroadcastGroup, Subscription, LEADERBOARD_GROUP};

#[derive(Clone)]
pub struct LeaderboardChannel {
    service: ScoreService,
    group: BroadcastGroup,
    /// Serializes update-then-publish so broadcast order matches write order.
    update_gate: Arc<Mutex<()>>,
}

impl LeaderboardChannel {
    pub fn new(service: ScoreService) -> Self {
        Self {
            service,
            group: BroadcastGroup::new(LEADERBOARD_GROUP),
            update_gate: Arc::new(Mutex::new(())),
        }
    }

    pub fn group(&self) -> &BroadcastGroup {
        &self.group
    }

    pub fn service(&self) -> &ScoreService {
        &self.service
    }

    /// Join the group and return the board to send to this client only.
    ///
    /// Subscribes before reading so an update landing in between is still
    /// delivered afterwards.
    pub async fn open(&self) -> serde_json::Result<(Subscription, String)> {
        let subscription = self.group.subscribe();
        self.initialize().await;
        let snapshot = self.service.get().await.to_json()?;
        info!(
            subscribers = self.group.subscriber_count(),
            "Leaderboard client connected"
        );
        Ok((subscription, snapshot))
    }

    /// Seed the default board if missing.
    ///
    /// Runs under the update gate: the existence check and the seeding write
    /// are separate store calls, and an update between them must not be
    /// overwritten by the defaults.
    pub async fn initialize(&self) -> WriteOutcome {
        let _gate = self.update_gate.lock().await;
        self.service.initialize().await
    }

    /// Handle a client message. Malformed payloads are logged and dropped.
    ///
    /// Returns the board that was broadcast, if any.
    pub async fn receive(&self, payload: &str) -> Option<ScoreBoard> {
        match ScoreBoard::from_json(payload) {
            Ok(board) => {
                debug!(teams = board.teams().len(), "Received score update");
                self.apply(&board).await;
                Some(board)
            }
            Err(e) => {
                warn!(error = %e, "Dropping malformed leaderboard message");
                None
            }
        }
    }

    /// Persist `board` and broadcast it as received, not as re-read from the
    /// store. Returns the number of subscribers reached.
    pub async fn apply(&self, board: &ScoreBoard) -> usize {
        let _gate = self.update_gate.lock().await;
        // Persistence failures are already logged by the service.
        let _ = self.service.update(board).await;

        match board.to_json() {
            Ok(payload) => {
                let delivered = self.group.publish(payload);
                debug!(delivered, "Broadcast scores");
                delivered
            }
            Err(e) => {
                error!(error = %e, "Failed to encode scores for broadcast");
                0
            }
        }
    }

    pub fn close(&self, subscription: Subscription) {
        subscription.unsubscribe();
        info!(
            subscribers = self.group.subscriber_count(),
            "Leaderboard client disconnected"
        );
    }
}
