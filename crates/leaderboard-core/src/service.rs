//! Score service: get/update/initialize over the key-value store.
//!
//! Storage failures never escape this module. Reads fall back to the
//! default board, writes report a [`WriteOutcome`] that callers are free
//! to ignore.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::board::{default_board, ScoreBoard};
use crate::error::{StoreError, StoreResult};
use crate::store::KvStore;

/// Storage key of the persisted board.
pub const SCORES_KEY: &str = "leaderboard:scores";

/// What a write attempt did.
#[derive(Debug)]
pub enum WriteOutcome {
    /// The record was written.
    Written,
    /// `initialize` found a record and left it alone.
    AlreadyPresent,
    /// The store failed; nothing is known to have been written.
    Failed(StoreError),
}

impl WriteOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Accessor for the persisted board. Cheap to clone.
///
/// Holds no cached copy: every read goes to the store, so several
/// processes sharing one store see the same board.
#[derive(Clone)]
pub struct ScoreService {
    store: Arc<dyn KvStore>,
}

impl ScoreService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn KvStore> {
        &self.store
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Seed the default board if nothing is persisted yet.
    pub async fn initialize(&self) -> WriteOutcome {
        match self.try_initialize().await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, backend = self.backend(), "Failed to initialize scores");
                WriteOutcome::Failed(e)
            }
        }
    }

    async fn try_initialize(&self) -> StoreResult<WriteOutcome> {
        let exists = self.store.has(SCORES_KEY).await?;
        debug!(exists, key = SCORES_KEY, "Checked for persisted scores");
        if exists {
            return Ok(WriteOutcome::AlreadyPresent);
        }

        info!(key = SCORES_KEY, "Seeding default scores");
        let value = serde_json::to_value(default_board())?;
        self.store.set(SCORES_KEY, &value).await?;
        self.verify_write().await;
        Ok(WriteOutcome::Written)
    }

    /// Current board, or the default board when nothing usable is stored.
    ///
    /// The fallback is not persisted.
    pub async fn get(&self) -> ScoreBoard {
        match self.store.get(SCORES_KEY).await {
            Ok(Some(value)) => match serde_json::from_value::<ScoreBoard>(value) {
                Ok(board) => {
                    debug!(teams = board.teams().len(), "Loaded scores from store");
                    board
                }
                Err(e) => {
                    error!(error = %e, "Persisted scores are unreadable, using defaults");
                    default_board()
                }
            },
            Ok(None) => {
                debug!("No persisted scores, using defaults");
                default_board()
            }
            Err(e) => {
                error!(error = %e, backend = self.backend(), "Failed to load scores, using defaults");
                default_board()
            }
        }
    }

    /// Replace the persisted board. Last write wins.
    pub async fn update(&self, board: &ScoreBoard) -> WriteOutcome {
        match self.try_update(board).await {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                error!(error = %e, backend = self.backend(), "Failed to save scores");
                WriteOutcome::Failed(e)
            }
        }
    }

    async fn try_update(&self, board: &ScoreBoard) -> StoreResult<()> {
        let value = serde_json::to_value(board)?;
        debug!(teams = board.teams().len(), "Saving scores");
        self.store.set(SCORES_KEY, &value).await?;
        self.verify_write().await;
        Ok(())
    }

    /// Read the record back after a write. Diagnostic only.
    async fn verify_write(&self) {
        match self.store.get(SCORES_KEY).await {
            Ok(Some(value)) => debug!(stored = %value, "Verified persisted scores"),
            Ok(None) => debug!("Verification read found no scores"),
            Err(e) => debug!(error = %e, "Verification read failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TeamScore;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct FailingStore;

    #[async_trait]
    impl KvStore for FailingStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<Value>> {
            Err(StoreError::unavailable("store is down"))
        }
        async fn set(&self, _key: &str, _value: &Value) -> StoreResult<()> {
            Err(StoreError::unavailable("store is down"))
        }
        async fn has(&self, _key: &str) -> StoreResult<bool> {
            Err(StoreError::unavailable("store is down"))
        }
        async fn del(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::unavailable("store is down"))
        }
        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    fn memory_service() -> (Arc<MemoryStore>, ScoreService) {
        let store = Arc::new(MemoryStore::new());
        let service = ScoreService::new(store.clone());
        (store, service)
    }

    fn sample_board() -> ScoreBoard {
        ScoreBoard::new(vec![
            TeamScore::new(1, "Volleyball", "#FF69B4", "🏐").with_score(5),
            TeamScore::new(2, "Baking", "#9370DB", "🧁").with_score(3),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_initialize_materializes_default() {
        let (store, service) = memory_service();
        assert!(matches!(service.initialize().await, WriteOutcome::Written));
        assert!(store.has(SCORES_KEY).await.unwrap());

        let board = service.get().await;
        assert_eq!(board, default_board());
        let ids: Vec<i64> = board.teams().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_store, service) = memory_service();
        service.initialize().await;
        service.update(&sample_board()).await;

        assert!(matches!(service.initialize().await, WriteOutcome::AlreadyPresent));
        assert!(matches!(service.initialize().await, WriteOutcome::AlreadyPresent));
        assert_eq!(service.get().await, sample_board());
    }

    #[tokio::test]
    async fn test_get_without_record_does_not_persist() {
        let (store, service) = memory_service();
        assert_eq!(service.get().await, default_board());
        assert!(!store.has(SCORES_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let (_store, service) = memory_service();
        let board = sample_board();
        assert!(matches!(service.update(&board).await, WriteOutcome::Written));
        assert_eq!(service.get().await, board);
    }

    #[tokio::test]
    async fn test_update_replaces_wholesale() {
        let (_store, service) = memory_service();
        service.initialize().await;
        let replacement =
            ScoreBoard::new(vec![TeamScore::new(9, "Chess", "#000000", "♟").with_score(1)]).unwrap();
        service.update(&replacement).await;

        let board = service.get().await;
        assert_eq!(board.teams().len(), 1);
        assert!(board.team(1).is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let (_store, service) = memory_service();
        service.update(&sample_board()).await;
        service.update(&default_board()).await;
        assert_eq!(service.get().await, default_board());
    }

    #[tokio::test]
    async fn test_get_falls_back_on_store_failure() {
        let service = ScoreService::new(Arc::new(FailingStore));
        assert_eq!(service.get().await, default_board());
    }

    #[tokio::test]
    async fn test_write_failures_are_reported_not_raised() {
        let service = ScoreService::new(Arc::new(FailingStore));
        let outcome = service.initialize().await;
        assert!(outcome.is_failed());
        assert!(matches!(outcome.error(), Some(StoreError::Unavailable(_))));

        assert!(service.update(&sample_board()).await.is_failed());
    }

    #[tokio::test]
    async fn test_unreadable_record_falls_back() {
        let (store, service) = memory_service();
        store.set(SCORES_KEY, &json!({"not": "a board"})).await.unwrap();
        assert_eq!(service.get().await, default_board());

        store.set(SCORES_KEY, &json!([])).await.unwrap();
        assert_eq!(service.get().await, default_board());
    }
}
