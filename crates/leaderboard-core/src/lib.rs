//! Leaderboard Core Library
//!
//! Score models, the key-value store abstraction and the score service
//! that keeps the live leaderboard persisted.

pub mod board;
pub mod error;
pub mod probe;
pub mod service;
pub mod store;

pub use board::{default_board, ScoreBoard, TeamScore};
pub use error::{BoardError, StoreError, StoreResult};
pub use probe::{probe_store, ProbeReport, PROBE_KEY};
pub use service::{ScoreService, WriteOutcome, SCORES_KEY};
pub use store::{KvStore, MemoryStore};
