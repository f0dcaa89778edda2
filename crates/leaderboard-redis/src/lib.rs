//! Leaderboard Redis Data Layer
//!
//! Redis-backed implementation of the leaderboard key-value store.

pub mod client;
pub mod store;

pub use client::{init_pool, RedisError, RedisPool, RedisResult};
pub use store::RedisStore;
