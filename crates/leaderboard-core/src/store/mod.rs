//! Key-value store abstraction.
//!
//! The leaderboard keeps a single JSON record in a string-keyed store.
//! Backends only need the four primitive operations below.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read a value, `None` if the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Write a value, replacing whatever was there.
    async fn set(&self, key: &str, value: &Value) -> StoreResult<()>;

    async fn has(&self, key: &str) -> StoreResult<bool>;

    async fn del(&self, key: &str) -> StoreResult<()>;

    /// Backend name for logging and diagnostics.
    fn backend(&self) -> &'static str;
}
