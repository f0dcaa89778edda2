//! `KvStore` over Redis strings. Values are stored as JSON text.

use async_trait::async_trait;
use leaderboard_core::{KvStore, StoreResult};
use redis::AsyncCommands;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::{init_pool, RedisPool, RedisResult};

#[derive(Clone)]
pub struct RedisStore {
    pool: RedisPool,
}

impl RedisStore {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Open a connection manager for `redis_url`.
    pub async fn connect(redis_url: &str) -> RedisResult<Self> {
        let pool = init_pool(redis_url).await?;
        info!("Connected to Redis");
        Ok(Self::new(pool))
    }

    async fn get_raw(&self, key: &str) -> RedisResult<Option<Value>> {
        let mut conn = self.pool.clone();
        let json: Option<String> = conn.get(key).await?;
        match json {
            Some(j) => Ok(Some(serde_json::from_str(&j)?)),
            None => Ok(None),
        }
    }

    async fn set_raw(&self, key: &str, value: &Value) -> RedisResult<()> {
        let mut conn = self.pool.clone();
        conn.set::<_, _, ()>(key, serde_json::to_string(value)?).await?;
        Ok(())
    }

    async fn has_raw(&self, key: &str) -> RedisResult<bool> {
        let mut conn = self.pool.clone();
        Ok(conn.exists::<_, bool>(key).await?)
    }

    async fn del_raw(&self, key: &str) -> RedisResult<()> {
        let mut conn = self.pool.clone();
        conn.del::<_, ()>(key).await?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        debug!(key, "GET");
        Ok(self.get_raw(key).await?)
    }

    async fn set(&self, key: &str, value: &Value) -> StoreResult<()> {
        debug!(key, "SET");
        Ok(self.set_raw(key, value).await?)
    }

    async fn has(&self, key: &str) -> StoreResult<bool> {
        debug!(key, "EXISTS");
        Ok(self.has_raw(key).await?)
    }

    async fn del(&self, key: &str) -> StoreResult<()> {
        debug!(key, "DEL");
        Ok(self.del_raw(key).await?)
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
