//! Redis connection management.

use leaderboard_core::StoreError;
use redis::aio::ConnectionManager;
use thiserror::Error;

/// Redis error types.
#[derive(Error, Debug)]
pub enum RedisError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Redis operations.
pub type RedisResult<T> = Result<T, RedisError>;

/// ConnectionManager multiplexes and reconnects internally.
/// It is Clone, so callers clone it to get a mutable handle for each operation.
pub type RedisPool = ConnectionManager;

/// Initialize a Redis connection from a URL.
///
/// Example URL: `redis://127.0.0.1:6379`
pub async fn init_pool(redis_url: &str) -> RedisResult<RedisPool> {
    let client = redis::Client::open(redis_url)?;
    let manager = ConnectionManager::new(client).await?;
    Ok(manager)
}

impl From<RedisError> for StoreError {
    fn from(err: RedisError) -> Self {
        match err {
            RedisError::Connection(e)
                if e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() =>
            {
                StoreError::unavailable(e.to_string())
            }
            RedisError::Connection(e) => StoreError::backend(e.to_string()),
            RedisError::Serialization(e) => StoreError::Serialization(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_pool_rejects_bad_url() {
        let result = init_pool("not-a-redis-url").await;
        assert!(matches!(result, Err(RedisError::Connection(_))));
    }

    #[test]
    fn test_command_error_maps_to_backend() {
        let err = RedisError::from(redis::RedisError::from((
            redis::ErrorKind::ResponseError,
            "WRONGTYPE",
        )));
        assert!(matches!(StoreError::from(err), StoreError::Backend(_)));
    }

    #[test]
    fn test_serialization_error_is_preserved() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RedisError::from(json_err);
        assert!(matches!(StoreError::from(err), StoreError::Serialization(_)));
    }
}
