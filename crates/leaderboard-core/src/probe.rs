//! Key-value store smoke test.
//!
//! Writes a scratch record, reads it back, checks existence and deletes
//! it again. Used by the `kv-test` endpoint and CLI command.

use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, info};

use crate::error::{StoreError, StoreResult};
use crate::store::KvStore;

/// Scratch key used by the probe. Never holds real data.
pub const PROBE_KEY: &str = "test:key";

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeReport {
    fn passed() -> Self {
        Self {
            success: true,
            message: Some("KV test passed".to_string()),
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error),
        }
    }
}

/// Run a write/read/has/delete round trip against `store`.
pub async fn probe_store(store: &dyn KvStore) -> ProbeReport {
    info!(backend = store.backend(), "Testing KV functionality");
    match run_probe(store).await {
        Ok(()) => ProbeReport::passed(),
        Err(e) => {
            error!(error = %e, backend = store.backend(), "KV test failed");
            ProbeReport::failed(e.to_string())
        }
    }
}

async fn run_probe(store: &dyn KvStore) -> StoreResult<()> {
    let value = json!({
        "test": "value",
        "timestamp": chrono::Utc::now().timestamp_millis(),
    });

    store.set(PROBE_KEY, &value).await?;
    debug!("Probe write ok");

    let read = store.get(PROBE_KEY).await?;
    if read.as_ref() != Some(&value) {
        return Err(StoreError::backend(format!(
            "read back {:?}, expected {}",
            read, value
        )));
    }
    debug!("Probe read ok");

    if !store.has(PROBE_KEY).await? {
        return Err(StoreError::backend("probe key missing after write"));
    }
    debug!("Probe has ok");

    store.del(PROBE_KEY).await?;
    debug!("Probe cleanup ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use serde_json::Value;

    /// Accepts writes but never returns them.
    struct ForgetfulStore;

    #[async_trait]
    impl KvStore for ForgetfulStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<Value>> {
            Ok(None)
        }
        async fn set(&self, _key: &str, _value: &Value) -> StoreResult<()> {
            Ok(())
        }
        async fn has(&self, _key: &str) -> StoreResult<bool> {
            Ok(false)
        }
        async fn del(&self, _key: &str) -> StoreResult<()> {
            Ok(())
        }
        fn backend(&self) -> &'static str {
            "forgetful"
        }
    }

    struct ReadOnlyStore;

    #[async_trait]
    impl KvStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<Value>> {
            Ok(None)
        }
        async fn set(&self, _key: &str, _value: &Value) -> StoreResult<()> {
            Err(StoreError::backend("READONLY"))
        }
        async fn has(&self, _key: &str) -> StoreResult<bool> {
            Ok(false)
        }
        async fn del(&self, _key: &str) -> StoreResult<()> {
            Ok(())
        }
        fn backend(&self) -> &'static str {
            "readonly"
        }
    }

    #[tokio::test]
    async fn test_probe_passes_and_cleans_up() {
        let store = MemoryStore::new();
        let report = probe_store(&store).await;
        assert!(report.success);
        assert_eq!(report.message.as_deref(), Some("KV test passed"));
        assert!(!store.has(PROBE_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_probe_detects_lost_write() {
        let report = probe_store(&ForgetfulStore).await;
        assert!(!report.success);
        assert!(report.error.is_some());
    }

    #[tokio::test]
    async fn test_probe_reports_store_error() {
        let report = probe_store(&ReadOnlyStore).await;
        assert!(!report.success);
        assert!(report.error.unwrap().contains("READONLY"));
    }

    #[test]
    fn test_report_serialization_omits_empty_fields() {
        let value = serde_json::to_value(ProbeReport::passed()).unwrap();
        assert_eq!(value, json!({"success": true, "message": "KV test passed"}));
    }
}
