//! Diagnostic endpoints. Not part of the leaderboard protocol.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use leaderboard_core::{probe_store, ProbeReport, ScoreBoard};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

/// Environment variables reported by `/api/debug`. Values of secrets are
/// reduced to presence.
const REPORTED_ENV: &[&str] = &["LEADERBOARD_ENV", "RUST_LOG"];
const SECRET_ENV: &[&str] = &["REDIS_URL"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugReport {
    pub timestamp: String,
    pub version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
    pub store: &'static str,
    pub bind: String,
    pub subscribers: usize,
    pub env: BTreeMap<&'static str, Option<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvTestReport {
    pub timestamp: String,
    pub kv_test: ProbeReport,
    pub scores: ScoreBoard,
    pub store: &'static str,
}

pub async fn debug_info(State(state): State<AppState>) -> Json<DebugReport> {
    let mut env = BTreeMap::new();
    for name in REPORTED_ENV {
        env.insert(*name, std::env::var(name).ok());
    }
    for name in SECRET_ENV {
        let present = std::env::var_os(name).map(|_| "<set>".to_string());
        env.insert(*name, present);
    }

    Json(DebugReport {
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        store: state.service.backend(),
        bind: state.config.addr(),
        subscribers: state.channel.group().subscriber_count(),
        env,
    })
}

/// Probe the store, then read and seed the board.
pub async fn kv_test(State(state): State<AppState>) -> Json<KvTestReport> {
    info!("KV test endpoint called");
    let kv_test = probe_store(state.service.store().as_ref()).await;
    let scores = state.service.get().await;
    state.channel.initialize().await;

    Json(KvTestReport {
        timestamp: chrono::Utc::now().to_rfc3339(),
        kv_test,
        scores,
        store: state.service.backend(),
    })
}
