//! Application state.

use leaderboard_core::ScoreService;

use crate::channel::LeaderboardChannel;

/// Where the server listens.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: ScoreService,
    pub channel: LeaderboardChannel,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(service: ScoreService, config: ServerConfig) -> Self {
        let channel = LeaderboardChannel::new(service.clone());
        Self {
            service,
            channel,
            config,
        }
    }
}
