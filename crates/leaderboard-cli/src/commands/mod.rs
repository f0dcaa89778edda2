//! CLI command definitions and handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use leaderboard_core::{KvStore, MemoryStore, ScoreService};
use leaderboard_redis::RedisStore;
use tracing::warn;

pub mod serve;
pub mod show;

/// Live team leaderboard
#[derive(Parser)]
#[command(name = "leaderboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Redis connection URL
    #[arg(long, global = true, env = "REDIS_URL")]
    pub redis_url: Option<String>,

    /// Keep scores in process memory, ignoring any Redis URL
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Print the current scores
    Show,

    /// Run a write/read/has/delete round trip against the store
    KvTest,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let service = open_service(self.redis_url.as_deref(), self.memory).await?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, service).await,
            Commands::Show => show::execute(service).await,
            Commands::KvTest => kv_test::execute(service).await,
        }
    }
}

/// Build the score service over the configured store.
async fn open_service(redis_url: Option<&str>, memory: bool) -> Result<ScoreService> {
    let store: Arc<dyn KvStore> = match redis_url {
        Some(url) if !memory => Arc::new(
            RedisStore::connect(url)
                .await
                .context("Failed to connect to Redis")?,
        ),
        _ => {
            if !memory {
                warn!("REDIS_URL not set, scores will not survive a restart");
            }
            Arc::new(MemoryStore::new())
        }
    };
    Ok(ScoreService::new(store))
}
