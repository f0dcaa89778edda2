//! Web server command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use leaderboard_core::ScoreService;
use leaderboard_web::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "LEADERBOARD_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "LEADERBOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "leaderboard.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, service: ScoreService) -> Result<()> {
    println!();
    println!("  {} {}", "Leaderboard".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  ws://{}:{}/ws/leaderboard",
        "WebSocket".green(),
        args.host,
        args.port
    );
    println!(
        "  {}       http://{}:{}/api",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}      {}", "Store".green(), service.backend());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    leaderboard_web::run_server(service, config).await?;

    Ok(())
}
