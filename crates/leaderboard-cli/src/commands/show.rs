//! Print the current board.

use anyhow::Result;
use leaderboard_core::ScoreService;

use crate::output;

pub async fn execute(service: ScoreService) -> Result<()> {
    let board = service.get().await;
    output::print_board(&board);
    Ok(())
}
