//! Score submission over HTTP.

use axum::{extract::State, Json};
use leaderboard_core::ScoreBoard;
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub scores: ScoreBoard,
}

/// Replace the board and push it to connected viewers.
///
/// Storage failures are not reported; the response echoes the submitted board.
pub async fn submit_scores(
    State(state): State<AppState>,
    Json(board): Json<ScoreBoard>,
) -> Json<SubmitResponse> {
    info!(teams = board.teams().len(), "Received score update over HTTP");
    let delivered = state.channel.apply(&board).await;
    info!(delivered, "Pushed HTTP score update to WebSocket clients");
    Json(SubmitResponse {
        success: true,
        scores: board,
    })
}
