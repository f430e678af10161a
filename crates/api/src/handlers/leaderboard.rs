//! Handler for the city leaderboard.

use axum::extract::State;
use axum::Json;
use premiere_core::leaderboard::CityAggregate;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Leaderboard payload: the ranked cities plus the threshold they are
/// racing toward.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub threshold: u32,
    pub cities: Vec<CityAggregate>,
}

/// GET /api/v1/leaderboard
///
/// Ranked per-city signup counts computed over the live board. The
/// board is a dedup-by-id mirror of the store, so this matches a full
/// recomputation from `SubmissionRepo::list`.
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<LeaderboardResponse>>> {
    let threshold = state.config.premiere_threshold;
    let cities = state.live_board.leaderboard(threshold).await;

    Ok(Json(DataResponse {
        data: LeaderboardResponse { threshold, cities },
    }))
}
