use {
	crate::{api_error::LeaderboardError, server::AppState},
	axum::{
		extract::{Path, State},
		http::header::CONTENT_TYPE,
		response::{IntoResponse, Response},
	},
};

fn json_response(payload: Vec<u8>) -> Response {
	([(CONTENT_TYPE, "application/json")], payload).into_response()
}

/// GET /leaderboard
pub async fn handle_leaderboard(State(state): State<AppState>) -> Result<Response, LeaderboardError> {
	let payload = state.service.global().await?;
	Ok(json_response(payload))
}

/// GET /leaderboard/{*symbol}
pub async fn handle_leaderboard_by_symbol(State(state): State<AppState>, Path(symbol): Path<String>) -> Result<Response, LeaderboardError> {
	let payload = state.service.by_symbol(&symbol).await?;
	Ok(json_response(payload))
}

/// GET /leaderboard/ , the catch-all route does not match an empty suffix
pub async fn handle_empty_symbol() -> LeaderboardError {
	LeaderboardError::EmptySymbol
}
