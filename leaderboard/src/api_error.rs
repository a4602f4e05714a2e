use {
	crate::{cache::CacheError, consts::UNSUPPORTED_SYMBOL_BODY, upstream::UpstreamError},
	axum::{
		http::StatusCode,
		response::{IntoResponse, Response},
	},
	thiserror::Error,
};

/// Everything that can end a leaderboard request early.
/// Each variant maps to exactly one status code, see `status_code`.
#[derive(Debug, Error)]
pub enum LeaderboardError {
	#[error("Empty symbol")]
	EmptySymbol,

	#[error("Symbol not supported: {0}")]
	UnsupportedSymbol(String),

	#[error("Cache read failed: {0}")]
	CacheRead(CacheError),

	#[error("Cache write failed: {0}")]
	CacheWrite(CacheError),

	#[error(transparent)]
	Upstream(#[from] UpstreamError),

	#[error("Serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),

	/// The single-flight leader for the same key failed or was dropped
	#[error("In-flight refresh for key {0} did not complete")]
	InflightAborted(String),
}

impl LeaderboardError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			LeaderboardError::EmptySymbol => StatusCode::BAD_REQUEST,
			LeaderboardError::UnsupportedSymbol(_) => StatusCode::NOT_FOUND,
			LeaderboardError::CacheRead(_)
			| LeaderboardError::CacheWrite(_)
			| LeaderboardError::Upstream(_)
			| LeaderboardError::Serialization(_)
			| LeaderboardError::InflightAborted(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

// 500 bodies stay empty, the cause only goes to the log
impl IntoResponse for LeaderboardError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		match self {
			LeaderboardError::UnsupportedSymbol(_) => (status, UNSUPPORTED_SYMBOL_BODY).into_response(),
			LeaderboardError::EmptySymbol => status.into_response(),
			e => {
				tracing::error!("Leaderboard request failed: {}", e);
				status.into_response()
			}
		}
	}
}
