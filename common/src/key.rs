// Cache key derivation for leaderboard result sets

/// Key of the global (all symbols) leaderboard
pub const GLOBAL_LEADERBOARD_KEY: &str = "leaderboard";

/// `None` is the global board, `Some(symbol)` is keyed by the bare symbol.
/// Supported symbols never equal `GLOBAL_LEADERBOARD_KEY`, so the keys cannot collide.
pub fn leaderboard_key(symbol: Option<&str>) -> String {
	match symbol {
		Some(symbol) => symbol.to_string(),
		None => GLOBAL_LEADERBOARD_KEY.to_string(),
	}
}
