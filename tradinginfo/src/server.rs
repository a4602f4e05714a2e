use {
	crate::generator::generate_trades,
	axum::{Json, Router, extract::State, routing::get},
	common::{consts::TRADING_INFO_PATH, model::TradeRecord},
	tower_http::trace::TraceLayer,
	tracing::debug,
};

#[derive(Clone)]
pub struct FeedState {
	pub batch_size: usize,
}

pub fn app(state: FeedState) -> Router {
	Router::new().route(TRADING_INFO_PATH, get(handle_trading_info)).layer(TraceLayer::new_for_http()).with_state(state)
}

/// GET /tradinginfo, a new random batch on every call
async fn handle_trading_info(State(state): State<FeedState>) -> Json<Vec<TradeRecord>> {
	let trades = generate_trades(state.batch_size);
	debug!("Serving {} synthetic trades", trades.len());
	Json(trades)
}
