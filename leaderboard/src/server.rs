use {
	crate::{
		consts::REQUEST_ID_HEADER,
		handlers::{handle_empty_symbol, handle_leaderboard, handle_leaderboard_by_symbol},
		service::LeaderboardService,
	},
	axum::{Router, http::HeaderName, routing::get},
	std::{sync::Arc, time::Duration},
	tower_http::{
		cors::{Any, CorsLayer},
		request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
		trace::TraceLayer,
	},
};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<LeaderboardService>,
}

impl AppState {
	pub fn new(service: LeaderboardService) -> Self {
		Self { service: Arc::new(service) }
	}
}

pub fn app(state: AppState) -> Router {
	let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
	Router::new()
		.route("/leaderboard", get(handle_leaderboard))
		.route("/leaderboard/", get(handle_empty_symbol))
		.route("/leaderboard/{*symbol}", get(handle_leaderboard_by_symbol)) //the whole suffix is the symbol, BTC/extra is rejected as unsupported
		.layer(PropagateRequestIdLayer::new(x_request_id.clone())) //copy the request id onto the response
		.layer(TraceLayer::new_for_http())
		.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
		.layer(CorsLayer::new().allow_methods(Any).allow_origin(Any).allow_credentials(false).allow_headers(Any).expose_headers(Any).max_age(Duration::from_secs(60) * 10))
		.with_state(state)
}
