//! Cache-aside behavior of the leaderboard routes, driven through the axum router

use {
	axum::http::{StatusCode, header::CONTENT_TYPE},
	common::{consts::LEADERBOARD_SIZE, key::GLOBAL_LEADERBOARD_KEY},
	leaderboard::{
		cache::{CacheLookup, CacheStore, TtlCache},
		service::LeaderboardService,
		upstream::UpstreamError,
	},
	std::{sync::Arc, time::Duration},
	tests::test_utils::{BrokenCache, CountingCache, FakeFeed, assert_price_descending, build_app, get, sample_feed, trade, trades_for},
};

const MB: usize = 1024 * 1024;

// ============================================================================
// helpers
// ============================================================================

fn ttl_cache(ttl: Duration) -> Arc<CountingCache<TtlCache>> {
	Arc::new(CountingCache::new(TtlCache::new(ttl, MB).unwrap()))
}

fn is_cached(cache: &CountingCache<TtlCache>, key: &str) -> bool {
	matches!(cache.get(key), CacheLookup::Found(_))
}

// ============================================================================
// global route
// ============================================================================

#[tokio::test]
async fn test_global_leaderboard_miss_then_hit() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(cache.clone(), feed.clone(), true);

	let first = get(&app, "/leaderboard").await;
	assert_eq!(first.status, StatusCode::OK);
	assert_eq!(first.headers.get(CONTENT_TYPE).unwrap(), "application/json");
	let records = first.records();
	assert_eq!(records.len(), LEADERBOARD_SIZE);
	assert_price_descending(&records);
	assert_eq!(feed.calls(), 1);
	assert_eq!(cache.writes(), 1);

	let second = get(&app, "/leaderboard").await;
	assert_eq!(second.status, StatusCode::OK);
	assert_eq!(second.body, first.body);
	assert_eq!(feed.calls(), 1);
	assert_eq!(cache.writes(), 1);
}

#[tokio::test]
async fn test_wire_shape_of_records() {
	let feed = Arc::new(FakeFeed::new(vec![trade("BTC", 12.5, "Ada Lovelace")]));
	let app = build_app(ttl_cache(Duration::from_secs(300)), feed, true);

	let response = get(&app, "/leaderboard").await;

	let value: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
	assert_eq!(value, serde_json::json!([{"StockSymbol": "BTC", "Price": 12.5, "LastUpdated": 1_700_000_000, "TraderName": "Ada Lovelace"}]));
}

#[tokio::test]
async fn test_empty_feed_serves_empty_board() {
	let feed = Arc::new(FakeFeed::new(Vec::new()));
	let app = build_app(ttl_cache(Duration::from_secs(300)), feed, true);

	let response = get(&app, "/leaderboard").await;

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn test_upstream_failure_does_not_poison_cache() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::failing(UpstreamError::Unavailable("connection refused".to_string())));
	let app = build_app(cache.clone(), feed.clone(), true);

	let failed = get(&app, "/leaderboard").await;
	assert_eq!(failed.status, StatusCode::INTERNAL_SERVER_ERROR);
	assert!(failed.body.is_empty());
	assert_eq!(cache.writes(), 0);
	assert!(!is_cached(&cache, GLOBAL_LEADERBOARD_KEY));

	feed.set_response(Ok(sample_feed()));
	let recovered = get(&app, "/leaderboard").await;
	assert_eq!(recovered.status, StatusCode::OK);
	assert_eq!(feed.calls(), 2);
	assert_eq!(cache.writes(), 1);
}

#[tokio::test]
async fn test_malformed_upstream_is_internal_error() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::failing(UpstreamError::MalformedResponse("expected value".to_string())));
	let app = build_app(cache.clone(), feed, true);

	let response = get(&app, "/leaderboard/BTC").await;

	assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(cache.writes(), 0);
}

#[tokio::test]
async fn test_expired_entry_triggers_exactly_one_refetch() {
	let cache = ttl_cache(Duration::from_millis(100));
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(cache.clone(), feed.clone(), true);

	get(&app, "/leaderboard").await;
	get(&app, "/leaderboard").await;
	assert_eq!(feed.calls(), 1);

	tokio::time::sleep(Duration::from_millis(200)).await;

	let refreshed = get(&app, "/leaderboard").await;
	assert_eq!(refreshed.status, StatusCode::OK);
	assert_eq!(feed.calls(), 2);
	get(&app, "/leaderboard").await;
	assert_eq!(feed.calls(), 2);
	assert_eq!(cache.writes(), 2);
}

#[tokio::test]
async fn test_cache_read_failure_skips_upstream() {
	let cache = Arc::new(BrokenCache::default());
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(cache.clone(), feed.clone(), true);

	assert_eq!(get(&app, "/leaderboard").await.status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(get(&app, "/leaderboard/ETH").await.status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(feed.calls(), 0);
	assert_eq!(cache.writes.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_undecodable_cached_payload_is_internal_error() {
	let cache = ttl_cache(Duration::from_secs(300));
	cache.inner.set(GLOBAL_LEADERBOARD_KEY, b"not json".to_vec()).unwrap();
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(cache.clone(), feed.clone(), true);

	let response = get(&app, "/leaderboard").await;

	assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(feed.calls(), 0);
}

#[tokio::test]
async fn test_rejected_cache_write_fails_request() {
	// a board of one record does not fit in 16 bytes
	let cache = Arc::new(CountingCache::new(TtlCache::new(Duration::from_secs(300), 16).unwrap()));
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(cache.clone(), feed, true);

	let response = get(&app, "/leaderboard").await;

	assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(cache.writes(), 0);
	assert!(cache.inner.is_empty());
}

// ============================================================================
// per symbol route
// ============================================================================

#[tokio::test]
async fn test_symbol_board_contains_only_that_symbol() {
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(ttl_cache(Duration::from_secs(300)), feed, true);

	let response = get(&app, "/leaderboard/BTC").await;

	assert_eq!(response.status, StatusCode::OK);
	let records = response.records();
	assert_eq!(records.len(), LEADERBOARD_SIZE);
	assert!(records.iter().all(|r| r.symbol == "BTC"));
	assert_price_descending(&records);
	assert_eq!(records[0].price, 114.0);
}

#[tokio::test]
async fn test_short_symbol_board_is_not_an_error() {
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(ttl_cache(Duration::from_secs(300)), feed, true);

	let xmr = get(&app, "/leaderboard/XMR").await;
	assert_eq!(xmr.status, StatusCode::OK);
	assert_eq!(xmr.records().len(), 3);

	let ada = get(&app, "/leaderboard/ADA").await;
	assert_eq!(ada.status, StatusCode::OK);
	assert_eq!(ada.text(), "[]");
}

#[tokio::test]
async fn test_stable_ties_through_the_route() {
	let records = vec![trade("BTC", 100.0, "A"), trade("ETH", 300.0, "X"), trade("BTC", 100.0, "B"), trade("BTC", 50.0, "C")];
	let app = build_app(ttl_cache(Duration::from_secs(300)), Arc::new(FakeFeed::new(records)), true);

	let names: Vec<String> = get(&app, "/leaderboard/BTC").await.records().into_iter().map(|r| r.trader_name).collect();

	assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_unsupported_symbol_is_not_found() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(cache.clone(), feed.clone(), true);

	for uri in ["/leaderboard/DOGE", "/leaderboard/btc", "/leaderboard/leaderboard"] {
		let response = get(&app, uri).await;
		assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", uri);
		assert_eq!(response.text(), "Symbol not supported");
	}
	assert_eq!(feed.calls(), 0);
	assert_eq!(cache.writes(), 0);
}

#[tokio::test]
async fn test_multi_segment_symbol_is_not_found() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(cache.clone(), feed.clone(), true);

	for uri in ["/leaderboard/BTC/extra", "/leaderboard/BTC/", "/leaderboard/a/b/c"] {
		let response = get(&app, uri).await;
		assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", uri);
		assert_eq!(response.text(), "Symbol not supported", "{}", uri);
	}
	assert_eq!(feed.calls(), 0);
	assert_eq!(cache.writes(), 0);
}

#[tokio::test]
async fn test_empty_symbol_is_bad_request() {
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(ttl_cache(Duration::from_secs(300)), feed.clone(), true);

	let response = get(&app, "/leaderboard/").await;

	assert_eq!(response.status, StatusCode::BAD_REQUEST);
	assert_eq!(feed.calls(), 0);
}

#[tokio::test]
async fn test_keys_are_cached_independently() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::new(sample_feed()));
	let app = build_app(cache.clone(), feed.clone(), true);

	let global = get(&app, "/leaderboard").await;
	let btc = get(&app, "/leaderboard/BTC").await;
	let eth = get(&app, "/leaderboard/ETH").await;
	assert_eq!(feed.calls(), 3);
	assert_ne!(global.body, btc.body);
	assert_ne!(btc.body, eth.body);

	assert!(is_cached(&cache, GLOBAL_LEADERBOARD_KEY));
	assert!(is_cached(&cache, "BTC"));
	assert!(is_cached(&cache, "ETH"));
	assert!(!is_cached(&cache, "XMR"));

	assert_eq!(get(&app, "/leaderboard/BTC").await.body, btc.body);
	assert_eq!(feed.calls(), 3);
}

#[tokio::test]
async fn test_response_carries_request_id() {
	let app = build_app(ttl_cache(Duration::from_secs(300)), Arc::new(FakeFeed::new(sample_feed())), true);

	let response = get(&app, "/leaderboard").await;

	assert!(response.headers.contains_key("x-request-id"));
}

// ============================================================================
// concurrent misses
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_single_flight_collapses_concurrent_misses() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::new(sample_feed()).with_delay(Duration::from_millis(100)));
	let service = Arc::new(LeaderboardService::new(cache.clone(), feed.clone(), true));

	let mut handles = Vec::new();
	for _ in 0..8 {
		let service = service.clone();
		handles.push(tokio::spawn(async move { service.by_symbol("ETH").await }));
	}
	let mut bodies = Vec::new();
	for handle in handles {
		bodies.push(handle.await.unwrap().unwrap());
	}

	assert_eq!(feed.calls(), 1);
	assert_eq!(cache.writes(), 1);
	assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_without_single_flight_concurrent_misses_each_fetch() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::new(sample_feed()).with_delay(Duration::from_millis(100)));
	let service = Arc::new(LeaderboardService::new(cache.clone(), feed.clone(), false));

	let (a, b) = tokio::join!(service.global(), service.global());

	assert_eq!(a.unwrap(), b.unwrap());
	assert_eq!(feed.calls(), 2);
	assert_eq!(cache.writes(), 2);
	assert!(is_cached(&cache, GLOBAL_LEADERBOARD_KEY));
}

#[tokio::test]
async fn test_single_flight_leader_error_reaches_caller() {
	let cache = ttl_cache(Duration::from_secs(300));
	let feed = Arc::new(FakeFeed::failing(UpstreamError::Unavailable("timeout".to_string())));
	let service = LeaderboardService::new(cache.clone(), feed, true);

	let err = service.global().await.unwrap_err();

	assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	assert!(matches!(err, leaderboard::api_error::LeaderboardError::Upstream(UpstreamError::Unavailable(_))));
	assert_eq!(cache.writes(), 0);
}

#[tokio::test]
async fn test_trades_for_more_than_board_size() {
	let feed = Arc::new(FakeFeed::new(trades_for("TRX", 40, 1.0)));
	let app = build_app(ttl_cache(Duration::from_secs(300)), feed, true);

	let records = get(&app, "/leaderboard/TRX").await.records();

	assert_eq!(records.len(), LEADERBOARD_SIZE);
	assert_eq!(records[0].price, 40.0);
}
