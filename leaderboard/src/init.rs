use {
	crate::{
		cache::{TtlCache, purge_task},
		config::{get_config, load_config},
		server::AppState,
		service::LeaderboardService,
		upstream::HttpTradeFeed,
	},
	common::common_env,
	std::sync::Arc,
	tracing::info,
};

/// Loads env and config, starts logging and builds the application state.
/// Any failure here aborts startup, in particular a cache that cannot be constructed.
pub async fn init_all() -> anyhow::Result<AppState> {
	init_load()?;
	init_logging()?;
	let cache = init_cache()?;
	let feed = init_trade_feed()?;
	let service = LeaderboardService::new(cache, feed, get_config().cache.single_flight);
	Ok(AppState::new(service))
}

fn init_load() -> anyhow::Result<()> {
	common_env::load_common_env()?;
	load_config(common::consts::LEADERBOARD_CONFIG_PATH)?;
	Ok(())
}

fn init_logging() -> anyhow::Result<()> {
	common::logging::init_logging(&get_config().logging)
}

fn init_cache() -> anyhow::Result<Arc<TtlCache>> {
	let cache_config = &get_config().cache;
	let cache = Arc::new(TtlCache::new(cache_config.ttl(), cache_config.max_entry_bytes).map_err(|e| anyhow::anyhow!("Failed to initialize leaderboard cache: {}", e))?);
	tokio::spawn(purge_task(cache.clone(), cache_config.purge_interval()));
	info!("Leaderboard cache initialized (ttl: {}s, purge every {}s, single_flight: {})", cache_config.ttl_secs, cache_config.purge_interval_secs, cache_config.single_flight);
	Ok(cache)
}

fn init_trade_feed() -> anyhow::Result<Arc<HttpTradeFeed>> {
	let url = common_env::require_trading_info_url()?;
	let upstream = &get_config().upstream;
	let feed = HttpTradeFeed::new(url, upstream.timeout(), upstream.connect_timeout())?;
	info!("Trade feed client initialized (url: {}, timeout: {}s)", feed.url(), upstream.timeout_secs);
	Ok(Arc::new(feed))
}
