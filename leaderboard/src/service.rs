use {
	crate::{
		api_error::LeaderboardError,
		cache::{CacheLookup, CacheStore},
		ranking,
		upstream::TradeFeed,
	},
	async_singleflight::Group,
	common::{key::leaderboard_key, model::TradeRecord},
	std::sync::Arc,
	tracing::info,
};

/// Cache-aside orchestrator behind both leaderboard routes.
///
/// A request first consults the cache under the key derived from the route. A hit is
/// served as stored (after checking it still decodes). A miss fetches the whole feed,
/// ranks it, writes the serialized board back and serves those exact bytes, so a hit
/// and the miss that produced it return identical bodies.
///
/// Failures never touch the cache: the payload is only written once fetch, rank and
/// serialization all succeeded.
pub struct LeaderboardService {
	cache: Arc<dyn CacheStore>,
	feed: Arc<dyn TradeFeed>,
	// key -> refresh in progress, only used when single_flight is on
	inflight: Group<String, Vec<u8>, LeaderboardError>,
	single_flight: bool,
}

impl LeaderboardService {
	pub fn new(cache: Arc<dyn CacheStore>, feed: Arc<dyn TradeFeed>, single_flight: bool) -> Self {
		Self { cache, feed, inflight: Group::new(), single_flight }
	}

	/// Global top board across all symbols, as a JSON array
	pub async fn global(&self) -> Result<Vec<u8>, LeaderboardError> {
		self.serve(None).await
	}

	/// Top board of one symbol. The symbol is validated before the cache is consulted.
	pub async fn by_symbol(&self, symbol: &str) -> Result<Vec<u8>, LeaderboardError> {
		let symbol = validate_symbol(symbol)?;
		self.serve(Some(symbol)).await
	}

	async fn serve(&self, symbol: Option<&'static str>) -> Result<Vec<u8>, LeaderboardError> {
		let key = leaderboard_key(symbol);

		if let Some(payload) = self.cached(&key)? {
			return Ok(payload);
		}

		info!("Cache miss, fetching leaderboard {} from trade feed", key);
		if !self.single_flight {
			return self.refresh(&key, symbol).await;
		}

		match self.inflight.work(&key, self.refresh(&key, symbol)).await {
			Ok(payload) => Ok(payload),
			Err(Some(e)) => Err(e),
			// leader failed or was dropped, followers only learn that it did not finish
			Err(None) => Err(LeaderboardError::InflightAborted(key)),
		}
	}

	fn cached(&self, key: &str) -> Result<Option<Vec<u8>>, LeaderboardError> {
		match self.cache.get(key) {
			CacheLookup::Found(payload) => {
				serde_json::from_slice::<Vec<TradeRecord>>(&payload)?;
				info!("Cache hit, serving leaderboard {} from cache", key);
				Ok(Some(payload))
			}
			CacheLookup::NotFound => Ok(None),
			CacheLookup::Failed(e) => Err(LeaderboardError::CacheRead(e)),
		}
	}

	async fn refresh(&self, key: &str, symbol: Option<&str>) -> Result<Vec<u8>, LeaderboardError> {
		let records = self.feed.fetch_all().await?;
		let fetched = records.len();

		let board = ranking::rank(records, symbol);
		let payload = serde_json::to_vec(&board)?;
		self.cache.set(key, payload.clone()).map_err(LeaderboardError::CacheWrite)?;

		info!("Cached leaderboard {}: {} of {} fetched records", key, board.len(), fetched);
		Ok(payload)
	}
}

/// Empty symbol is a bad request, anything outside the supported set is unsupported
pub fn validate_symbol(symbol: &str) -> Result<&'static str, LeaderboardError> {
	if symbol.is_empty() {
		return Err(LeaderboardError::EmptySymbol);
	}
	common::model::supported_symbol(symbol).ok_or_else(|| LeaderboardError::UnsupportedSymbol(symbol.to_string()))
}
