use {
	async_trait::async_trait,
	common::model::TradeRecord,
	reqwest::Client,
	std::time::Duration,
	thiserror::Error,
	tracing::error,
};

#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
	/// Connection refused, timeout, or a non-success status from the feed
	#[error("Trade feed unavailable: {0}")]
	Unavailable(String),

	/// The feed answered but the body is not a list of trade records
	#[error("Trade feed returned a malformed response: {0}")]
	MalformedResponse(String),
}

/// Source of the complete current set of trades. One call is one upstream request,
/// implementations never retry.
#[async_trait]
pub trait TradeFeed: Send + Sync {
	async fn fetch_all(&self) -> Result<Vec<TradeRecord>, UpstreamError>;
}

/// `TradeFeed` over the tradinginfo HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpTradeFeed {
	client: Client,
	url: String,
}

impl HttpTradeFeed {
	pub fn new(url: &str, timeout: Duration, connect_timeout: Duration) -> anyhow::Result<Self> {
		common::common_env::validate_trading_info_url(url)?;
		let client = Client::builder().timeout(timeout).connect_timeout(connect_timeout).build()?;
		Ok(Self { client, url: url.to_string() })
	}

	pub fn url(&self) -> &str {
		&self.url
	}
}

#[async_trait]
impl TradeFeed for HttpTradeFeed {
	async fn fetch_all(&self) -> Result<Vec<TradeRecord>, UpstreamError> {
		let response = self.client.get(&self.url).send().await.map_err(|e| {
			error!("Failed to connect to trade feed {}: {}", self.url, e);
			UpstreamError::Unavailable(e.to_string())
		})?;

		let status = response.status();
		if !status.is_success() {
			error!("Trade feed {} answered with status {}", self.url, status);
			return Err(UpstreamError::Unavailable(format!("status {}", status)));
		}

		// body read failures (reset, timeout mid-body) are transport errors, not decode errors
		let body = response.bytes().await.map_err(|e| {
			error!("Failed to read trade feed body from {}: {}", self.url, e);
			UpstreamError::Unavailable(e.to_string())
		})?;

		serde_json::from_slice::<Vec<TradeRecord>>(&body).map_err(|e| {
			error!("Failed to decode trade feed body from {}: {}", self.url, e);
			UpstreamError::MalformedResponse(e.to_string())
		})
	}
}
