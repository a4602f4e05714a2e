use serde::{Deserialize, Serialize};

/// Symbols the feed produces and the leaderboard accepts, in feed order.
pub const SUPPORTED_SYMBOLS: [&str; 10] = ["BTC", "ETH", "LTC", "XRP", "BCH", "EOS", "XLM", "ADA", "TRX", "XMR"];

/// One trade as published by the tradinginfo feed.
///
/// The field names on the wire are fixed by the feed (`StockSymbol`, `Price`,
/// `LastUpdated`, `TraderName`). `last_updated` is informational only and is never
/// used for ordering or freshness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
	#[serde(rename = "StockSymbol")]
	pub symbol: String,
	#[serde(rename = "Price")]
	pub price: f64,
	#[serde(rename = "LastUpdated")]
	pub last_updated: i64, //unix seconds
	#[serde(rename = "TraderName")]
	pub trader_name: String,
}

impl TradeRecord {
	pub fn new(symbol: impl Into<String>, price: f64, last_updated: i64, trader_name: impl Into<String>) -> Self {
		Self { symbol: symbol.into(), price, last_updated, trader_name: trader_name.into() }
	}
}

/// Returns the canonical `&'static str` for a supported symbol, `None` otherwise.
/// Matching is exact and case sensitive.
pub fn supported_symbol(symbol: &str) -> Option<&'static str> {
	SUPPORTED_SYMBOLS.iter().copied().find(|s| *s == symbol)
}

pub fn is_supported_symbol(symbol: &str) -> bool {
	supported_symbol(symbol).is_some()
}
