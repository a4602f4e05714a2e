use {
	chrono::Utc,
	common::model::{SUPPORTED_SYMBOLS, TradeRecord},
};

const MIN_PRICE: f64 = 1.0;
const MAX_PRICE: f64 = 1000.0;

const FIRST_NAMES: &[&str] = &[
	"Ada", "Alan", "Amara", "Bruno", "Carmen", "Chen", "Dmitri", "Elena", "Farah", "Gustav", "Hana", "Ibrahim", "Jonas", "Keiko", "Lucia", "Mateo", "Nadia", "Omar", "Priya",
	"Quentin", "Rosa", "Sven", "Tariq", "Uma", "Viktor", "Wen", "Ximena", "Yusuf", "Zara",
];

const LAST_NAMES: &[&str] = &[
	"Abbott", "Bianchi", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Haddad", "Ivanova", "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Petrov",
	"Quinn", "Rossi", "Schmidt", "Tanaka", "Ueda", "Varga", "Weber", "Xu", "Yilmaz", "Zhang",
];

/// Generates a fresh batch of trades, every call is independent of the previous one.
/// Symbols are uniform over the supported set, prices uniform in [1, 1000] rounded to cents.
pub fn generate_trades(count: usize) -> Vec<TradeRecord> {
	let mut rng = fastrand::Rng::new();
	generate_trades_with(&mut rng, count)
}

/// Same as `generate_trades` with a caller supplied generator, seed it for reproducible batches
pub fn generate_trades_with(rng: &mut fastrand::Rng, count: usize) -> Vec<TradeRecord> {
	let now = Utc::now().timestamp();
	(0..count).map(|_| random_trade(rng, now)).collect()
}

fn random_trade(rng: &mut fastrand::Rng, now: i64) -> TradeRecord {
	let symbol = SUPPORTED_SYMBOLS[rng.usize(..SUPPORTED_SYMBOLS.len())];
	let price = ((MIN_PRICE + rng.f64() * (MAX_PRICE - MIN_PRICE)) * 100.0).round() / 100.0;
	let trader_name = format!("{} {}", FIRST_NAMES[rng.usize(..FIRST_NAMES.len())], LAST_NAMES[rng.usize(..LAST_NAMES.len())]);
	TradeRecord::new(symbol, price, now, trader_name)
}
