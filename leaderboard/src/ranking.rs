use {common::consts::LEADERBOARD_SIZE, common::model::TradeRecord, std::cmp::Ordering};

/// Top `LEADERBOARD_SIZE` records by price, highest first.
///
/// With a `symbol` only records of exactly that symbol are kept. Equal prices keep their
/// input order (`sort_by` is stable). Fewer matches than the board size simply yield a
/// shorter result, an empty input yields an empty board.
pub fn rank(records: Vec<TradeRecord>, symbol: Option<&str>) -> Vec<TradeRecord> {
	rank_top(records, symbol, LEADERBOARD_SIZE)
}

pub fn rank_top(records: Vec<TradeRecord>, symbol: Option<&str>, size: usize) -> Vec<TradeRecord> {
	let mut retained: Vec<TradeRecord> = match symbol {
		Some(symbol) => records.into_iter().filter(|record| record.symbol == symbol).collect(),
		None => records,
	};

	// 0.0 and -0.0 compare equal and keep their order
	retained.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
	retained.truncate(size);
	retained
}
