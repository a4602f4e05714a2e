pub const COMMON_ENV_PATH: &str = "./deploy/common.env";
pub const LEADERBOARD_CONFIG_PATH: &str = "./deploy/leaderboard";
pub const TRADINGINFO_CONFIG_PATH: &str = "./deploy/tradinginfo";

/// Maximum number of records in any leaderboard result set
pub const LEADERBOARD_SIZE: usize = 10;

/// Cache entry lifetime when `cache.ttl_secs` is absent from the config
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Feed simulator route, and its batch size when `feed.batch_size` is absent from the config
pub const TRADING_INFO_PATH: &str = "/tradinginfo";
pub const TRADING_INFO_BATCH_SIZE: usize = 1000;

/// Accepted RUN_MODE values, also the config file stem under deploy/<service>/
pub const RUN_MODE_DEV: &str = "dev";
pub const RUN_MODE_PROD: &str = "prod";

/// Rejects any RUN_MODE other than dev or prod
pub fn validate_run_mode(run_mode: &str) -> anyhow::Result<()> {
	match run_mode {
		RUN_MODE_DEV | RUN_MODE_PROD => Ok(()),
		_ => Err(anyhow::anyhow!("Invalid RUN_MODE: {}. Must be either '{}' or '{}'", run_mode, RUN_MODE_DEV, RUN_MODE_PROD)),
	}
}
