use {
	common::{consts::DEFAULT_CACHE_TTL_SECS, logging::LoggingConfig},
	config::{Config, File},
	serde::{Deserialize, Serialize},
	std::time::Duration,
	tokio::sync::OnceCell,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeaderboardConfig {
	pub logging: LoggingConfig,
	pub server: ServerConfig,
	pub cache: CacheConfig,
	pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
	pub port: u16,
}

impl ServerConfig {
	pub fn get_addr(&self) -> String {
		format!("0.0.0.0:{}", self.port)
	}
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
	#[serde(default = "default_ttl_secs")]
	pub ttl_secs: u64,
	pub purge_interval_secs: u64,
	pub max_entry_bytes: usize,
	// collapse concurrent misses on the same key into one upstream fetch
	pub single_flight: bool,
}

fn default_ttl_secs() -> u64 {
	DEFAULT_CACHE_TTL_SECS
}

impl CacheConfig {
	pub fn ttl(&self) -> Duration {
		Duration::from_secs(self.ttl_secs)
	}

	pub fn purge_interval(&self) -> Duration {
		Duration::from_secs(self.purge_interval_secs)
	}

	pub fn check(&self) -> anyhow::Result<()> {
		if self.ttl_secs == 0 {
			return Err(anyhow::anyhow!("Cache ttl_secs must be greater than 0"));
		}
		if self.purge_interval_secs == 0 {
			return Err(anyhow::anyhow!("Cache purge_interval_secs must be greater than 0"));
		}
		if self.max_entry_bytes == 0 {
			return Err(anyhow::anyhow!("Cache max_entry_bytes must be greater than 0"));
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
	pub timeout_secs: u64,
	pub connect_timeout_secs: u64,
}

impl UpstreamConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	pub fn connect_timeout(&self) -> Duration {
		Duration::from_secs(self.connect_timeout_secs)
	}

	pub fn check(&self) -> anyhow::Result<()> {
		if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
			return Err(anyhow::anyhow!("Upstream timeouts must be greater than 0"));
		}
		if self.connect_timeout_secs > self.timeout_secs {
			return Err(anyhow::anyhow!("Upstream connect_timeout_secs must not exceed timeout_secs"));
		}
		Ok(())
	}
}

pub static CONFIG: OnceCell<LeaderboardConfig> = OnceCell::const_new();

pub fn load_config(config_path: &str) -> anyhow::Result<()> {
	let run_mode = &common::common_env::get_common_env().run_mode;

	let config = Config::builder().add_source(File::with_name(&format!("{}/{}", config_path, run_mode)).required(true)).build()?;

	let leaderboard_config: LeaderboardConfig = config.try_deserialize()?;
	println!("Configuration loaded for mode: {}", run_mode);
	println!("Configuration: {:?}", leaderboard_config);
	CONFIG.set(leaderboard_config)?;
	check_config()?;
	Ok(())
}

fn check_config() -> anyhow::Result<()> {
	let config = get_config();
	config.logging.check()?;
	config.cache.check()?;
	config.upstream.check()?;
	Ok(())
}

pub fn get_config() -> &'static LeaderboardConfig {
	CONFIG.get().expect("Config not loaded")
}
