use {
	common::{consts::TRADING_INFO_BATCH_SIZE, logging::LoggingConfig},
	config::{Config, File},
	serde::{Deserialize, Serialize},
	tokio::sync::OnceCell,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TradingInfoConfig {
	pub logging: LoggingConfig,
	pub server: ServerConfig,
	pub feed: FeedConfig,
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
pub struct FeedConfig {
	// records per /tradinginfo response
	#[serde(default = "default_batch_size")]
	pub batch_size: usize,
}

fn default_batch_size() -> usize {
	TRADING_INFO_BATCH_SIZE
}

pub static CONFIG: OnceCell<TradingInfoConfig> = OnceCell::const_new();

pub fn load_config(config_path: &str) -> anyhow::Result<()> {
	let run_mode = &common::common_env::get_common_env().run_mode;

	let config = Config::builder().add_source(File::with_name(&format!("{}/{}", config_path, run_mode)).required(true)).build()?;

	let tradinginfo_config: TradingInfoConfig = config.try_deserialize()?;
	println!("Configuration loaded for mode: {}", run_mode);
	println!("Configuration: {:?}", tradinginfo_config);
	CONFIG.set(tradinginfo_config)?;
	check_config()?;
	Ok(())
}

fn check_config() -> anyhow::Result<()> {
	let config = get_config();
	config.logging.check()?;
	if config.feed.batch_size == 0 {
		return Err(anyhow::anyhow!("Feed batch_size must be greater than 0"));
	}
	Ok(())
}

pub fn get_config() -> &'static TradingInfoConfig {
	CONFIG.get().expect("Config not loaded")
}
