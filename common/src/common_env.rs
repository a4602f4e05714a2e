use {
	crate::consts::COMMON_ENV_PATH,
	config::{Config, Environment},
	serde::{Deserialize, Serialize},
	tokio::sync::OnceCell,
	url::Url,
};

/// Process environment shared by every service in the workspace
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommonEnv {
	pub run_mode: String,
	// Full URL of the upstream trade feed, e.g. http://127.0.0.1:9090/tradinginfo
	// Only the leaderboard needs it, see `require_trading_info_url`
	pub trading_info_url: Option<String>,
}

pub static COMMON_ENV: OnceCell<CommonEnv> = OnceCell::const_new();

pub fn load_common_env() -> anyhow::Result<()> {
	// deploy/common.env is optional, plain environment variables work as well
	if let Err(e) = dotenvy::from_path(COMMON_ENV_PATH) {
		if !e.not_found() {
			return Err(anyhow::anyhow!("Failed to load {}: {}", COMMON_ENV_PATH, e));
		}
	}

	let config = Config::builder().add_source(Environment::default()).build()?;
	let common_env: CommonEnv = config.try_deserialize()?;
	println!("Common env configuration: {:?}", common_env);
	COMMON_ENV.set(common_env)?;
	check_common_env()?;
	Ok(())
}

pub fn check_common_env() -> anyhow::Result<()> {
	let common_env = get_common_env();
	crate::consts::validate_run_mode(&common_env.run_mode)?;
	if let Some(url) = common_env.trading_info_url.as_deref() {
		validate_trading_info_url(url)?;
	}
	Ok(())
}

/// The feed URL, or a startup error naming the missing variable
pub fn require_trading_info_url() -> anyhow::Result<&'static str> {
	match get_common_env().trading_info_url.as_deref() {
		Some(url) => Ok(url),
		None => Err(anyhow::anyhow!("TRADING_INFO_URL is not set, the leaderboard cannot reach the trade feed")),
	}
}

pub fn validate_trading_info_url(url: &str) -> anyhow::Result<()> {
	if url.trim().is_empty() {
		return Err(anyhow::anyhow!("TRADING_INFO_URL is empty"));
	}
	let parsed = Url::parse(url).map_err(|e| anyhow::anyhow!("TRADING_INFO_URL {:?} is not a valid URL: {}", url, e))?;
	match parsed.scheme() {
		"http" | "https" => Ok(()),
		scheme => Err(anyhow::anyhow!("TRADING_INFO_URL must use http or https, got {}", scheme)),
	}
}

pub fn get_common_env() -> &'static CommonEnv {
	COMMON_ENV.get().expect("Common env not loaded")
}
