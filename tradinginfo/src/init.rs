use {
	crate::{
		config::{get_config, load_config},
		server::FeedState,
	},
	common::common_env,
};

pub async fn init_all() -> anyhow::Result<FeedState> {
	common_env::load_common_env()?;
	load_config(common::consts::TRADINGINFO_CONFIG_PATH)?;
	common::logging::init_logging(&get_config().logging)?;
	Ok(FeedState { batch_size: get_config().feed.batch_size })
}
