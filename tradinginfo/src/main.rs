use {tracing::info, tradinginfo::init};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let state = init::init_all().await?;

	let config = tradinginfo::config::get_config();
	let addr = config.server.get_addr();
	let listener = tokio::net::TcpListener::bind(&addr).await?;
	info!("Trading info feed is running at {} (batch size {})", listener.local_addr()?, state.batch_size);

	let app = tradinginfo::server::app(state);

	axum::serve(listener, app).with_graceful_shutdown(common::graceful::shutdown_signal()).await?;

	info!("Trading info feed stopped");
	Ok(())
}
