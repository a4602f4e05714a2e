use {leaderboard::init, tracing::info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let state = init::init_all().await?;

	let config = leaderboard::config::get_config();
	let addr = config.server.get_addr();
	let listener = tokio::net::TcpListener::bind(&addr).await?;
	info!("Leaderboard server is running at {}", listener.local_addr()?);

	let app = leaderboard::server::app(state);

	axum::serve(listener, app).with_graceful_shutdown(common::graceful::shutdown_signal()).await?;

	info!("Leaderboard service stopped");
	Ok(())
}
