// Synthetic trade feed used as the leaderboard's upstream in development

pub mod config;
pub mod generator;
pub mod init;
pub mod server;
