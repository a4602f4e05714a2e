// Shared building blocks for the leaderboard and tradinginfo services

pub mod common_env;
pub mod consts;
pub mod graceful;
pub mod key;
pub mod logging;
pub mod model;
