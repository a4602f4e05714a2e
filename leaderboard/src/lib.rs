// Leaderboard service library, the binary in main.rs wires these together

pub mod api_error;
pub mod cache;
pub mod config;
pub mod consts;
pub mod handlers;
pub mod init;
pub mod ranking;
pub mod server;
pub mod service;
pub mod upstream;
