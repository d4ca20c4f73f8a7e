pub mod config;
pub mod types;
pub mod feed;
pub mod arbitrage;
pub mod bot;

pub use config::Config;
pub use types::*;
