use anyhow::Result;
use odds_arbitrage_bot::{bot::ArbitrageBot, config::Config};
use tracing::{error, info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting odds arbitrage scanner");

    // Load configuration
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Configuration loaded successfully");

    let bot = ArbitrageBot::new(config).map_err(|e| {
        error!("Failed to initialize scanner: {}", e);
        e
    })?;

    // Handle graceful shutdown
    let shutdown_signal = tokio::signal::ctrl_c();

    tokio::select! {
        result = bot.run() => {
            match result {
                Ok(_) => info!("Scan completed successfully"),
                Err(e) => error!("Scan error: {}", e),
            }
        }
        _ = shutdown_signal => {
            info!("Shutdown signal received");
        }
    }

    info!("Odds arbitrage scanner shutdown complete");
    Ok(())
}
