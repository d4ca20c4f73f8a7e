use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub arbitrage: ArbitrageConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub sport_key: String,
    pub api_key: String,
    pub region: String,
    pub market: String,
    pub odds_format: String,
    pub date_format: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ArbitrageConfig {
    pub total_stake: f64,
    pub market_index: usize,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut settings = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("ODDS"));

        // Override API key from environment if present
        if let Ok(api_key) = std::env::var("ODDS_API_KEY") {
            settings = settings.set_override("api.api_key", api_key)?;
        }

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }
}
