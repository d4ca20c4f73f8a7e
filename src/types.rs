use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsSnapshot {
    pub home_team: String,
    pub away_team: String,
    pub commence_time: DateTime<Utc>,
    pub bookmakers: Vec<BookmakerQuote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmakerQuote {
    pub title: String,
    pub markets: Vec<MarketQuote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuote {
    pub outcomes: Vec<OutcomePrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomePrice {
    pub name: String,
    pub price: f64,
}

/// Best price found for one outcome and the bookmaker offering it.
#[derive(Debug, Clone, PartialEq)]
pub struct BestOddsRecord {
    pub outcome: String,
    pub price: f64,
    pub bookmaker: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StakeAllocation {
    pub outcome: String,
    pub stake: f64,
    pub price: f64,
    pub bookmaker: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArbitrageResult {
    pub id: Uuid,
    pub implied_probability_sum: f64,
    pub is_arbitrage: bool,
    pub allocations: Vec<StakeAllocation>,
    pub guaranteed_profit: f64,
}

impl OddsSnapshot {
    /// Decodes a single raw event payload. A missing required field fails
    /// with an error naming that field rather than producing a partial
    /// snapshot.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| anyhow!("Malformed event payload: {}", e))
    }
}

impl fmt::Display for OddsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home_team, self.away_team)
    }
}
