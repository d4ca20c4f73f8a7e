use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::{debug, info};

use crate::{
    config::ApiConfig,
    feed::traits::{OddsFetch, OddsProvider, RequestQuota},
};

/// Client for The Odds API (the-odds-api.com). Returns one payload element
/// per upcoming event for the configured sport, quoting decimal odds.
pub struct OddsApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl OddsApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(anyhow!(
                "Odds API key is not configured (set ODDS_API_KEY or api.api_key)"
            ));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    fn odds_url(&self) -> String {
        format!(
            "{}/sports/{}/odds",
            self.config.base_url, self.config.sport_key
        )
    }
}

fn quota_from_headers(headers: &HeaderMap) -> RequestQuota {
    let parse_counter = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok())
    };

    RequestQuota {
        used: parse_counter("x-requests-used"),
        remaining: parse_counter("x-requests-remaining"),
    }
}

#[async_trait]
impl OddsProvider for OddsApiClient {
    fn name(&self) -> &str {
        "the-odds-api"
    }

    async fn fetch_events(&self) -> Result<OddsFetch> {
        let url = self.odds_url();
        debug!("Fetching odds from {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("regions", self.config.region.as_str()),
                ("markets", self.config.market.as_str()),
                ("oddsFormat", self.config.odds_format.as_str()),
                ("dateFormat", self.config.date_format.as_str()),
            ])
            .send()
            .await
            .map_err(|e| anyhow!("Odds API request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Odds API returned {}: {}", status, body));
        }

        let quota = quota_from_headers(response.headers());

        let events: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to decode odds response: {}", e))?;

        info!("Fetched {} events from {}", events.len(), self.name());

        Ok(OddsFetch { events, quota })
    }
}
