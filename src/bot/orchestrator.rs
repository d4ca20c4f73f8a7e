use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    arbitrage::{ArbitrageEvaluator, BestPriceSelector},
    bot::report,
    config::Config,
    feed::{create_provider, OddsProvider},
    types::{ArbitrageResult, OddsSnapshot},
};

/// Runs the odds-analysis pipeline over one fetched batch of events.
pub struct ArbitrageBot {
    provider: Box<dyn OddsProvider>,
    selector: BestPriceSelector,
    evaluator: ArbitrageEvaluator,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    pub events_seen: usize,
    pub events_failed: usize,
    pub events_without_odds: usize,
    pub opportunities_found: usize,
}

impl ArbitrageBot {
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing arbitrage scanner");

        let provider = create_provider(&config.api)?;
        let selector = BestPriceSelector::new(config.arbitrage.market_index);
        let evaluator = ArbitrageEvaluator::new(config.arbitrage.total_stake)?;

        Ok(Self {
            provider,
            selector,
            evaluator,
        })
    }

    pub fn with_provider(
        provider: Box<dyn OddsProvider>,
        selector: BestPriceSelector,
        evaluator: ArbitrageEvaluator,
    ) -> Self {
        Self {
            provider,
            selector,
            evaluator,
        }
    }

    /// Fetches the current batch of events and evaluates each one inside a
    /// per-event error boundary: a malformed payload or invalid price is
    /// logged and skipped, and the rest of the batch continues.
    pub async fn run(&self) -> Result<ScanSummary> {
        let fetch = self
            .provider
            .fetch_events()
            .await
            .with_context(|| format!("Failed to fetch odds from {}", self.provider.name()))?;

        println!("{}", report::render_quota(&fetch.quota));

        let mut summary = ScanSummary::default();

        for (index, payload) in fetch.events.iter().enumerate() {
            let position = index + 1;
            summary.events_seen += 1;

            match self.process_event(payload) {
                Ok((snapshot, Some(result))) => {
                    if result.is_arbitrage {
                        summary.opportunities_found += 1;
                        info!(
                            "Arbitrage opportunity {} on {}: guaranteed profit {:.2}",
                            result.id, snapshot, result.guaranteed_profit
                        );
                    }
                    println!("{}", report::render_event(position, &snapshot, Some(&result)));
                }
                Ok((snapshot, None)) => {
                    debug!("No odds available for {}", snapshot);
                    summary.events_without_odds += 1;
                    println!("{}", report::render_event(position, &snapshot, None));
                }
                Err(e) => {
                    summary.events_failed += 1;
                    warn!("Skipping event #{}: {:#}", position, e);
                }
            }
        }

        println!("{}", report::render_summary(&summary));

        info!(
            "Scan complete: {} events, {} opportunities, {} without odds, {} failed",
            summary.events_seen,
            summary.opportunities_found,
            summary.events_without_odds,
            summary.events_failed
        );

        Ok(summary)
    }

    fn process_event(
        &self,
        payload: &serde_json::Value,
    ) -> Result<(OddsSnapshot, Option<ArbitrageResult>)> {
        let snapshot = OddsSnapshot::from_value(payload)?;
        let best_odds = self.selector.select_best(&snapshot);
        let result = self.evaluator.evaluate(&best_odds)?;
        Ok((snapshot, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{OddsFetch, RequestQuota};
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct StubProvider {
        events: Vec<Value>,
    }

    #[async_trait]
    impl OddsProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn fetch_events(&self) -> Result<OddsFetch> {
            Ok(OddsFetch {
                events: self.events.clone(),
                quota: RequestQuota::default(),
            })
        }
    }

    fn create_event(bookmakers: Value) -> Value {
        json!({
            "home_team": "Arsenal",
            "away_team": "Chelsea",
            "commence_time": "2026-08-15T14:00:00Z",
            "bookmakers": bookmakers
        })
    }

    fn create_bot(events: Vec<Value>) -> ArbitrageBot {
        ArbitrageBot::with_provider(
            Box::new(StubProvider { events }),
            BestPriceSelector::default(),
            ArbitrageEvaluator::default(),
        )
    }

    #[tokio::test]
    async fn test_run_evaluates_batch_with_per_event_isolation() {
        let arbitrage_event = create_event(json!([
            { "title": "BookA", "markets": [ { "outcomes": [
                { "name": "Home", "price": 2.5 },
                { "name": "Draw", "price": 3.6 },
                { "name": "Away", "price": 4.2 }
            ] } ] }
        ]));
        let no_arbitrage_event = create_event(json!([
            { "title": "BookA", "markets": [ { "outcomes": [
                { "name": "Home", "price": 2.1 },
                { "name": "Draw", "price": 3.4 },
                { "name": "Away", "price": 4.0 }
            ] } ] }
        ]));
        let malformed_event = json!({ "home_team": "Leeds" });
        let no_odds_event = create_event(json!([]));

        let bot = create_bot(vec![
            arbitrage_event,
            malformed_event,
            no_arbitrage_event,
            no_odds_event,
        ]);

        let summary = bot.run().await.unwrap();
        assert_eq!(summary.events_seen, 4);
        assert_eq!(summary.events_failed, 1);
        assert_eq!(summary.events_without_odds, 1);
        assert_eq!(summary.opportunities_found, 1);
    }

    #[tokio::test]
    async fn test_invalid_price_fails_only_that_event() {
        let bad_price_event = create_event(json!([
            { "title": "BookA", "markets": [ { "outcomes": [
                { "name": "Home", "price": -2.0 },
                { "name": "Away", "price": 3.0 }
            ] } ] }
        ]));
        let good_event = create_event(json!([
            { "title": "BookA", "markets": [ { "outcomes": [
                { "name": "Home", "price": 2.0 },
                { "name": "Away", "price": 2.0 }
            ] } ] }
        ]));

        let bot = create_bot(vec![bad_price_event, good_event]);

        let summary = bot.run().await.unwrap();
        assert_eq!(summary.events_seen, 2);
        assert_eq!(summary.events_failed, 1);
        assert_eq!(summary.opportunities_found, 0);
    }

    #[tokio::test]
    async fn test_bookmaker_without_markets_counts_as_no_odds() {
        let event = create_event(json!([ { "title": "BookA", "markets": [] } ]));
        let bot = create_bot(vec![event]);

        let summary = bot.run().await.unwrap();
        assert_eq!(summary.events_without_odds, 1);
        assert_eq!(summary.events_failed, 0);
    }
}
