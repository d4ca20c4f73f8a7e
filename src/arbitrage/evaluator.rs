use anyhow::{anyhow, Result};
use tracing::debug;
use uuid::Uuid;

use crate::types::{ArbitrageResult, BestOddsRecord, StakeAllocation};

pub const DEFAULT_TOTAL_STAKE: f64 = 100.0;

/// Evaluates a best-odds mapping for an arbitrage opportunity and, when one
/// exists, computes the stake split that guarantees a profit.
pub struct ArbitrageEvaluator {
    total_stake: f64,
}

impl ArbitrageEvaluator {
    pub fn new(total_stake: f64) -> Result<Self> {
        if total_stake <= 0.0 {
            return Err(anyhow!(
                "Total stake must be positive, got {}",
                total_stake
            ));
        }
        Ok(Self { total_stake })
    }

    /// Returns `Ok(None)` when there is nothing to evaluate. A quoted price
    /// of zero or below is rejected before any division. The probability
    /// sum is rounded only in the reported field; the arbitrage test and
    /// the stake math use full precision.
    pub fn evaluate(&self, best_odds: &[BestOddsRecord]) -> Result<Option<ArbitrageResult>> {
        if best_odds.is_empty() {
            return Ok(None);
        }

        for record in best_odds {
            if record.price <= 0.0 {
                return Err(anyhow!(
                    "Invalid price {} for outcome '{}' from {}",
                    record.price,
                    record.outcome,
                    record.bookmaker
                ));
            }
        }

        let total_prob: f64 = best_odds.iter().map(|r| 1.0 / r.price).sum();
        let is_arbitrage = total_prob < 1.0;

        let mut allocations = Vec::new();
        let mut guaranteed_profit = 0.0;

        if is_arbitrage {
            let stakes = allocate_stakes(best_odds, total_prob, self.total_stake);

            for (record, stake) in best_odds.iter().zip(&stakes) {
                allocations.push(StakeAllocation {
                    outcome: record.outcome.clone(),
                    stake: round_to(*stake, 2),
                    price: record.price,
                    bookmaker: record.bookmaker.clone(),
                });
            }

            // Minimum return over the unrounded stakes; rounding applies to
            // the displayed figures only.
            let min_return = best_odds
                .iter()
                .zip(&stakes)
                .map(|(record, stake)| stake * record.price)
                .fold(f64::INFINITY, f64::min);
            guaranteed_profit = round_to(min_return - self.total_stake, 2);

            debug!(
                "Arbitrage found: probability sum {}, guaranteed profit {}",
                total_prob, guaranteed_profit
            );
        }

        Ok(Some(ArbitrageResult {
            id: Uuid::new_v4(),
            implied_probability_sum: round_to(total_prob, 4),
            is_arbitrage,
            allocations,
            guaranteed_profit,
        }))
    }

    pub fn total_stake(&self) -> f64 {
        self.total_stake
    }
}

impl Default for ArbitrageEvaluator {
    fn default() -> Self {
        Self {
            total_stake: DEFAULT_TOTAL_STAKE,
        }
    }
}

/// Splits `total_stake` across outcomes proportionally to their implied
/// probabilities, equalizing the payout across all of them.
fn allocate_stakes(best_odds: &[BestOddsRecord], total_prob: f64, total_stake: f64) -> Vec<f64> {
    best_odds
        .iter()
        .map(|record| (1.0 / record.price) / total_prob * total_stake)
        .collect()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
