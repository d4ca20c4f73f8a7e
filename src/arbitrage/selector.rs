use tracing::debug;

use crate::types::{BestOddsRecord, OddsSnapshot};

/// Selects the best available price per outcome across all bookmakers in a
/// snapshot.
pub struct BestPriceSelector {
    market_index: usize,
}

impl BestPriceSelector {
    /// `market_index` names which of each bookmaker's markets is considered
    /// authoritative (head-to-head lives at index 0 in the feed's payloads).
    pub fn new(market_index: usize) -> Self {
        Self { market_index }
    }

    /// Returns one record per distinct outcome name, in first-seen order.
    /// A bookmaker without a market at the configured index contributes no
    /// prices. Equal prices never replace an existing record, so ties keep
    /// the bookmaker appearing earlier in quote order.
    pub fn select_best(&self, snapshot: &OddsSnapshot) -> Vec<BestOddsRecord> {
        let mut best: Vec<BestOddsRecord> = Vec::new();

        for bookmaker in &snapshot.bookmakers {
            let market = match bookmaker.markets.get(self.market_index) {
                Some(market) => market,
                None => {
                    debug!(
                        "Bookmaker {} has no market at index {}, skipping",
                        bookmaker.title, self.market_index
                    );
                    continue;
                }
            };

            for outcome in &market.outcomes {
                match best.iter_mut().find(|r| r.outcome == outcome.name) {
                    Some(record) => {
                        if outcome.price > record.price {
                            record.price = outcome.price;
                            record.bookmaker = bookmaker.title.clone();
                        }
                    }
                    None => best.push(BestOddsRecord {
                        outcome: outcome.name.clone(),
                        price: outcome.price,
                        bookmaker: bookmaker.title.clone(),
                    }),
                }
            }
        }

        best
    }

    pub fn market_index(&self) -> usize {
        self.market_index
    }
}

impl Default for BestPriceSelector {
    fn default() -> Self {
        Self::new(0)
    }
}
