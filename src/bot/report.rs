use crate::{
    bot::orchestrator::ScanSummary,
    feed::RequestQuota,
    types::{ArbitrageResult, OddsSnapshot},
};

pub fn render_quota(quota: &RequestQuota) -> String {
    let counter = |value: Option<u64>| {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    };

    format!(
        "API credits used: {}\nAPI credits remaining: {}\n",
        counter(quota.used),
        counter(quota.remaining)
    )
}

/// Renders one event's report: label, start time, then the evaluation
/// outcome. `None` means the evaluator had no data for this event.
pub fn render_event(
    position: usize,
    snapshot: &OddsSnapshot,
    result: Option<&ArbitrageResult>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}. {}\n", position, snapshot));
    out.push_str(&format!(
        "   Start time: {}\n",
        snapshot.commence_time.to_rfc3339()
    ));

    match result {
        None => out.push_str("   No odds available for this event.\n"),
        Some(result) => {
            out.push_str(&format!(
                "   Implied probability sum: {}\n",
                result.implied_probability_sum
            ));

            if result.is_arbitrage {
                out.push_str("   Arbitrage opportunity detected!\n");
                for allocation in &result.allocations {
                    out.push_str(&format!(
                        "     Bet {:.2} on {} at {} ({})\n",
                        allocation.stake,
                        allocation.outcome,
                        allocation.price,
                        allocation.bookmaker
                    ));
                }
                out.push_str(&format!(
                    "   Guaranteed profit: {:.2}\n",
                    result.guaranteed_profit
                ));
            } else {
                out.push_str("   No arbitrage possible for this event.\n");
            }
        }
    }

    out.push_str(&"-".repeat(50));
    out
}

pub fn render_summary(summary: &ScanSummary) -> String {
    format!(
        "Scanned {} events: {} arbitrage opportunities, {} without odds, {} skipped",
        summary.events_seen,
        summary.opportunities_found,
        summary.events_without_odds,
        summary.events_failed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StakeAllocation;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn create_snapshot() -> OddsSnapshot {
        OddsSnapshot {
            home_team: "Arsenal".to_string(),
            away_team: "Chelsea".to_string(),
            commence_time: Utc.with_ymd_and_hms(2026, 8, 15, 14, 0, 0).unwrap(),
            bookmakers: Vec::new(),
        }
    }

    #[test]
    fn test_render_quota() {
        let rendered = render_quota(&RequestQuota {
            used: Some(42),
            remaining: None,
        });
        assert!(rendered.contains("API credits used: 42"));
        assert!(rendered.contains("API credits remaining: N/A"));
    }

    #[test]
    fn test_render_event_with_arbitrage() {
        let result = ArbitrageResult {
            id: Uuid::new_v4(),
            implied_probability_sum: 0.9159,
            is_arbitrage: true,
            allocations: vec![StakeAllocation {
                outcome: "Home".to_string(),
                stake: 43.67,
                price: 2.5,
                bookmaker: "BookA".to_string(),
            }],
            guaranteed_profit: 9.19,
        };

        let rendered = render_event(1, &create_snapshot(), Some(&result));
        assert!(rendered.contains("1. Arsenal vs Chelsea"));
        assert!(rendered.contains("Start time: 2026-08-15T14:00:00+00:00"));
        assert!(rendered.contains("Implied probability sum: 0.9159"));
        assert!(rendered.contains("Arbitrage opportunity detected!"));
        assert!(rendered.contains("Bet 43.67 on Home at 2.5 (BookA)"));
        assert!(rendered.contains("Guaranteed profit: 9.19"));
    }

    #[test]
    fn test_render_event_without_arbitrage() {
        let result = ArbitrageResult {
            id: Uuid::new_v4(),
            implied_probability_sum: 1.0203,
            is_arbitrage: false,
            allocations: Vec::new(),
            guaranteed_profit: 0.0,
        };

        let rendered = render_event(2, &create_snapshot(), Some(&result));
        assert!(rendered.contains("No arbitrage possible for this event."));
        assert!(!rendered.contains("Guaranteed profit"));
    }

    #[test]
    fn test_render_event_without_odds() {
        let rendered = render_event(3, &create_snapshot(), None);
        assert!(rendered.contains("No odds available for this event."));
    }

    #[test]
    fn test_render_summary() {
        let rendered = render_summary(&ScanSummary {
            events_seen: 10,
            events_failed: 1,
            events_without_odds: 2,
            opportunities_found: 3,
        });
        assert_eq!(
            rendered,
            "Scanned 10 events: 3 arbitrage opportunities, 2 without odds, 1 skipped"
        );
    }
}
