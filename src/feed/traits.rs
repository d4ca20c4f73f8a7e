use anyhow::Result;
use async_trait::async_trait;

/// Usage-quota counters surfaced by the odds service alongside a payload.
/// Either counter may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestQuota {
    pub used: Option<u64>,
    pub remaining: Option<u64>,
}

/// One fetch from the odds service: the raw event payloads plus the quota
/// counters. Events stay undecoded so a malformed one can be skipped
/// without failing the batch.
#[derive(Debug, Clone)]
pub struct OddsFetch {
    pub events: Vec<serde_json::Value>,
    pub quota: RequestQuota,
}

#[async_trait]
pub trait OddsProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_events(&self) -> Result<OddsFetch>;
}
