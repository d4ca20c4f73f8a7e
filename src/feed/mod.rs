pub mod odds_api;
pub mod traits;

pub use odds_api::OddsApiClient;
pub use traits::*;

use anyhow::Result;

use crate::config::ApiConfig;

pub fn create_provider(config: &ApiConfig) -> Result<Box<dyn OddsProvider>> {
    let client = OddsApiClient::new(config.clone())?;
    Ok(Box::new(client))
}
