//! Subset of the coin detail document the link pipeline consumes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::link_set::LinkSet;

/// Coin detail as returned by the market-data API. Fields other than these
/// (market data, tickers, descriptions, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinDetail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_links")]
    pub links: LinkSet,
}

fn nullable_links<'de, D>(deserializer: D) -> Result<LinkSet, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LinkSet>::deserialize(deserializer)?.unwrap_or_default())
}
