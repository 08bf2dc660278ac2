use serde::{Deserialize, Serialize};

use super::filter::MarketFilter;

/// Which pricing detail a market snapshot should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceData {
    SpAvailable,
    SpTraded,
    ExBestOffers,
    ExAllOffers,
    ExTraded,
}

/// Selection of price fields to include in a market book.
///
/// Shapes the response payload; it does not filter which markets come back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceProjection {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_data: Vec<PriceData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtualise: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollover_stakes: Option<bool>,
}

impl PriceProjection {
    pub fn with_price_data(price_data: &[PriceData]) -> Self {
        Self {
            price_data: price_data.to_vec(),
            ..Self::default()
        }
    }
}

/// Catalogue sections to include alongside each market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketProjection {
    Competition,
    Event,
    EventType,
    MarketStartTime,
    MarketDescription,
    RunnerDescription,
    RunnerMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderProjection {
    All,
    Executable,
    ExecutionComplete,
}

/// How matched amounts are aggregated in a market book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchProjection {
    NoRollup,
    RolledUpByPrice,
    RolledUpByAvgPrice,
}

/// Request envelope for a single betting call.
///
/// Fields a method does not use stay unset and are left out of the body.
/// `locale` is filled in by the dispatcher from the session, never by the
/// builders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<MarketFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub market_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_projection: Option<PriceProjection>,
    /// `Some(0)` is sent as-is; only `None` is omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub market_projection: Vec<MarketProjection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_projection: Option<OrderProjection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_projection: Option<MatchProjection>,
}
