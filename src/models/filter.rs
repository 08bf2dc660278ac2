use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interval of instants. Either bound may be left open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn since(from: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    pub fn until(to: DateTime<Utc>) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }
}

/// Sparse set of constraints narrowing which markets a query considers.
///
/// Every field is optional; an unset field means "no constraint on this
/// dimension". Nothing is validated locally, the exchange rejects filters
/// it does not like.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exchange_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_type_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub market_countries: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub market_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competition_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub market_type_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_start_time: Option<TimeRange>,
}

fn owned<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl MarketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_text_query(mut self, query: impl Into<String>) -> Self {
        self.text_query = Some(query.into());
        self
    }

    pub fn with_exchange_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exchange_ids = owned(ids);
        self
    }

    pub fn with_event_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_ids = owned(ids);
        self
    }

    pub fn with_event_type_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_type_ids = owned(ids);
        self
    }

    /// ISO 3166 country codes, e.g. `"GB"`.
    pub fn with_market_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.market_countries = owned(countries);
        self
    }

    pub fn with_market_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.market_ids = owned(ids);
        self
    }

    pub fn with_competition_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.competition_ids = owned(ids);
        self
    }

    /// Market type codes such as `"MATCH_ODDS"`.
    pub fn with_market_type_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.market_type_codes = owned(codes);
        self
    }

    pub fn with_market_start_time(mut self, range: TimeRange) -> Self {
        self.market_start_time = Some(range);
        self
    }
}
