//! Read-only snapshots returned by the betting API.
//!
//! Field names follow the exchange's camelCase schema. Unknown fields are
//! ignored; missing fields and explicit `null`s fall back to the default.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// The exchange sends `null` for unset fields; treat it like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Runner metadata carries `null` for absent attributes (e.g. `WEARING`).
fn null_values_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventType {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventTypeResult {
    pub event_type: Option<EventType>,
    #[serde(deserialize_with = "null_as_default")]
    pub market_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Competition {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitionResult {
    pub competition: Option<Competition>,
    #[serde(deserialize_with = "null_as_default")]
    pub market_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub competition_region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryCodeResult {
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub venue: String,
    pub open_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventResult {
    pub event: Option<Event>,
    #[serde(deserialize_with = "null_as_default")]
    pub market_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketTypeResult {
    #[serde(deserialize_with = "null_as_default")]
    pub market_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketStatus {
    Inactive,
    Open,
    Suspended,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunnerStatus {
    Active,
    Winner,
    Loser,
    Placed,
    RemovedVacant,
    Removed,
    Hidden,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Dynamic state of one market: status, prices, matched volume.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketBook {
    #[serde(deserialize_with = "null_as_default")]
    pub market_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_market_data_delayed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: MarketStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub bet_delay: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub bsp_reconciled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub complete: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub inplay: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_winners: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_runners: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_active_runners: u32,
    pub last_match_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_matched: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub total_available: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub cross_matching: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub runners_voidable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub runners: Vec<Runner>,
}

impl MarketBook {
    pub fn runner(&self, selection_id: i64) -> Option<&Runner> {
        self.runners.iter().find(|r| r.selection_id == selection_id)
    }
}

/// One selection's current tradability inside a [`MarketBook`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Runner {
    #[serde(deserialize_with = "null_as_default")]
    pub selection_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub handicap: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub status: RunnerStatus,
    pub last_price_traded: Option<Decimal>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_matched: Decimal,
    pub ex: Option<ExchangePrices>,
}

impl Runner {
    /// Best (highest) price available to back.
    pub fn best_back(&self) -> Option<&PriceSize> {
        self.ex.as_ref()?.available_to_back.first()
    }

    /// Best (lowest) price available to lay.
    pub fn best_lay(&self) -> Option<&PriceSize> {
        self.ex.as_ref()?.available_to_lay.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangePrices {
    #[serde(deserialize_with = "null_as_default")]
    pub available_to_back: Vec<PriceSize>,
    #[serde(deserialize_with = "null_as_default")]
    pub available_to_lay: Vec<PriceSize>,
    #[serde(deserialize_with = "null_as_default")]
    pub traded_volume: Vec<PriceSize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceSize {
    #[serde(deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub size: Decimal,
}

/// Static information about a selection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunnerCatalog {
    #[serde(deserialize_with = "null_as_default")]
    pub selection_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub runner_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub handicap: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub sort_priority: u32,
    #[serde(deserialize_with = "null_values_as_empty")]
    pub metadata: HashMap<String, String>,
}

/// Information about a market that rarely changes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketCatalogue {
    #[serde(deserialize_with = "null_as_default")]
    pub market_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market_name: String,
    pub market_start_time: Option<DateTime<Utc>>,
    pub description: Option<MarketDescription>,
    pub total_matched: Option<Decimal>,
    #[serde(deserialize_with = "null_as_default")]
    pub runners: Vec<RunnerCatalog>,
    pub event_type: Option<EventType>,
    pub competition: Option<Competition>,
    pub event: Option<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketDescription {
    #[serde(deserialize_with = "null_as_default")]
    pub persistence_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub bsp_market: bool,
    pub market_time: Option<DateTime<Utc>>,
    pub suspend_time: Option<DateTime<Utc>>,
    pub settle_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub betting_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub turn_in_play_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub market_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub regulator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market_base_rate: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub discount_allowed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub wallet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rules: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rules_has_date: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub clarifications: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_event_type_result_from_fixture() {
        let raw = r#"{"eventType":{"id":"1","name":"Soccer"},"marketCount":42}"#;
        let result: EventTypeResult = serde_json::from_str(raw).unwrap();

        let event_type = result.event_type.unwrap();
        assert_eq!(event_type.id, "1");
        assert_eq!(event_type.name, "Soccer");
        assert_eq!(result.market_count, 42);
    }

    #[test]
    fn test_unknown_fields_ignored_missing_defaulted() {
        let raw = r#"{"countryCode":"GB","somethingNew":true}"#;
        let result: CountryCodeResult = serde_json::from_str(raw).unwrap();

        assert_eq!(result.country_code, "GB");
        assert_eq!(result.market_count, 0);
    }

    #[test]
    fn test_market_book_with_prices() {
        let value = json!({
            "marketId": "1.123456",
            "isMarketDataDelayed": false,
            "status": "OPEN",
            "betDelay": 0,
            "inplay": true,
            "numberOfRunners": 2,
            "numberOfActiveRunners": 2,
            "lastMatchTime": "2024-05-01T12:34:56.000Z",
            "totalMatched": 1523.75,
            "version": 4862003245u64,
            "runners": [
                {
                    "selectionId": 47972,
                    "handicap": 0.0,
                    "status": "ACTIVE",
                    "lastPriceTraded": 2.02,
                    "totalMatched": 800.5,
                    "ex": {
                        "availableToBack": [
                            { "price": 2.0, "size": 150.25 },
                            { "price": 1.99, "size": 20.0 }
                        ],
                        "availableToLay": [{ "price": 2.04, "size": 33.1 }],
                        "tradedVolume": []
                    }
                },
                { "selectionId": 47973, "status": "REMOVED" }
            ]
        });

        let book: MarketBook = serde_json::from_value(value).unwrap();
        assert_eq!(book.market_id, "1.123456");
        assert_eq!(book.status, MarketStatus::Open);
        assert!(book.inplay);
        assert_eq!(book.total_matched, dec!(1523.75));
        assert_eq!(book.runners.len(), 2);

        let runner = book.runner(47972).unwrap();
        assert_eq!(runner.status, RunnerStatus::Active);
        assert_eq!(runner.last_price_traded, Some(dec!(2.02)));
        assert_eq!(
            runner.best_back(),
            Some(&PriceSize { price: dec!(2.0), size: dec!(150.25) })
        );
        assert_eq!(runner.best_lay().unwrap().price, dec!(2.04));

        let removed = book.runner(47973).unwrap();
        assert_eq!(removed.status, RunnerStatus::Removed);
        assert!(removed.ex.is_none());
        assert!(removed.best_back().is_none());
    }

    #[test]
    fn test_null_fields_take_default() {
        let raw = r#"{"event":{"id":"9","name":"X","countryCode":null,"venue":null,"openDate":null},"marketCount":null}"#;
        let result: EventResult = serde_json::from_str(raw).unwrap();

        let event = result.event.unwrap();
        assert_eq!(event.id, "9");
        assert_eq!(event.country_code, "");
        assert_eq!(event.venue, "");
        assert!(event.open_date.is_none());
        assert_eq!(result.market_count, 0);

        let description: MarketDescription = serde_json::from_value(json!({
            "marketType": "WIN",
            "regulator": null,
            "marketBaseRate": null,
            "bspMarket": null,
            "clarifications": null
        }))
        .unwrap();
        assert_eq!(description.market_type, "WIN");
        assert_eq!(description.regulator, "");
        assert_eq!(description.market_base_rate, Decimal::ZERO);
        assert!(!description.bsp_market);
        assert_eq!(description.clarifications, "");
    }

    #[test]
    fn test_null_runner_list_and_status() {
        let book: MarketBook =
            serde_json::from_str(r#"{"marketId":"1.3","status":null,"runners":null}"#).unwrap();
        assert_eq!(book.status, MarketStatus::Unknown);
        assert!(book.runners.is_empty());
    }

    #[test]
    fn test_null_metadata_values_become_empty() {
        let runner: RunnerCatalog = serde_json::from_str(
            r#"{"selectionId":1,"runnerName":"Nag","metadata":{"runnerId":"1","WEARING":null,"AGE":"5"}}"#,
        )
        .unwrap();

        assert_eq!(runner.metadata.len(), 3);
        assert_eq!(runner.metadata["runnerId"], "1");
        assert_eq!(runner.metadata["WEARING"], "");
        assert_eq!(runner.metadata["AGE"], "5");

        let bare: RunnerCatalog =
            serde_json::from_str(r#"{"selectionId":2,"metadata":null}"#).unwrap();
        assert!(bare.metadata.is_empty());
    }

    #[test]
    fn test_unrecognised_status_maps_to_unknown() {
        let book: MarketBook =
            serde_json::from_str(r#"{"marketId":"1.2","status":"PAUSED"}"#).unwrap();
        assert_eq!(book.status, MarketStatus::Unknown);
    }

    #[test]
    fn test_market_catalogue_from_fixture() {
        let value = json!({
            "marketId": "1.170000001",
            "marketName": "Match Odds",
            "marketStartTime": "2024-05-04T14:00:00.000Z",
            "description": {
                "persistenceEnabled": true,
                "bspMarket": false,
                "marketTime": "2024-05-04T14:00:00.000Z",
                "suspendTime": "2024-05-04T14:00:00.000Z",
                "bettingType": "ODDS",
                "turnInPlayEnabled": true,
                "marketType": "MATCH_ODDS",
                "regulator": "MALTA LOTTERIES AND GAMBLING AUTHORITY",
                "marketBaseRate": 5.0,
                "discountAllowed": true,
                "wallet": "UK wallet",
                "rulesHasDate": true
            },
            "runners": [
                {
                    "selectionId": 56323,
                    "runnerName": "Arsenal",
                    "handicap": 0.0,
                    "sortPriority": 1,
                    "metadata": { "runnerId": "56323" }
                }
            ],
            "event": {
                "id": "33000001",
                "name": "Arsenal v Chelsea",
                "countryCode": "GB",
                "timezone": "Europe/London",
                "openDate": "2024-05-04T14:00:00.000Z"
            }
        });

        let catalogue: MarketCatalogue = serde_json::from_value(value).unwrap();
        assert_eq!(catalogue.market_name, "Match Odds");
        assert!(catalogue.market_start_time.is_some());

        let description = catalogue.description.unwrap();
        assert_eq!(description.market_type, "MATCH_ODDS");
        assert_eq!(description.market_base_rate, dec!(5));
        assert!(description.settle_time.is_none());

        let runner = &catalogue.runners[0];
        assert_eq!(runner.runner_name, "Arsenal");
        assert_eq!(runner.metadata.get("runnerId").map(String::as_str), Some("56323"));

        let event = catalogue.event.unwrap();
        assert_eq!(event.country_code, "GB");
        assert_eq!(event.venue, "");
        assert!(catalogue.competition.is_none());
    }
}
