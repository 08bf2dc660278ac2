//! List operations of the betting API group.

use crate::error::BettingError;
use crate::models::{
    CompetitionResult, CountryCodeResult, EventResult, EventTypeResult, MarketBook,
    MarketCatalogue, MarketFilter, MarketTypeResult, Params,
};
use crate::session::Session;
use crate::transport::Transport;

use super::dispatch::dispatch;
use super::request::Operation;

impl<X: Transport> Session<X> {
    /// Competitions (e.g. World Cup 2026) associated with the markets
    /// selected by the filter.
    pub async fn list_competitions(
        &self,
        filter: Option<MarketFilter>,
    ) -> Result<Vec<CompetitionResult>, BettingError> {
        let op = Operation::ListCompetitions;
        dispatch(self, op.method(), Params::for_filter(op, filter)).await
    }

    /// Countries associated with the markets selected by the filter.
    pub async fn list_countries(
        &self,
        filter: Option<MarketFilter>,
    ) -> Result<Vec<CountryCodeResult>, BettingError> {
        let op = Operation::ListCountries;
        dispatch(self, op.method(), Params::for_filter(op, filter)).await
    }

    /// Events (e.g. Reading v Man United) associated with the markets
    /// selected by the filter.
    pub async fn list_events(
        &self,
        filter: Option<MarketFilter>,
    ) -> Result<Vec<EventResult>, BettingError> {
        let op = Operation::ListEvents;
        dispatch(self, op.method(), Params::for_filter(op, filter)).await
    }

    /// Event types (i.e. sports) associated with the markets selected by the
    /// filter.
    pub async fn list_event_types(
        &self,
        filter: Option<MarketFilter>,
    ) -> Result<Vec<EventTypeResult>, BettingError> {
        let op = Operation::ListEventTypes;
        dispatch(self, op.method(), Params::for_filter(op, filter)).await
    }

    /// Dynamic data for the given markets: status, best offers, traded
    /// volume. Matched amounts are never rolled up.
    pub async fn list_market_book(
        &self,
        market_ids: Vec<String>,
    ) -> Result<Vec<MarketBook>, BettingError> {
        let op = Operation::ListMarketBook;
        dispatch(self, op.method(), Params::for_market_ids(op, market_ids)).await
    }

    /// Static market information: names, runners with metadata, event,
    /// start time and description. Subject to the exchange's market data
    /// request limits.
    pub async fn list_market_catalogue(
        &self,
        filter: Option<MarketFilter>,
        max_results: u32,
    ) -> Result<Vec<MarketCatalogue>, BettingError> {
        let op = Operation::ListMarketCatalogue;
        dispatch(self, op.method(), Params::for_catalogue(filter, max_results)).await
    }

    /// Market types (e.g. MATCH_ODDS, NEXT_GOAL) associated with the markets
    /// selected by the filter. These are the same in every locale.
    pub async fn list_market_types(
        &self,
        filter: Option<MarketFilter>,
    ) -> Result<Vec<MarketTypeResult>, BettingError> {
        let op = Operation::ListMarketTypes;
        dispatch(self, op.method(), Params::for_filter(op, filter)).await
    }
}
