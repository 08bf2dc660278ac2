mod filter;
mod params;
mod results;

pub use filter::{MarketFilter, TimeRange};
pub use params::{
    MarketProjection, MatchProjection, OrderProjection, Params, PriceData, PriceProjection,
};
pub use results::{
    Competition, CompetitionResult, CountryCodeResult, Event, EventResult, EventType,
    EventTypeResult, ExchangePrices, MarketBook, MarketCatalogue, MarketDescription,
    MarketStatus, MarketTypeResult, PriceSize, Runner, RunnerCatalog, RunnerStatus,
};
