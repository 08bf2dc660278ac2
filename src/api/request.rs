use crate::models::{
    MarketFilter, MarketProjection, MatchProjection, Params, PriceData, PriceProjection,
};

/// The list operations of the betting API group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListCompetitions,
    ListCountries,
    ListEvents,
    ListEventTypes,
    ListMarketBook,
    ListMarketCatalogue,
    ListMarketTypes,
}

/// Parameters an operation always sends, whatever the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProjection {
    pub price_data: &'static [PriceData],
    pub match_projection: Option<MatchProjection>,
    pub market_projection: &'static [MarketProjection],
}

impl FixedProjection {
    const NONE: FixedProjection = FixedProjection {
        price_data: &[],
        match_projection: None,
        market_projection: &[],
    };
}

// Every fixed override lives here.
const MARKET_BOOK: FixedProjection = FixedProjection {
    price_data: &[PriceData::ExBestOffers],
    match_projection: Some(MatchProjection::NoRollup),
    market_projection: &[],
};

const MARKET_CATALOGUE: FixedProjection = FixedProjection {
    price_data: &[],
    match_projection: None,
    market_projection: &[
        MarketProjection::RunnerMetadata,
        MarketProjection::Event,
        MarketProjection::MarketStartTime,
        MarketProjection::MarketDescription,
    ],
};

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::ListCompetitions,
        Operation::ListCountries,
        Operation::ListEvents,
        Operation::ListEventTypes,
        Operation::ListMarketBook,
        Operation::ListMarketCatalogue,
        Operation::ListMarketTypes,
    ];

    /// Remote method name.
    pub fn method(&self) -> &'static str {
        match self {
            Operation::ListCompetitions => "listCompetitions",
            Operation::ListCountries => "listCountries",
            Operation::ListEvents => "listEvents",
            Operation::ListEventTypes => "listEventTypes",
            Operation::ListMarketBook => "listMarketBook",
            Operation::ListMarketCatalogue => "listMarketCatalogue",
            Operation::ListMarketTypes => "listMarketTypes",
        }
    }

    pub fn fixed(&self) -> FixedProjection {
        match self {
            Operation::ListMarketBook => MARKET_BOOK,
            Operation::ListMarketCatalogue => MARKET_CATALOGUE,
            _ => FixedProjection::NONE,
        }
    }

    /// Whether the operation is driven by a market filter rather than ids.
    pub fn takes_filter(&self) -> bool {
        !matches!(self, Operation::ListMarketBook)
    }
}

impl Params {
    /// Envelope with only the operation's fixed projections set.
    pub fn for_operation(op: Operation) -> Self {
        let fixed = op.fixed();
        let mut params = Params::default();

        if !fixed.price_data.is_empty() {
            params.price_projection = Some(PriceProjection::with_price_data(fixed.price_data));
        }
        params.match_projection = fixed.match_projection;
        params.market_projection = fixed.market_projection.to_vec();
        params
    }

    /// Envelope for a filter-driven operation.
    ///
    /// A missing filter is sent as an empty one, so `None` and
    /// `Some(MarketFilter::default())` produce the same body.
    pub fn for_filter(op: Operation, filter: Option<MarketFilter>) -> Self {
        let mut params = Self::for_operation(op);
        params.filter = Some(filter.unwrap_or_default());
        params
    }

    /// Envelope for an operation addressed by explicit market ids.
    pub fn for_market_ids(op: Operation, market_ids: Vec<String>) -> Self {
        let mut params = Self::for_operation(op);
        params.market_ids = market_ids;
        params
    }

    pub fn for_catalogue(filter: Option<MarketFilter>, max_results: u32) -> Self {
        let mut params = Self::for_filter(Operation::ListMarketCatalogue, filter);
        params.max_results = Some(max_results);
        params
    }
}
