mod holding;
mod portfolio;

pub use holding::Holding;
pub use portfolio::{
    EnrichedHolding, PortfolioResponse, PortfolioSnapshot, PortfolioTotals, SectorSummary,
};
