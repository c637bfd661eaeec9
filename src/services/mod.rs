pub mod aggregation_service;
pub mod enrichment_service;
pub mod fundamentals_service;
pub mod portfolio_service;
pub mod price_service;
pub mod quote_cache;
