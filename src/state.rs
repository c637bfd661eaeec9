use std::sync::Arc;

use crate::models::Holding;
use crate::services::enrichment_service::Enricher;

#[derive(Clone)]
pub struct AppState {
    /// Immutable holdings list, loaded once at startup.
    pub holdings: Arc<Vec<Holding>>,
    pub enricher: Arc<Enricher>,
}
