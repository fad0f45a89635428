//! Application State

use std::sync::Arc;

use farm_advisor::AdvisoryDesk;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Advisory desk (price table + LLM provider), read-only
    pub desk: Arc<AdvisoryDesk>,
}

impl AppState {
    pub fn new(desk: AdvisoryDesk) -> Self {
        Self {
            desk: Arc::new(desk),
        }
    }
}
