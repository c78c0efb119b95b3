use std::sync::Arc;

use solace_instruments::catalog::Catalog;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Number of check-ins charted when the request gives no `limit`.
    pub chart_limit: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, chart_limit: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            chart_limit,
        }
    }
}
