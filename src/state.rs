//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It only
//! carries the backend API handle; every page view builds its own store, so no
//! collection data is shared between requests.

use std::sync::Arc;

use crate::api::PortalApi;

/// Clone is required by Axum; the API handle is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PortalApi>,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self { api }
    }
}
