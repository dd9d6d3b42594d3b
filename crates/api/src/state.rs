//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::{BasketService, CountryService, CustomerService, ShippingService};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The domain services are injected as trait
/// objects so the HTTP surface never depends on a concrete implementation.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    customers: Arc<dyn CustomerService>,
    shipping: Arc<dyn ShippingService>,
    countries: Arc<dyn CountryService>,
    baskets: Arc<dyn BasketService>,
}

impl AppState {
    /// Create a new application state with injected collaborators.
    #[must_use]
    pub fn new(
        config: ApiConfig,
        customers: Arc<dyn CustomerService>,
        shipping: Arc<dyn ShippingService>,
        countries: Arc<dyn CountryService>,
        baskets: Arc<dyn BasketService>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                customers,
                shipping,
                countries,
                baskets,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get the customer service.
    #[must_use]
    pub fn customers(&self) -> &dyn CustomerService {
        self.inner.customers.as_ref()
    }

    /// Get the shipping profile service.
    #[must_use]
    pub fn shipping(&self) -> &dyn ShippingService {
        self.inner.shipping.as_ref()
    }

    /// Get the delivery country service.
    #[must_use]
    pub fn countries(&self) -> &dyn CountryService {
        self.inner.countries.as_ref()
    }

    /// Get the basket service.
    #[must_use]
    pub fn baskets(&self) -> &dyn BasketService {
        self.inner.baskets.as_ref()
    }
}
