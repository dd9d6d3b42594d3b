//! Domain service interfaces and reference implementations.
//!
//! Every collaborator the handlers depend on is a capability trait, injected
//! through [`crate::state::AppState`]. The in-memory implementations stand in
//! for the platform services so the binary runs standalone and the HTTP
//! surface can be exercised end-to-end.

pub mod basket;
pub mod country;
pub mod customer;
pub mod shipping;

pub use basket::{BasketService, InMemoryBasketService};
pub use country::{CountryService, InMemoryCountryService};
pub use customer::{CustomerService, InMemoryCustomerService};
pub use shipping::{InMemoryShippingService, ShippingService};

use thiserror::Error;

/// Errors surfaced by domain services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed entity does not exist or is not visible to the session.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Reading or writing the request session failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}
