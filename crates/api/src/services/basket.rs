//! Basket snapshot service.

use async_trait::async_trait;

use sugarcane_core::{CurrencyCode, Price};

use super::ServiceError;
use crate::models::{Basket, SessionContext};

/// Capability interface for reading the session's basket.
#[async_trait]
pub trait BasketService: Send + Sync {
    /// The basket as the platform would report it after a selection change.
    async fn basket(&self, session: &SessionContext) -> Result<Basket, ServiceError>;
}

/// Reference implementation reporting the session's checkout selections.
///
/// Items and totals are owned by the platform; this stand-in reports empty
/// totals in its configured currency.
#[derive(Debug, Clone, Copy)]
pub struct InMemoryBasketService {
    currency: CurrencyCode,
}

impl InMemoryBasketService {
    /// Create a basket service reporting in the given currency.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self { currency }
    }
}

impl Default for InMemoryBasketService {
    fn default() -> Self {
        Self::new(CurrencyCode::EUR)
    }
}

#[async_trait]
impl BasketService for InMemoryBasketService {
    async fn basket(&self, session: &SessionContext) -> Result<Basket, ServiceError> {
        Ok(Basket {
            currency: self.currency,
            item_sum: Price::zero(self.currency),
            shipping_amount: Price::zero(self.currency),
            shipping_country_id: session.shipping_country_id().await?,
            shipping_profile_id: session.shipping_profile_id().await?,
        })
    }
}
