//! Delivery country selection service.

use async_trait::async_trait;

use sugarcane_core::CountryId;

use super::ServiceError;
use crate::models::SessionContext;

/// Capability interface for the active delivery country.
#[async_trait]
pub trait CountryService: Send + Sync {
    /// Make the given country the session's active selection.
    async fn set_shipping_country_id(
        &self,
        session: &SessionContext,
        id: CountryId,
    ) -> Result<(), ServiceError>;
}

/// Session-backed reference implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryCountryService;

#[async_trait]
impl CountryService for InMemoryCountryService {
    async fn set_shipping_country_id(
        &self,
        session: &SessionContext,
        id: CountryId,
    ) -> Result<(), ServiceError> {
        session.set_shipping_country_id(id).await?;
        Ok(())
    }
}
