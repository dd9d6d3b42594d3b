//! Shipping profile selection service.

use async_trait::async_trait;

use sugarcane_core::ShippingProfileId;

use super::ServiceError;
use crate::models::SessionContext;

/// Capability interface for the active shipping profile.
#[async_trait]
pub trait ShippingService: Send + Sync {
    /// Make the given profile the session's active selection.
    ///
    /// The id is not checked against existing profiles; the platform resolves
    /// it when the order is calculated.
    async fn set_shipping_profile_id(
        &self,
        session: &SessionContext,
        id: ShippingProfileId,
    ) -> Result<(), ServiceError>;
}

/// Session-backed reference implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryShippingService;

#[async_trait]
impl ShippingService for InMemoryShippingService {
    async fn set_shipping_profile_id(
        &self,
        session: &SessionContext,
        id: ShippingProfileId,
    ) -> Result<(), ServiceError> {
        session.set_shipping_profile_id(id).await?;
        Ok(())
    }
}
