//! Session-bound request context.
//!
//! The legacy storefront resolved the current contact and guest addresses
//! through ambient session state hidden inside the services. Here the session
//! is an explicit [`SessionContext`] handle, extracted per request and passed
//! into every service call.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use sugarcane_core::{AddressId, AddressType, ContactId, CountryId, ShippingProfileId};

use crate::error::ApiError;

/// Keys for values the storefront keeps in the session.
pub mod session_keys {
    /// Logged-in contact.
    pub const CONTACT_ID: &str = "contact_id";
    /// Guest checkout billing address.
    pub const BILLING_ADDRESS_ID: &str = "billing_address_id";
    /// Guest checkout delivery address.
    pub const DELIVERY_ADDRESS_ID: &str = "delivery_address_id";
    /// Active shipping profile selection.
    pub const SHIPPING_PROFILE_ID: &str = "shipping_profile_id";
    /// Active delivery country selection.
    pub const SHIPPING_COUNTRY_ID: &str = "shipping_country_id";
}

type SessionResult<T> = Result<T, tower_sessions::session::Error>;

/// Explicit handle on the request session.
///
/// Cheap to clone; all accessors go through the typed keys in
/// [`session_keys`].
#[derive(Debug, Clone)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    /// Wrap a raw session handle.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// The contact bound to this session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn contact_id(&self) -> SessionResult<Option<ContactId>> {
        self.session.get(session_keys::CONTACT_ID).await
    }

    /// Bind a contact to this session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn set_contact_id(&self, id: ContactId) -> SessionResult<()> {
        self.session.insert(session_keys::CONTACT_ID, id).await
    }

    /// The guest address of the given type, if one was created this session.
    ///
    /// Only billing and delivery addresses are tracked for guests; other
    /// types always resolve to `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn guest_address_id(&self, kind: AddressType) -> SessionResult<Option<AddressId>> {
        match kind {
            AddressType::Billing => self.session.get(session_keys::BILLING_ADDRESS_ID).await,
            AddressType::Delivery => self.session.get(session_keys::DELIVERY_ADDRESS_ID).await,
            _ => Ok(None),
        }
    }

    /// Record a guest address id for the given type.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn set_guest_address_id(
        &self,
        kind: AddressType,
        id: AddressId,
    ) -> SessionResult<()> {
        match kind {
            AddressType::Billing => {
                self.session
                    .insert(session_keys::BILLING_ADDRESS_ID, id)
                    .await
            }
            AddressType::Delivery => {
                self.session
                    .insert(session_keys::DELIVERY_ADDRESS_ID, id)
                    .await
            }
            // Only checkout addresses are session-tracked for guests.
            _ => Ok(()),
        }
    }

    /// The active shipping profile selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn shipping_profile_id(&self) -> SessionResult<Option<ShippingProfileId>> {
        self.session.get(session_keys::SHIPPING_PROFILE_ID).await
    }

    /// Select a shipping profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn set_shipping_profile_id(&self, id: ShippingProfileId) -> SessionResult<()> {
        self.session
            .insert(session_keys::SHIPPING_PROFILE_ID, id)
            .await
    }

    /// The active delivery country selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn shipping_country_id(&self) -> SessionResult<Option<CountryId>> {
        self.session.get(session_keys::SHIPPING_COUNTRY_ID).await
    }

    /// Select a delivery country.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn set_shipping_country_id(&self, id: CountryId) -> SessionResult<()> {
        self.session
            .insert(session_keys::SHIPPING_COUNTRY_ID, id)
            .await
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The session is inserted into extensions by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(ApiError::SessionLayer)?;

        Ok(Self::new(session))
    }
}
