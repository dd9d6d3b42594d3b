//! Basket snapshot returned by checkout-selection endpoints.

use serde::Serialize;

use sugarcane_core::{CountryId, CurrencyCode, Price, ShippingProfileId};

/// The session's checkout selections plus totals.
///
/// Items and pricing are owned by the basket service; the storefront only
/// reports the state relevant after a selection change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    pub currency: CurrencyCode,
    pub item_sum: Price,
    pub shipping_amount: Price,
    pub shipping_country_id: Option<CountryId>,
    pub shipping_profile_id: Option<ShippingProfileId>,
}
