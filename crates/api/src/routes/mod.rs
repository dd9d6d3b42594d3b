//! HTTP route handlers for the storefront REST API.
//!
//! # Route Structure
//!
//! ```text
//! # Customer
//! GET    /customer                      - Current customer (contact + addresses) or null
//! POST   /customer                      - Register a customer
//! PUT    /customer                      - Update the logged-in contact
//!
//! # Customer addresses
//! GET    /customer/address              - List addresses (optional ?typeId=)
//! POST   /customer/address              - Create an address (?typeId= required)
//! PUT    /customer/address/{id}         - Replace an address (?typeId= required)
//! DELETE /customer/address/{id}         - Delete an address (?typeId= required)
//!
//! # Checkout selections
//! PUT    /shipping/{shippingProfileId}  - Select the active shipping profile
//! PATCH  /shipping/{shippingProfileId}
//! PUT    /delivery-country/{countryId}  - Select the delivery country, returns the basket
//! PATCH  /delivery-country/{countryId}
//! ```

pub mod address;
pub mod customer;
pub mod delivery_country;
pub mod shipping;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(customer::show)
                .post(customer::store)
                .put(customer::update),
        )
        .route("/address", get(address::index).post(address::store))
        .route(
            "/address/{address_id}",
            put(address::update).delete(address::destroy),
        )
}

/// Create the shipping profile routes router.
pub fn shipping_routes() -> Router<AppState> {
    Router::new().route(
        "/{shipping_profile_id}",
        put(shipping::update).patch(shipping::update),
    )
}

/// Create the delivery country routes router.
pub fn delivery_country_routes() -> Router<AppState> {
    Router::new().route(
        "/{shipping_country_id}",
        put(delivery_country::update).patch(delivery_country::update),
    )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/customer", customer_routes())
        .nest("/shipping", shipping_routes())
        .nest("/delivery-country", delivery_country_routes())
}

/// Coerce a path parameter the way the legacy storefront did.
///
/// PHP's `(int)` cast reads optional leading whitespace, an optional sign, and
/// leading digits, and turns everything else into 0: `"42"` → 42,
/// `"42abc"` → 42, `"abc"` → 0. Kept bug-for-bug: non-numeric input silently
/// selects id 0 instead of failing, and callers pass the result through
/// unvalidated.
#[must_use]
pub(crate) fn coerce_legacy_id(raw: &str) -> i32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = digits.get(..end).unwrap_or("");
    if digits.is_empty() {
        return 0;
    }

    // Out-of-range values saturate; the platform treats them as unknown ids.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    let signed = if negative { -magnitude } else { magnitude };
    #[allow(clippy::cast_possible_truncation)] // clamped to i32 range
    {
        signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}
