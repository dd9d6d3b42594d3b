//! Delivery country selection handler.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use sugarcane_core::CountryId;

use super::coerce_legacy_id;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::models::{Basket, SessionContext};
use crate::state::AppState;

/// Select the delivery country and return the resulting basket.
///
/// PUT/PATCH /delivery-country/{shippingCountryId}
///
/// The path parameter goes through the same legacy integer coercion as the
/// shipping profile id.
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    session: SessionContext,
    Path(raw_id): Path<String>,
) -> Result<Json<Envelope<Basket>>> {
    let id = CountryId::new(coerce_legacy_id(&raw_id));

    state
        .countries()
        .set_shipping_country_id(&session, id)
        .await?;

    let basket = state.baskets().basket(&session).await?;
    Ok(Json(Envelope::ok(basket)))
}
