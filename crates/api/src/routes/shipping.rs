//! Shipping profile selection handler.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use sugarcane_core::ShippingProfileId;

use super::coerce_legacy_id;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::models::SessionContext;
use crate::state::AppState;

/// Select the active shipping profile.
///
/// PUT/PATCH /shipping/{shippingProfileId}
///
/// The path parameter goes through the legacy integer coercion: non-numeric
/// input selects profile 0 rather than failing. The id is not validated
/// against existing profiles.
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    session: SessionContext,
    Path(raw_id): Path<String>,
) -> Result<Json<Envelope>> {
    let id = ShippingProfileId::new(coerce_legacy_id(&raw_id));

    state
        .shipping()
        .set_shipping_profile_id(&session, id)
        .await?;

    tracing::debug!(%id, "shipping profile selected");
    Ok(Json(Envelope::empty()))
}
