//! Customer address handlers.
//!
//! Addresses are a sub-resource of the customer: logged-in contacts manage
//! their own address book, guests manage the checkout addresses tracked by
//! the session.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use sugarcane_core::{AddressId, AddressType};

use crate::envelope::Envelope;
use crate::error::{Result, ValidationError};
use crate::models::{Address, AddressFields, SessionContext};
use crate::state::AppState;

/// `?typeId=` query parameter.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddressTypeQuery {
    #[serde(rename = "typeId")]
    pub type_id: Option<i32>,
}

/// Decode an optional `typeId` into an address type.
fn parse_kind(type_id: Option<i32>) -> std::result::Result<Option<AddressType>, ValidationError> {
    type_id
        .map(AddressType::try_from)
        .transpose()
        .map_err(|_| ValidationError::AddressType)
}

/// Decode a required `typeId`.
fn require_kind(type_id: Option<i32>) -> std::result::Result<AddressType, ValidationError> {
    parse_kind(type_id)?.ok_or(ValidationError::AddressType)
}

/// The submitted address must be a non-empty mapping.
fn validate_address_body(body: Value) -> std::result::Result<AddressFields, ValidationError> {
    match body {
        Value::Object(map) if !map.is_empty() => Ok(map),
        _ => Err(ValidationError::AddressShape),
    }
}

/// List addresses, optionally filtered by type.
///
/// GET /customer/address
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    session: SessionContext,
    Query(query): Query<AddressTypeQuery>,
) -> Result<Json<Envelope<Vec<Address>>>> {
    let kind = parse_kind(query.type_id)?;
    let addresses = state.customers().addresses(&session, kind).await?;
    Ok(Json(Envelope::ok(addresses)))
}

/// Create an address of the given type.
///
/// POST /customer/address?typeId=
#[instrument(skip_all)]
pub async fn store(
    State(state): State<AppState>,
    session: SessionContext,
    Query(query): Query<AddressTypeQuery>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope<Address>>> {
    let kind = require_kind(query.type_id)?;
    let fields = validate_address_body(body)?;
    let address = state.customers().create_address(&session, fields, kind).await?;
    Ok(Json(Envelope::ok(address)))
}

/// Replace an address.
///
/// PUT /customer/address/{address_id}?typeId=
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    session: SessionContext,
    Path(address_id): Path<i32>,
    Query(query): Query<AddressTypeQuery>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope<Address>>> {
    let kind = require_kind(query.type_id)?;
    let fields = validate_address_body(body)?;
    let address = state
        .customers()
        .update_address(&session, AddressId::new(address_id), fields, kind)
        .await?;
    Ok(Json(Envelope::ok(address)))
}

/// Delete an address.
///
/// DELETE /customer/address/{address_id}?typeId=
#[instrument(skip_all)]
pub async fn destroy(
    State(state): State<AppState>,
    session: SessionContext,
    Path(address_id): Path<i32>,
    Query(query): Query<AddressTypeQuery>,
) -> Result<Json<Envelope>> {
    let kind = require_kind(query.type_id)?;
    state
        .customers()
        .delete_address(&session, AddressId::new(address_id), kind)
        .await?;
    Ok(Json(Envelope::empty()))
}
