//! Customer resource handlers.
//!
//! Registration keeps the legacy contract: shape checks in the original
//! order, the fixed client messages, and a success response that re-runs the
//! read flow so clients always see post-registration state.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::envelope::Envelope;
use crate::error::{Result, ValidationError};
use crate::models::{Address, AddressFields, Contact, ContactFields, SessionContext};
use crate::state::AppState;

/// Composite payload returned by all customer endpoints.
#[derive(Debug, Serialize)]
pub struct CustomerPayload {
    pub contact: Contact,
    pub addresses: Vec<Address>,
}

/// Registration request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterCustomerRequest {
    pub contact: Option<Value>,
    pub billing_address: Option<Value>,
    pub delivery_address: Option<Value>,
}

/// Shape-validated registration data.
#[derive(Debug, PartialEq)]
struct RegisterCustomer {
    contact: ContactFields,
    billing_address: Option<AddressFields>,
    delivery_address: Option<AddressFields>,
}

impl RegisterCustomerRequest {
    /// Validate field shapes, preserving the legacy check order: contact
    /// first, then both addresses. An empty address object means "no address
    /// supplied", never a failure.
    fn validate(self) -> std::result::Result<RegisterCustomer, ValidationError> {
        let Some(Value::Object(contact)) = self.contact else {
            return Err(ValidationError::ContactShape);
        };

        let billing_address = validate_address_field(self.billing_address)?;
        let delivery_address = validate_address_field(self.delivery_address)?;

        Ok(RegisterCustomer {
            contact,
            billing_address,
            delivery_address,
        })
    }
}

/// Contact update request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateContactRequest {
    pub contact: Option<Value>,
}

fn validate_address_field(
    field: Option<Value>,
) -> std::result::Result<Option<AddressFields>, ValidationError> {
    match field {
        None => Ok(None),
        // Empty mapping normalizes to "absent"
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ValidationError::AddressShape),
    }
}

/// Shared read path: registration and update reply with the same payload as a
/// plain GET so clients always see post-operation state.
async fn fetch_customer(
    state: &AppState,
    session: &SessionContext,
) -> Result<Option<CustomerPayload>> {
    let Some(contact) = state.customers().contact(session).await? else {
        return Ok(None);
    };
    let addresses = state.customers().addresses(session, None).await?;
    Ok(Some(CustomerPayload { contact, addresses }))
}

fn customer_envelope(payload: Option<CustomerPayload>) -> Json<Envelope<CustomerPayload>> {
    Json(payload.map_or_else(Envelope::empty, Envelope::ok))
}

/// Current customer for the session, or null.
///
/// GET /customer
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<Json<Envelope<CustomerPayload>>> {
    let payload = fetch_customer(&state, &session).await?;
    Ok(customer_envelope(payload))
}

/// Register a customer.
///
/// POST /customer
#[instrument(skip_all)]
pub async fn store(
    State(state): State<AppState>,
    session: SessionContext,
    Json(request): Json<RegisterCustomerRequest>,
) -> Result<Json<Envelope<CustomerPayload>>> {
    let request = request.validate()?;

    // The created contact is re-read through the fetch below; the service's
    // return value is deliberately unused.
    state
        .customers()
        .register_customer(
            &session,
            request.contact,
            request.billing_address,
            request.delivery_address,
        )
        .await?;

    tracing::info!("customer registered");
    let payload = fetch_customer(&state, &session).await?;
    Ok(customer_envelope(payload))
}

/// Update the logged-in contact.
///
/// PUT /customer
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    session: SessionContext,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<Envelope<CustomerPayload>>> {
    let Some(Value::Object(fields)) = request.contact else {
        return Err(ValidationError::ContactShape.into());
    };

    state.customers().update_contact(&session, fields).await?;

    let payload = fetch_customer(&state, &session).await?;
    Ok(customer_envelope(payload))
}
