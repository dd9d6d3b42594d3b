//! Address record.

use serde::{Deserialize, Serialize};

use sugarcane_core::{AddressId, AddressType};

/// Opaque address fields as submitted by the client.
pub type AddressFields = serde_json::Map<String, serde_json::Value>;

/// A stored address with its role on the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    #[serde(rename = "typeId")]
    pub type_id: AddressType,
    #[serde(flatten)]
    pub fields: AddressFields,
}
