//! Contact record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sugarcane_core::ContactId;

/// Opaque contact fields as submitted by the client.
///
/// Field names and validity are owned by the customer service; the API only
/// checks that the value is structurally a mapping.
pub type ContactFields = serde_json::Map<String, serde_json::Value>;

/// A registered contact.
///
/// The identifier and creation time are assigned by the service; all other
/// fields pass through untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: ContactFields,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_flatten_into_payload() {
        let contact = Contact {
            id: ContactId::new(3),
            created_at: "2026-01-15T09:30:00Z".parse().unwrap(),
            fields: json!({"firstName": "Mara"})
                .as_object()
                .cloned()
                .unwrap(),
        };

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["firstName"], "Mara");
    }
}
