//! Address type codes.
//!
//! The platform distinguishes addresses by an integer type code. The codes are
//! part of the wire format (query parameters, stored records), so the enum
//! serializes as its integer value.

use serde::{Deserialize, Serialize};

/// Error returned when an integer is not a known address type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown address type code: {0}")]
pub struct AddressTypeError(pub i32);

/// The role an address plays on an order.
///
/// Billing and delivery are the only types the storefront creates; the
/// remaining codes exist on orders imported from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum AddressType {
    Billing = 1,
    Delivery = 2,
    Sender = 3,
    Return = 4,
    Client = 5,
    Contractor = 6,
    Warehouse = 7,
}

impl AddressType {
    /// The integer code used on the wire.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for AddressType {
    type Error = AddressTypeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Billing),
            2 => Ok(Self::Delivery),
            3 => Ok(Self::Sender),
            4 => Ok(Self::Return),
            5 => Ok(Self::Client),
            6 => Ok(Self::Contractor),
            7 => Ok(Self::Warehouse),
            other => Err(AddressTypeError(other)),
        }
    }
}

impl From<AddressType> for i32 {
    fn from(kind: AddressType) -> Self {
        kind.code()
    }
}
