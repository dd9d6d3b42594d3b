//! Newtype IDs for type-safe entity references.
//!
//! The platform addresses every entity by a plain `i32`. Wrapping each kind in
//! its own newtype keeps a `ContactId` from being handed to an API that wants
//! an `AddressId`, while keeping the wire format a bare integer.

/// Macro to define a type-safe ID wrapper around `i32`.
///
/// The generated type serializes transparently (a bare JSON number), derives
/// the usual value-type traits, and converts to and from `i32`.
///
/// # Example
///
/// ```rust
/// # use sugarcane_core::define_id;
/// define_id!(ContactId);
/// define_id!(AddressId);
///
/// let contact = ContactId::new(7);
/// assert_eq!(contact.get(), 7);
///
/// // Different ID kinds are different types, so this won't compile:
/// // let _: ContactId = AddressId::new(7);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw platform ID.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// The raw `i32` value.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Entity IDs used across the workspace
define_id!(ContactId);
define_id!(AddressId);
define_id!(ShippingProfileId);
define_id!(CountryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ContactId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(ContactId::from(42), id);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ShippingProfileId::new(6).to_string(), "6");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: AddressId = serde_json::from_str("17").expect("valid id");
        assert_eq!(id, AddressId::new(17));
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "17");
    }
}
