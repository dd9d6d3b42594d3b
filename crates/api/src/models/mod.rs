//! Data models for the API crate.
//!
//! Contacts and addresses are owned by the platform; this crate treats their
//! fields as opaque mappings and only types the identifiers around them.

pub mod address;
pub mod basket;
pub mod contact;
pub mod session;

pub use address::{Address, AddressFields};
pub use basket::Basket;
pub use contact::{Contact, ContactFields};
pub use session::{SessionContext, session_keys};
