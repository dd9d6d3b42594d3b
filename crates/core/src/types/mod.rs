//! Core types for Sugarcane.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod id;
pub mod money;

pub use address::{AddressType, AddressTypeError};
pub use id::*;
pub use money::{CurrencyCode, Price};
