//! Sugarcane Core - Shared types library.
//!
//! This crate provides common types used across all Sugarcane components:
//! - `api` - Storefront-facing REST API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no session
//! handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, address types, and money types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
