//! Daily Grind Core - Shared types library.
//!
//! This crate provides the common types used by the storefront:
//! product identifiers, decimal prices, menu categories, and validated
//! email addresses.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, categories, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
