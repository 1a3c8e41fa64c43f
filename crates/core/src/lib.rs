//! Shipdesk Core - Shared types library.
//!
//! This crate provides common types used across all Shipdesk components:
//! - `api` - Admin HTTP API for user permissions and the shipment pool
//! - `integration-tests` - Cross-crate integration tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure domain logic - no I/O, no
//! database access, no HTTP. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses
//! - [`permissions`] - Per-user carrier/vendor permission lists and their
//!   mutation rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod permissions;
pub mod types;

pub use permissions::*;
pub use types::*;
