//! pubscout-common — Shared error types and the capped HTTP client used
//! across all PubScout crates.

pub mod error;
pub mod sandbox;
