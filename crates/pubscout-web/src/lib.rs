//! pubscout-web — HTTP surface for PubScout.
//! Provides:
//!   - POST /api/search — PubMed search + ranking pipeline
//!   - GET  /           — dashboard page

pub mod handlers;
pub mod router;
pub mod state;
