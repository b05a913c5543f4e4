//! Request handlers.

pub mod dashboard;
pub mod search;
