//! pubscout-ranker — Lead extraction and propensity scoring engine.
//! - Email resolution from free-text affiliations
//! - Canonical contact selection per article
//! - Deterministic 0–100 propensity score
//! - Batch ranking pipeline (sort + dense ranks)

pub mod contact;
pub mod email;
pub mod pipeline;
pub mod scorer;
pub mod weights;
