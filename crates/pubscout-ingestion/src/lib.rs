//! pubscout-ingestion — PubMed article discovery.
//! - esearch query construction (keyword terms + publication-date window)
//! - efetch XML parsing into `ArticleRecord`

pub mod models;
pub mod sources;
