//! Literature source clients.

pub mod pubmed;

use async_trait::async_trait;

use crate::models::ArticleRecord;

/// Common interface for literature source clients.
#[async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Search for articles matching the keywords within the recency window,
    /// newest first. Returns fully parsed article records.
    async fn search(
        &self,
        keywords: &[String],
        years_back: u32,
        max_results: usize,
    ) -> anyhow::Result<Vec<ArticleRecord>>;
}
