//! Lead search API — runs the PubMed query and the ranking pipeline.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use pubscout_common::error::ApiError;
use pubscout_ranker::pipeline::{Lead, LeadRanker};

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keywords: Vec<String>,
    #[serde(default = "default_years_back")]
    pub years_back: u32,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_years_back() -> u32 {
    2
}

fn default_max_results() -> usize {
    100
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub leads: Vec<Lead>,
    pub total: usize,
}

/// POST /api/search — search PubMed and return scored, ranked leads.
pub async fn api_search(
    State(state): State<SharedState>,
    Json(request): Json<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.keywords.is_empty() {
        return Err(ApiError::bad_request("at least one keyword is required"));
    }

    let articles = state
        .source
        .search(&request.keywords, request.years_back, request.max_results)
        .await
        .map_err(|e| ApiError::upstream(format!("PubMed search failed: {e}")))?;

    let ranker = LeadRanker::new(state.weights.clone());
    let leads = ranker.rank(&articles, &request.keywords);
    let total = leads.len();
    info!(total, articles = articles.len(), "search complete");

    Ok(Json(SearchResponse { leads, total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use pubscout_ingestion::models::{ArticleRecord, AuthorEntry, PubDate};
    use pubscout_ingestion::sources::LiteratureSource;
    use std::sync::Arc;

    struct FixedSource {
        articles: Vec<ArticleRecord>,
        fail: bool,
    }

    #[async_trait]
    impl LiteratureSource for FixedSource {
        async fn search(
            &self,
            _keywords: &[String],
            _years_back: u32,
            _max_results: usize,
        ) -> anyhow::Result<Vec<ArticleRecord>> {
            if self.fail {
                anyhow::bail!("upstream unavailable");
            }
            Ok(self.articles.clone())
        }
    }

    fn state(source: FixedSource) -> SharedState {
        Arc::new(AppState::new(Arc::new(source)))
    }

    fn sample_article(pmid: &str) -> ArticleRecord {
        ArticleRecord {
            pmid: pmid.to_string(),
            title: "Organoid hepatotoxicity assay".to_string(),
            pub_date: PubDate {
                year: Some("2026".to_string()),
                month: "02".to_string(),
            },
            authors: vec![AuthorEntry {
                fore_name: Some("Jane".to_string()),
                last_name: Some("Doe".to_string()),
                affiliation: Some("Univ Hospital, jane@univ.edu".to_string()),
            }],
        }
    }

    fn request(keywords: &[&str]) -> SearchRequest {
        SearchRequest {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            years_back: 2,
            max_results: 50,
        }
    }

    #[tokio::test]
    async fn test_search_returns_ranked_leads() {
        let source = FixedSource {
            articles: vec![sample_article("1"), sample_article("2")],
            fail: false,
        };
        let result = api_search(State(state(source)), Json(request(&["organoid"]))).await;
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_keywords_rejected() {
        let source = FixedSource {
            articles: vec![],
            fail: false,
        };
        let err = api_search(State(state(source)), Json(request(&[])))
            .await
            .err()
            .expect("empty keywords must be rejected");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_failure_surfaces_as_bad_gateway() {
        let source = FixedSource {
            articles: vec![],
            fail: true,
        };
        let err = api_search(State(state(source)), Json(request(&["organoid"])))
            .await
            .err()
            .expect("upstream failure must map to an error");
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }
}
