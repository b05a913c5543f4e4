//! Shared application state for the web server.

use std::sync::Arc;

use pubscout_ingestion::sources::LiteratureSource;
use pubscout_ranker::weights::ScoreWeights;

/// Shared state injected into every Axum handler. The literature source is
/// the only collaborator; the ranker itself is stateless and built per
/// request from the configured weights.
pub struct AppState {
    pub source: Arc<dyn LiteratureSource>,
    pub weights: ScoreWeights,
}

impl AppState {
    pub fn new(source: Arc<dyn LiteratureSource>) -> Self {
        Self {
            source,
            weights: ScoreWeights::default(),
        }
    }
}

pub type SharedState = Arc<AppState>;
