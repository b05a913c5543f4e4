//! Additive weights of the propensity score model.

use serde::{Deserialize, Serialize};

/// The score model's empirical constants. Callers pass these explicitly
/// into the pipeline instead of reading ambient state, so the scorer is
/// deterministic in isolation. The defaults are load-bearing: ranking
/// behaviour and the scorer tests depend on the exact values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Awarded to every article that matched the search at all.
    pub base: u32,
    /// Published in the current calendar year.
    pub recency_current_year: u32,
    /// Published last year.
    pub recency_last_year: u32,
    /// Published two or more years ago.
    pub recency_older: u32,
    /// Publication year missing or unparsable.
    pub recency_unknown: u32,
    /// Per keyword found in the title.
    pub keyword_match: u32,
    /// Ceiling on the total keyword contribution.
    pub keyword_cap: u32,
    /// The contact carries an extracted email.
    pub email_bonus: u32,
    /// Hard ceiling on the final score.
    pub max_score: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 20,
            recency_current_year: 40,
            recency_last_year: 30,
            recency_older: 20,
            recency_unknown: 10,
            keyword_match: 10,
            keyword_cap: 30,
            email_bonus: 10,
            max_score: 100,
        }
    }
}
