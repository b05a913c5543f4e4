//! Propensity score computation.

use pubscout_ingestion::models::ArticleRecord;

use crate::contact::ContactRecord;
use crate::weights::ScoreWeights;

/// Compute the propensity score for one extracted lead.
///
/// Deterministic additive model, always in `[0, max_score]`:
/// base + recency + capped keyword density + email bonus, clamped at the
/// ceiling. Anomalous inputs (missing year, empty title) degrade to fixed
/// fallback contributions, never to an error.
pub fn score(
    article: &ArticleRecord,
    contact: &ContactRecord,
    keywords: &[String],
    current_year: i32,
    weights: &ScoreWeights,
) -> u32 {
    let mut total = weights.base;

    total += match article.pub_date.year_num() {
        Some(year) => match current_year - year {
            0 => weights.recency_current_year,
            1 => weights.recency_last_year,
            _ => weights.recency_older,
        },
        None => weights.recency_unknown,
    };

    let title_lower = article.title.to_lowercase();
    let keyword_matches = keywords
        .iter()
        .filter(|kw| title_lower.contains(&kw.to_lowercase()))
        .count() as u32;
    total += (keyword_matches * weights.keyword_match).min(weights.keyword_cap);

    if contact.email.is_some() {
        total += weights.email_bonus;
    }

    total.min(weights.max_score)
}
