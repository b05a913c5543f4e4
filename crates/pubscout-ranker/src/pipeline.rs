//! Batch ranking pipeline: extract contacts, score, sort, assign ranks.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pubscout_ingestion::models::ArticleRecord;

use crate::contact;
use crate::scorer;
use crate::weights::ScoreWeights;

/// Display truncation length for affiliations and paper titles.
const DISPLAY_TRUNCATE: usize = 200;

/// A ranked, scored outreach candidate derived from one publication.
/// Plain data, directly serializable into the API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub rank: usize,
    pub name: String,
    pub affiliation: String,
    pub email: Option<String>,
    pub paper_title: String,
    pub publication_date: String,
    pub score: u32,
    pub pmid: String,
}

/// Single-shot batch ranker. Holds only configuration; no state survives
/// between calls, so concurrent rankings are independent.
#[derive(Debug, Clone)]
pub struct LeadRanker {
    weights: ScoreWeights,
    current_year: i32,
}

impl LeadRanker {
    pub fn new(weights: ScoreWeights) -> Self {
        Self {
            weights,
            current_year: Utc::now().year(),
        }
    }

    /// Pin the reference year used for recency scoring (tests).
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Rank a batch of articles against the search keywords.
    ///
    /// Articles with no usable author are dropped; one bad record never
    /// aborts the batch. The result is sorted by score descending with a
    /// stable sort, so ties keep the upstream pub-date ordering, and
    /// carries dense 1-based ranks. No top-N truncation happens here.
    pub fn rank(&self, articles: &[ArticleRecord], keywords: &[String]) -> Vec<Lead> {
        let mut leads: Vec<Lead> = articles
            .iter()
            .filter_map(|article| {
                let Some(contact) = contact::extract(article) else {
                    debug!(pmid = %article.pmid, "no usable author, dropping article");
                    return None;
                };
                let score =
                    scorer::score(article, &contact, keywords, self.current_year, &self.weights);
                Some(Lead {
                    rank: 0, // assigned after sorting
                    name: contact.name,
                    affiliation: truncate(&contact.affiliation, DISPLAY_TRUNCATE),
                    email: contact.email,
                    paper_title: truncate(&article.title, DISPLAY_TRUNCATE),
                    publication_date: article.pub_date.display(),
                    score,
                    pmid: article.pmid.clone(),
                })
            })
            .collect();

        leads.sort_by(|a, b| b.score.cmp(&a.score));
        for (idx, lead) in leads.iter_mut().enumerate() {
            lead.rank = idx + 1;
        }
        leads
    }
}

impl Default for LeadRanker {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubscout_ingestion::models::{AuthorEntry, PubDate};

    fn author(fore: &str, last: &str, affiliation: &str) -> AuthorEntry {
        AuthorEntry {
            fore_name: Some(fore.to_string()),
            last_name: Some(last.to_string()),
            affiliation: Some(affiliation.to_string()),
        }
    }

    fn article(pmid: &str, title: &str, year: &str, authors: Vec<AuthorEntry>) -> ArticleRecord {
        ArticleRecord {
            pmid: pmid.to_string(),
            title: title.to_string(),
            pub_date: PubDate {
                year: Some(year.to_string()),
                month: "01".to_string(),
            },
            authors,
        }
    }

    fn ranker() -> LeadRanker {
        LeadRanker::default().with_current_year(2026)
    }

    #[test]
    fn test_ranks_are_dense_permutation() {
        let articles = vec![
            article("1", "organoid study", "2026", vec![author("A", "One", "X")]),
            article("2", "unrelated", "2020", vec![author("B", "Two", "Y")]),
            article("3", "organoid advances", "2025", vec![author("C", "Three", "Z, c@z.org")]),
        ];
        let leads = ranker().rank(&articles, &["organoid".to_string()]);
        assert_eq!(leads.len(), 3);
        let mut ranks: Vec<usize> = leads.iter().map(|l| l.rank).collect();
        ranks.sort();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let articles = vec![
            article("1", "nothing relevant", "2019", vec![author("A", "One", "X")]),
            article("2", "organoid study", "2026", vec![author("B", "Two", "Y, b@y.org")]),
            article("3", "organoid mention", "2024", vec![author("C", "Three", "Z")]),
        ];
        let leads = ranker().rank(&articles, &["organoid".to_string()]);
        for pair in leads.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(leads[0].pmid, "2");
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Identical articles score identically; the stable sort must keep
        // the upstream ordering.
        let articles = vec![
            article("first", "same title", "2025", vec![author("A", "One", "X")]),
            article("second", "same title", "2025", vec![author("B", "Two", "Y")]),
            article("third", "same title", "2025", vec![author("C", "Three", "Z")]),
        ];
        let leads = ranker().rank(&articles, &["same".to_string()]);
        let order: Vec<&str> = leads.iter().map(|l| l.pmid.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_malformed_record_dropped_not_fatal() {
        let unusable = ArticleRecord {
            pmid: "bad".to_string(),
            title: "no authors at all".to_string(),
            pub_date: PubDate::unknown(),
            authors: vec![],
        };
        let mut articles = vec![
            article("1", "t", "2026", vec![author("A", "One", "X")]),
            article("2", "t", "2026", vec![author("B", "Two", "Y")]),
        ];
        articles.insert(1, unusable);
        articles.push(article("3", "t", "2026", vec![author("C", "Three", "Z")]));
        articles.push(article("4", "t", "2026", vec![author("D", "Four", "W")]));

        let leads = ranker().rank(&articles, &[]);
        assert_eq!(leads.len(), 4);
        let ranks: Vec<usize> = leads.iter().map(|l| l.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert!(leads.iter().all(|l| l.pmid != "bad"));
    }

    #[test]
    fn test_display_truncation_to_200_chars() {
        let long_affiliation = "a".repeat(250);
        let long_title = "b".repeat(300);
        let articles = vec![article(
            "1",
            &long_title,
            "2026",
            vec![author("A", "One", &long_affiliation)],
        )];
        let leads = ranker().rank(&articles, &[]);
        assert_eq!(leads[0].affiliation.chars().count(), 200);
        assert_eq!(leads[0].paper_title.chars().count(), 200);

        // The underlying contact keeps the raw value.
        let contact = crate::contact::extract(&articles[0]).unwrap();
        assert_eq!(contact.affiliation.chars().count(), 250);
    }

    #[test]
    fn test_scores_within_bounds() {
        let articles = vec![
            article("1", "organoid hepatotoxicity in vitro", "2026",
                vec![author("A", "One", "X, a@x.org")]),
            article("2", "", "1990", vec![author("B", "Two", "Y")]),
        ];
        let kws: Vec<String> = ["organoid", "hepatotoxicity", "in vitro", "liver"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let leads = ranker().rank(&articles, &kws);
        assert!(leads.iter().all(|l| l.score <= 100));
    }

    #[test]
    fn test_empty_batch_yields_empty_output() {
        let leads = ranker().rank(&[], &["organoid".to_string()]);
        assert!(leads.is_empty());
    }
}
