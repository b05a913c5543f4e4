//! Data models for the PubMed collaborator.

use serde::{Deserialize, Serialize};

/// Publication date as PubMed reports it: the year may be absent, and the
/// month (which can be a name like "Mar") defaults to "01" when missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubDate {
    pub year: Option<String>,
    pub month: String,
}

impl PubDate {
    pub fn unknown() -> Self {
        Self {
            year: None,
            month: "01".to_string(),
        }
    }

    /// "YYYY-MM", or "N/A" when the year is unknown.
    pub fn display(&self) -> String {
        match &self.year {
            Some(year) => format!("{}-{}", year, self.month),
            None => "N/A".to_string(),
        }
    }

    /// Numeric publication year, if PubMed reported a parsable one.
    pub fn year_num(&self) -> Option<i32> {
        self.year.as_deref().and_then(|y| y.parse().ok())
    }
}

impl Default for PubDate {
    fn default() -> Self {
        Self::unknown()
    }
}

/// One entry of an article's author list, in listing order.
/// Either name part may be missing (e.g. collective authors).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorEntry {
    pub fore_name: Option<String>,
    pub last_name: Option<String>,
    pub affiliation: Option<String>,
}

/// One matching publication as returned by efetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub pmid: String,
    pub title: String,
    pub pub_date: PubDate,
    pub authors: Vec<AuthorEntry>,
}
