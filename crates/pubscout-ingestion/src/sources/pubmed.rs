//! PubMed E-utilities client.
//!
//! Endpoints used:
//!   esearch: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   efetch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, instrument, warn};

use pubscout_common::error::PubscoutError;
use pubscout_common::sandbox::SandboxClient;

use super::LiteratureSource;
use crate::models::{ArticleRecord, AuthorEntry, PubDate};

const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

pub struct PubMedClient {
    client: SandboxClient,
    api_key: Option<String>,
}

impl PubMedClient {
    pub fn new(api_key: Option<String>) -> Result<Self, PubscoutError> {
        Ok(Self {
            client: SandboxClient::new()?,
            api_key,
        })
    }

    /// Search PubMed and return a list of PMIDs, sorted by publication date.
    #[instrument(skip(self))]
    async fn esearch(&self, query: &str, max: usize) -> anyhow::Result<Vec<String>> {
        let mut params = vec![
            ("db", "pubmed".to_string()),
            ("term", query.to_string()),
            ("retmax", max.to_string()),
            ("retmode", "json".to_string()),
            ("sort", "pub_date".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }

        let resp: serde_json::Value = self
            .client
            .get(ESEARCH_URL)?
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        let ids = resp["esearchresult"]["idlist"]
            .as_array()
            .unwrap_or(&vec![])
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();

        debug!(?ids, "PubMed esearch returned PMIDs");
        Ok(ids)
    }

    /// Fetch PubMed XML for a list of PMIDs and parse into ArticleRecords.
    #[instrument(skip(self))]
    async fn efetch_articles(&self, pmids: &[String]) -> anyhow::Result<Vec<ArticleRecord>> {
        if pmids.is_empty() {
            return Ok(vec![]);
        }

        let mut params = vec![
            ("db", "pubmed".to_string()),
            ("id", pmids.join(",")),
            ("retmode", "xml".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }

        let xml = self
            .client
            .get(EFETCH_URL)?
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        Ok(parse_pubmed_xml(&xml))
    }
}

#[async_trait]
impl LiteratureSource for PubMedClient {
    async fn search(
        &self,
        keywords: &[String],
        years_back: u32,
        max_results: usize,
    ) -> anyhow::Result<Vec<ArticleRecord>> {
        let query = build_query(keywords, years_back, Utc::now().year());
        let pmids = self.esearch(&query, max_results).await?;
        self.efetch_articles(&pmids).await
    }
}

/// Build the esearch term: each keyword restricted to Title/Abstract,
/// OR-joined, with a publication-date window appended.
fn build_query(keywords: &[String], years_back: u32, current_year: i32) -> String {
    let terms: Vec<String> = keywords
        .iter()
        .map(|kw| format!("\"{}\"[Title/Abstract]", kw))
        .collect();
    let start_year = current_year - years_back as i32;
    format!(
        "{} AND {}:{}[PDAT]",
        terms.join(" OR "),
        start_year,
        current_year
    )
}

/// Accumulator for one `<PubmedArticle>` while scanning the XML.
#[derive(Default)]
struct PendingArticle {
    pmid: Option<String>,
    title: String,
    year: Option<String>,
    month: Option<String>,
    authors: Vec<AuthorEntry>,
}

impl PendingArticle {
    fn finish(self) -> Option<ArticleRecord> {
        let Some(pmid) = self.pmid else {
            warn!("Skipping article without PMID");
            return None;
        };
        Some(ArticleRecord {
            pmid,
            title: self.title,
            pub_date: PubDate {
                year: self.year,
                month: self.month.unwrap_or_else(|| "01".to_string()),
            },
            authors: self.authors,
        })
    }
}

/// Parse PubMed efetch XML into ArticleRecords.
/// Handles the `<PubmedArticleSet><PubmedArticle>` structure. A malformed
/// record is skipped with a warning; it never aborts the batch.
fn parse_pubmed_xml(xml: &str) -> Vec<ArticleRecord> {
    let mut articles = Vec::new();
    let mut reader = Reader::from_str(xml);

    // State machine for XML parsing
    let mut current: Option<PendingArticle> = None;
    let mut in_pmid = false;
    let mut in_title = false;
    let mut in_pub_date = false;
    let mut in_year = false;
    let mut in_month = false;
    let mut in_author = false;
    let mut in_fore_name = false;
    let mut in_last_name = false;
    let mut in_affiliation = false;
    let mut current_fore: Option<String> = None;
    let mut current_last: Option<String> = None;
    let mut current_affil: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"PubmedArticle" => current = Some(PendingArticle::default()),
                b"PMID" => in_pmid = true,
                b"ArticleTitle" => in_title = true,
                b"PubDate" => in_pub_date = true,
                b"Year" => in_year = true,
                b"Month" => in_month = true,
                b"Author" => {
                    in_author = true;
                    current_fore = None;
                    current_last = None;
                    current_affil = None;
                }
                b"ForeName" => in_fore_name = true,
                b"LastName" => in_last_name = true,
                b"Affiliation" => in_affiliation = true,
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default().to_string();
                if let Some(ref mut article) = current {
                    // Titles keep raw text so spacing around inline markup
                    // survives; scalar fields are trimmed.
                    if in_title {
                        article.title.push_str(&text);
                    }
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if in_pmid && article.pmid.is_none() {
                        // Only the citation-level PMID; comment and reference
                        // blocks carry PMIDs of other papers.
                        article.pmid = Some(trimmed.to_string());
                    }
                    if in_pub_date && in_year {
                        article.year = Some(trimmed.to_string());
                    }
                    if in_pub_date && in_month {
                        article.month = Some(trimmed.to_string());
                    }
                    if in_author && in_fore_name {
                        current_fore = Some(trimmed.to_string());
                    }
                    if in_author && in_last_name {
                        current_last = Some(trimmed.to_string());
                    }
                    if in_author && in_affiliation && current_affil.is_none() {
                        current_affil = Some(trimmed.to_string());
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"PMID" => in_pmid = false,
                b"ArticleTitle" => in_title = false,
                b"PubDate" => in_pub_date = false,
                b"Year" => in_year = false,
                b"Month" => in_month = false,
                b"ForeName" => in_fore_name = false,
                b"LastName" => in_last_name = false,
                b"Affiliation" => in_affiliation = false,
                b"Author" => {
                    if in_author {
                        if let Some(ref mut article) = current {
                            article.authors.push(AuthorEntry {
                                fore_name: current_fore.take(),
                                last_name: current_last.take(),
                                affiliation: current_affil.take(),
                            });
                        }
                        in_author = false;
                    }
                }
                b"PubmedArticle" => {
                    if let Some(pending) = current.take() {
                        if let Some(article) = pending.finish() {
                            articles.push(article);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!("XML parse error: {}", e);
                break;
            }
            _ => {}
        }
    }

    articles
}
