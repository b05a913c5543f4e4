//! Canonical contact selection for one article.

use pubscout_ingestion::models::ArticleRecord;

use crate::email;

/// Fallback affiliation text for authors who list none.
pub const NO_AFFILIATION: &str = "No affiliation";

/// The representative contact derived from one article's author list.
/// The affiliation is kept raw and untruncated here; display truncation
/// happens when the Lead is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRecord {
    pub name: String,
    pub affiliation: String,
    pub email: Option<String>,
}

/// Pick one representative contact per article.
///
/// Single forward pass over the author list: the first author with an
/// extractable email is treated as the corresponding author and stops the
/// scan immediately, even if later authors also carry emails. Otherwise
/// the first author with both name parts is used. Authors missing either
/// name part are skipped and do not count as "first author". Returns
/// `None` when no author is usable; the caller drops the article.
pub fn extract(article: &ArticleRecord) -> Option<ContactRecord> {
    let mut first_usable: Option<ContactRecord> = None;

    for author in &article.authors {
        let (Some(fore), Some(last)) = (author.fore_name.as_deref(), author.last_name.as_deref())
        else {
            continue;
        };

        let name = format!("{} {}", fore, last);
        let affiliation = author
            .affiliation
            .clone()
            .unwrap_or_else(|| NO_AFFILIATION.to_string());
        let email = email::resolve(Some(&affiliation));

        let record = ContactRecord {
            name,
            affiliation,
            email,
        };

        if record.email.is_some() {
            // Corresponding author found; no later author is considered.
            return Some(record);
        }
        if first_usable.is_none() {
            first_usable = Some(record);
        }
    }

    first_usable
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubscout_ingestion::models::{AuthorEntry, PubDate};

    fn author(fore: &str, last: &str, affiliation: Option<&str>) -> AuthorEntry {
        AuthorEntry {
            fore_name: Some(fore.to_string()),
            last_name: Some(last.to_string()),
            affiliation: affiliation.map(String::from),
        }
    }

    fn article(authors: Vec<AuthorEntry>) -> ArticleRecord {
        ArticleRecord {
            pmid: "1".to_string(),
            title: "t".to_string(),
            pub_date: PubDate::unknown(),
            authors,
        }
    }

    #[test]
    fn test_corresponding_author_short_circuit() {
        let record = article(vec![
            author("Ann", "Ames", Some("Inst A")),
            author("Bob", "Brown", Some("Inst B, x@y.com")),
            author("Cid", "Cole", Some("Inst C, p@q.com")),
        ]);
        let contact = extract(&record).unwrap();
        assert_eq!(contact.name, "Bob Brown");
        assert_eq!(contact.email.as_deref(), Some("x@y.com"));
    }

    #[test]
    fn test_email_precedence_over_first_author() {
        let record = article(vec![
            author("Ann", "Ames", Some("Inst A")),
            author("Bob", "Brown", Some("Inst B, bob@b.org")),
        ]);
        let contact = extract(&record).unwrap();
        assert!(contact.email.is_some());
        assert_eq!(contact.name, "Bob Brown");
    }

    #[test]
    fn test_first_usable_fallback_without_email() {
        let record = article(vec![
            author("Ann", "Ames", None),
            author("Bob", "Brown", Some("Inst B")),
        ]);
        let contact = extract(&record).unwrap();
        assert_eq!(contact.name, "Ann Ames");
        assert_eq!(contact.affiliation, NO_AFFILIATION);
        assert_eq!(contact.email, None);
    }

    #[test]
    fn test_author_missing_name_part_skipped() {
        let mut incomplete = author("Solo", "", None);
        incomplete.last_name = None;
        let record = article(vec![incomplete, author("Bob", "Brown", Some("Inst B"))]);
        let contact = extract(&record).unwrap();
        // The nameless author does not count as first author.
        assert_eq!(contact.name, "Bob Brown");
    }

    #[test]
    fn test_no_usable_author_yields_none() {
        let record = article(vec![AuthorEntry {
            fore_name: None,
            last_name: Some("Consortium".to_string()),
            affiliation: Some("Somewhere, someone@some.org".to_string()),
        }]);
        assert_eq!(extract(&record), None);
    }

    #[test]
    fn test_empty_author_list() {
        assert_eq!(extract(&article(vec![])), None);
    }
}
