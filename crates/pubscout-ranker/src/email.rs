//! Email address extraction from free-text affiliation strings.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
}

/// Return the first email-shaped substring in left-to-right scan order.
/// Purely syntactic; no deliverability checks. Absent or empty input and
/// text without a match all yield `None`.
pub fn resolve(text: Option<&str>) -> Option<String> {
    let text = text?;
    if text.is_empty() {
        return None;
    }
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}
