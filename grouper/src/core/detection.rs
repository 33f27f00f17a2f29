//! Grouping column detection
//!
//! Picks the column that holds each record's college (or similar) by header
//! keyword. This is input-side policy; the partitioner only ever sees the
//! resulting field name.

use shared::Record;

/// Header keywords that mark a grouping column, matched as lowercase substrings
pub const DEFAULT_GROUP_KEYWORDS: &[&str] = &["college", "university", "institution", "school", "uni"];

fn matches_keyword<S: AsRef<str>>(header: &str, keywords: &[S]) -> bool {
    let header = header.to_lowercase();
    keywords.iter().any(|keyword| {
        let keyword = keyword.as_ref().trim().to_lowercase();
        !keyword.is_empty() && header.contains(&keyword)
    })
}

/// First header whose name contains any keyword
pub fn detect_column<'h, S: AsRef<str>>(headers: &'h [String], keywords: &[S]) -> Option<&'h str> {
    headers
        .iter()
        .map(String::as_str)
        .find(|header| matches_keyword(header, keywords))
}

/// A column of ids is numeric throughout and never holds letters
fn looks_like_identifiers(values: &[&str]) -> bool {
    values
        .iter()
        .all(|v| v.parse::<f64>().is_ok() && !v.chars().any(|c| c.is_ascii_alphabetic()))
}

/// Like [`detect_column`], but skips keyword matches that are unusable as a
/// grouping column: entirely blank, or purely numeric.
pub fn detect_grouping_field<S: AsRef<str>>(headers: &[String], records: &[Record], keywords: &[S]) -> Option<String> {
    for header in headers.iter().filter(|h| matches_keyword(h, keywords)) {
        let values: Vec<&str> = records
            .iter()
            .filter_map(|record| record.get(header))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect();

        if values.is_empty() {
            tracing::debug!(column = %header, "skipping blank grouping candidate");
            continue;
        }
        if looks_like_identifiers(&values) {
            tracing::debug!(column = %header, "skipping numeric grouping candidate");
            continue;
        }
        return Some(header.clone());
    }
    None
}
