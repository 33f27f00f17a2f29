//! Grouping key normalization

use std::fmt;

/// Canonical grouping key: trimmed and lower-cased, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw grouping value. Blank input has no key.
pub fn normalize(raw: &str) -> Option<GroupKey> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(GroupKey(trimmed.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Trinity College ").unwrap().as_str(), "trinity college");
        assert_eq!(normalize("MIT"), normalize("mit"));
    }

    #[test]
    fn test_normalize_blank_is_absent() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   \t\n"), None);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        // Only surrounding whitespace is stripped
        assert_ne!(normalize("St  Johns"), normalize("St Johns"));
    }
}
