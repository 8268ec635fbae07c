//! Keyword normalization and ordered, case-insensitive keyword sets.
//!
//! Every collection structure in Goldpan treats two keywords as the same
//! entry when their normalized forms (trimmed, case-folded) are equal, while
//! the display form keeps the casing of the first occurrence. [`KeywordSet`]
//! is the insertion-ordered set backing both the expansion `discovered`
//! sequence and the related-keyword merge.
//!
//! # Examples
//!
//! ```
//! use goldpan::keyword::KeywordSet;
//!
//! let mut set = KeywordSet::new();
//! assert!(set.insert("Rust SEO"));
//! assert!(!set.insert("rust seo"));
//! assert!(set.insert("독서모임"));
//!
//! let entries: Vec<_> = set.iter().collect();
//! assert_eq!(entries, ["Rust SEO", "독서모임"]);
//! ```

use std::collections::HashSet;

/// Normalize a keyword for identity comparison: trim surrounding whitespace
/// and case-fold.
///
/// The normalized form is only used as a set key; display strings keep their
/// original casing.
pub fn normalize(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// An insertion-ordered set of keywords with case-insensitive uniqueness.
///
/// Entries are stored trimmed but otherwise verbatim; lookup and
/// deduplication happen on the normalized form. Iteration yields entries in
/// the order they were first inserted.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordSet {
    /// Create an empty keyword set.
    pub fn new() -> Self {
        KeywordSet::default()
    }

    /// Insert a keyword, returning `true` if it was not already present.
    ///
    /// Keywords that are empty after trimming are rejected.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let display = keyword.trim();
        if display.is_empty() {
            return false;
        }
        let key = normalize(display);
        if self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key);
        self.entries.push(display.to_string());
        true
    }

    /// Check whether a keyword (under normalization) is present.
    pub fn contains(&self, keyword: &str) -> bool {
        self.seen.contains(&normalize(keyword))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-inserted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Drop all entries past the first `max`, keeping insertion order.
    pub fn truncate(&mut self, max: usize) {
        if max >= self.entries.len() {
            return;
        }
        for dropped in self.entries.drain(max..) {
            self.seen.remove(&normalize(&dropped));
        }
    }

    /// Consume the set, yielding entries in first-inserted order.
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello World  "), "hello world");
        assert_eq!(normalize("독서모임"), "독서모임");
        assert_eq!(normalize("CAMPING Gear"), "camping gear");
    }

    #[test]
    fn test_case_insensitive_uniqueness() {
        let mut set = KeywordSet::new();
        assert!(set.insert("Book Club"));
        assert!(!set.insert("book club"));
        assert!(!set.insert("  BOOK CLUB "));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next(), Some("Book Club"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let set: KeywordSet = ["c", "a", "b", "A"].into_iter().collect();
        let entries: Vec<_> = set.iter().collect();
        assert_eq!(entries, ["c", "a", "b"]);
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let mut set = KeywordSet::new();
        assert!(!set.insert("   "));
        assert!(!set.insert(""));
        assert!(set.is_empty());
    }

    #[test]
    fn test_truncate_keeps_head_and_updates_membership() {
        let mut set: KeywordSet = ["a", "b", "c", "d"].into_iter().collect();
        set.truncate(2);
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(!set.contains("c"));
        // A truncated keyword can be re-inserted afterwards.
        assert!(set.insert("c"));
    }

    #[test]
    fn test_display_form_is_first_occurrence() {
        let mut set = KeywordSet::new();
        set.insert("독서모임 Book");
        set.insert("독서모임 BOOK");
        assert_eq!(set.into_vec(), vec!["독서모임 Book".to_string()]);
    }
}
