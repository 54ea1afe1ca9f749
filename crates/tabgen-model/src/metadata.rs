//! Metadata derived from the keys of a table.

use std::collections::BTreeSet;

/// Maximum key length and the set of characters used in keys.
///
/// Values are never folded in: only keystrokes matter to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMetadata {
    /// Longest key, counted in characters.
    pub max_key_length: usize,
    /// Every character that occurs in any key, in code-point order.
    pub valid_chars: BTreeSet<char>,
}

impl TableMetadata {
    /// Fold step: account for one more key.
    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        let mut len = 0usize;
        for ch in key.chars() {
            self.valid_chars.insert(ch);
            len += 1;
        }
        self.max_key_length = self.max_key_length.max(len);
        self
    }

    /// Combine two partial results.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.max_key_length = self.max_key_length.max(other.max_key_length);
        self.valid_chars.extend(other.valid_chars);
        self
    }

    /// Sorted, deduplicated characters as one string.
    pub fn valid_chars_string(&self) -> String {
        self.valid_chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.max_key_length == 0 && self.valid_chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let metadata = TableMetadata::default();
        assert!(metadata.is_empty());
        assert_eq!(metadata.max_key_length, 0);
        assert_eq!(metadata.valid_chars_string(), "");
    }

    #[test]
    fn with_key_tracks_length_and_chars() {
        let metadata = TableMetadata::default()
            .with_key("tsa")
            .with_key("a")
            .with_key("hna");
        assert_eq!(metadata.max_key_length, 3);
        assert_eq!(metadata.valid_chars_string(), "ahnst");
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let metadata = TableMetadata::default().with_key("ŋá");
        assert_eq!(metadata.max_key_length, 2);
    }

    #[test]
    fn merge_takes_max_and_union() {
        let left = TableMetadata::default().with_key("ka");
        let right = TableMetadata::default().with_key("naha");
        let merged = left.merge(right);
        assert_eq!(merged.max_key_length, 4);
        assert_eq!(merged.valid_chars_string(), "ahkn");
    }
}
