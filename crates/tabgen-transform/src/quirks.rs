//! Disambiguation rows for overlapping transliterations.
//!
//! Typing `na` followed by an `h…` syllable produces the same keystrokes as
//! the single `nah` character followed by the rest. For every key `h<rest>`
//! a synthetic row `nah<rest>` is added whose value is NA followed by the
//! `h…` character, so both readings are reachable.

use std::collections::BTreeMap;

use tabgen_model::Entry;
use tracing::debug;

/// CHEROKEE LETTER NA.
pub const NA_MARKER: char = '\u{13be}';

/// Trigger, prefix and marker of one quirk family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuirkRule {
    /// First character of keys the rule applies to.
    pub trigger: char,
    /// Prepended to the source key.
    pub key_prefix: String,
    /// Prepended to the source value.
    pub value_marker: char,
}

impl QuirkRule {
    /// `h…` keys gain a `na` prefix and a NA marker.
    pub fn cherokee_nah() -> Self {
        Self {
            trigger: 'h',
            key_prefix: "na".to_string(),
            value_marker: NA_MARKER,
        }
    }

    /// Synthetic entry for `entry`, if the rule applies.
    ///
    /// The key must start with the trigger and have at least one more
    /// character: a bare `h` is left alone.
    pub fn apply(&self, entry: &Entry) -> Option<Entry> {
        let mut chars = entry.key.chars();
        if chars.next() != Some(self.trigger) || chars.next().is_none() {
            return None;
        }
        let key = format!("{}{}", self.key_prefix, entry.key);
        let mut value = String::with_capacity(entry.value.len() + self.value_marker.len_utf8());
        value.push(self.value_marker);
        value.push_str(&entry.value);
        Some(Entry::new(key, value))
    }
}

impl Default for QuirkRule {
    fn default() -> Self {
        Self::cherokee_nah()
    }
}

/// Synthetic rows keyed by their synthetic key.
///
/// A recurring source key replaces the earlier synthetic row rather than
/// adding a second one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuirkSet {
    entries: BTreeMap<String, Entry>,
}

impl QuirkSet {
    pub fn insert(&mut self, entry: Entry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries.into_values().collect()
    }
}

/// Derive synthetic rows for every entry matched by `rule`.
pub fn expand_quirks(entries: &[Entry], rule: &QuirkRule) -> QuirkSet {
    let mut quirks = QuirkSet::default();
    for synthetic in entries.iter().filter_map(|entry| rule.apply(entry)) {
        quirks.insert(synthetic);
    }
    debug!(
        source_rows = entries.len(),
        quirk_rows = quirks.len(),
        "expanded quirks"
    );
    quirks
}
