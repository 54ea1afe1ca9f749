//! A single table row.

/// Frequency assigned to every row.
///
/// The source tables carry exactly one replacement per key, so ranking never
/// comes into play and every row gets the same weight.
pub const DEFAULT_FREQUENCY: u32 = 1;

/// One `key -> value` replacement in the input-method table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Transliteration typed by the user.
    pub key: String,
    /// Character (or character sequence) produced for the key.
    pub value: String,
    pub frequency: u32,
}

impl Entry {
    /// Create an entry with the default frequency.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            frequency: DEFAULT_FREQUENCY,
        }
    }

    /// Key length in characters, not bytes.
    pub fn key_len(&self) -> usize {
        self.key.chars().count()
    }
}
