//! The assembled table document.
//!
//! A document is only constructed once every row is known, because the
//! definition block carries metadata folded over the complete body.

use crate::config::{AutoSelect, TableConfig};
use crate::entry::Entry;
use crate::metadata::TableMetadata;

/// First line of every generated file.
pub const FORMAT_HEADER: &str = "SCIM_Generic_Table_Phrase_Library_TEXT";

/// Second line of every generated file.
pub const FORMAT_VERSION: &str = "VERSION_1_0";

/// Static identity fields of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIdentity {
    pub license: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub languages: &'static str,
    pub status_prompt: &'static str,
}

impl TableIdentity {
    /// Cherokee syllabary table.
    pub const CHEROKEE: Self = Self {
        license: "CC0",
        symbol: "\u{13e3}",
        name: "Cherokee",
        languages: "chr",
        status_prompt: "\u{13e3}\u{13b3}\u{13a9}",
    };
}

impl Default for TableIdentity {
    fn default() -> Self {
        Self::CHEROKEE
    }
}

/// Every field of the `BEGIN_DEFINITION` block that varies per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub identity: TableIdentity,
    pub uuid: String,
    pub serial_number: String,
    pub icon: String,
    pub description: String,
    pub author: String,
    pub metadata: TableMetadata,
    pub auto_select: AutoSelect,
}

impl TableDefinition {
    pub fn new(
        config: &TableConfig,
        serial_number: impl Into<String>,
        metadata: TableMetadata,
    ) -> Self {
        Self {
            identity: TableIdentity::default(),
            uuid: config.uuid.clone(),
            serial_number: serial_number.into(),
            icon: config.icon.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            metadata,
            auto_select: config.auto_select,
        }
    }
}

/// Header, definition block and body of one generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDocument {
    pub definition: TableDefinition,
    /// Source rows in input order.
    pub entries: Vec<Entry>,
    /// Synthetic rows, always emitted after `entries`.
    pub quirks: Vec<Entry>,
}

impl TableDocument {
    /// All body rows in emission order.
    pub fn rows(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().chain(self.quirks.iter())
    }

    pub fn row_count(&self) -> usize {
        self.entries.len() + self.quirks.len()
    }
}
