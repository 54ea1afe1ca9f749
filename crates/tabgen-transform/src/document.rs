use tabgen_model::{Entry, TableConfig, TableDefinition, TableDocument};
use tracing::info;

use crate::metadata::table_metadata;
use crate::quirks::{QuirkRule, expand_quirks};

/// Assemble the complete document from source rows.
///
/// Metadata is folded over the source rows plus whatever synthetic rows
/// the configuration asks for, so it is final before anything is rendered.
pub fn build_document(
    entries: Vec<Entry>,
    config: &TableConfig,
    serial_number: impl Into<String>,
) -> TableDocument {
    let quirks = if config.expand_quirks {
        expand_quirks(&entries, &QuirkRule::default()).into_entries()
    } else {
        Vec::new()
    };
    let metadata = table_metadata(&entries, &quirks);
    info!(
        rows = entries.len(),
        quirk_rows = quirks.len(),
        max_key_length = metadata.max_key_length,
        valid_chars = metadata.valid_chars.len(),
        "built table"
    );
    TableDocument {
        definition: TableDefinition::new(config, serial_number, metadata),
        entries,
        quirks,
    }
}
