//! ibus-table text format.
//!
//! Line oriented: a format header, a `KEY = value` definition block, and a
//! tab-separated body between `BEGIN_TABLE` and `END_TABLE`.

use std::fmt::Write as _;
use std::io;

use tabgen_model::{Entry, FORMAT_HEADER, FORMAT_VERSION, TableDefinition, TableDocument};
use tracing::debug;

/// This is a static replacement table: autocommit, nothing the user can
/// reorder or extend.
const BEHAVIOR_FLAGS: [(&str, &str); 5] = [
    ("DEF_FULL_WIDTH_PUNCT", "FALSE"),
    ("DEF_FULL_WIDTH_LETTER", "FALSE"),
    ("USER_CAN_DEFINE_PHRASE", "FALSE"),
    ("PINYIN_MODE", "FALSE"),
    ("DYNAMIC_ADJUST", "FALSE"),
];

fn push_field(out: &mut String, key: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "{key} = {value}");
}

fn push_definition(out: &mut String, definition: &TableDefinition) {
    let identity = &definition.identity;
    out.push_str("BEGIN_DEFINITION\n");
    push_field(out, "LICENSE", identity.license);
    push_field(out, "SYMBOL", identity.symbol);
    push_field(out, "NAME", identity.name);
    push_field(out, "LANGUAGES", identity.languages);
    push_field(out, "STATUS_PROMPT", identity.status_prompt);
    push_field(out, "UUID", &definition.uuid);
    push_field(out, "SERIAL_NUMBER", &definition.serial_number);
    push_field(out, "ICON", &definition.icon);
    push_field(out, "DESCRIPTION", &definition.description);
    push_field(out, "AUTHOR", &definition.author);
    push_field(
        out,
        "VALID_INPUT_CHARS",
        definition.metadata.valid_chars_string(),
    );
    push_field(out, "MAX_KEY_LENGTH", definition.metadata.max_key_length);
    push_field(out, "LAYOUT", "default");
    push_field(out, "AUTO_COMMIT", "TRUE");
    push_field(out, "AUTO_SELECT", definition.auto_select);
    for (key, value) in BEHAVIOR_FLAGS {
        push_field(out, key, value);
    }
    out.push_str("END_DEFINITION\n\n");
}

fn push_row(out: &mut String, entry: &Entry) {
    let _ = writeln!(out, "{}\t{}\t{}", entry.key, entry.value, entry.frequency);
}

/// Render the complete document.
pub fn render_table(document: &TableDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{FORMAT_HEADER}\n{FORMAT_VERSION}\n");
    push_definition(&mut out, &document.definition);
    out.push_str("BEGIN_TABLE\n");
    for entry in document.rows() {
        push_row(&mut out, entry);
    }
    out.push_str("END_TABLE\n");
    out
}

/// Render the document and write it to `writer` in one piece.
///
/// # Errors
///
/// Returns the writer's error if the write or flush fails.
pub fn write_table<W: io::Write>(document: &TableDocument, mut writer: W) -> io::Result<()> {
    let rendered = render_table(document);
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    debug!(
        bytes = rendered.len(),
        rows = document.row_count(),
        "wrote table"
    );
    Ok(())
}
