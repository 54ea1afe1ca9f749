//! Conversion pipeline with explicit stages.
//!
//! 1. **Ingest**: read CSV rows into entries
//! 2. **Build**: expand quirks and fold metadata into a document
//! 3. **Emit**: render the document and write it in one piece
//!
//! The document is complete before the sink is touched, so a failure in an
//! earlier stage never leaves a partial table behind.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tabgen_ingest::{read_entries, read_entries_from_path};
use tabgen_model::{Entry, TableConfig, TableDocument};
use tabgen_output::write_table;
use tabgen_transform::build_document;

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub source_rows: usize,
    pub quirk_rows: usize,
    pub max_key_length: usize,
    pub valid_chars: String,
    pub serial_number: String,
}

impl ConvertSummary {
    pub fn from_document(document: &TableDocument) -> Self {
        let definition = &document.definition;
        Self {
            source_rows: document.entries.len(),
            quirk_rows: document.quirks.len(),
            max_key_length: definition.metadata.max_key_length,
            valid_chars: definition.metadata.valid_chars_string(),
            serial_number: definition.serial_number.clone(),
        }
    }
}

/// Stage 1: read all source rows.
pub fn ingest<R: Read>(input: R) -> Result<Vec<Entry>> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let start = Instant::now();
    let entries = read_entries(input).context("read transliteration table")?;
    info!(
        rows = entries.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(entries)
}

/// Stage 1 for a file source.
pub fn ingest_path(path: &Path) -> Result<Vec<Entry>> {
    let span = info_span!("ingest", input = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let entries = read_entries_from_path(path)
        .with_context(|| format!("read transliteration table {}", path.display()))?;
    info!(
        rows = entries.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(entries)
}

/// Stage 2: expand quirks and fold metadata.
pub fn build(entries: Vec<Entry>, config: &TableConfig, serial_number: &str) -> TableDocument {
    info_span!("build").in_scope(|| build_document(entries, config, serial_number))
}

/// Stages 1 and 2: read rows and assemble the document.
pub fn convert<R: Read>(
    input: R,
    config: &TableConfig,
    serial_number: &str,
) -> Result<TableDocument> {
    let entries = ingest(input)?;
    Ok(build(entries, config, serial_number))
}

/// Stages 1 and 2 for a file source.
pub fn convert_path(
    path: &Path,
    config: &TableConfig,
    serial_number: &str,
) -> Result<TableDocument> {
    let entries = ingest_path(path)?;
    Ok(build(entries, config, serial_number))
}

/// Stage 3: write the document to `output`.
pub fn emit<W: Write>(document: &TableDocument, output: W) -> Result<()> {
    let span = info_span!("emit", rows = document.row_count());
    let _guard = span.enter();
    write_table(document, output).context("write table")
}

/// Stage 3 for a file target. The file is only created here, after the
/// document is complete.
pub fn emit_to_path(document: &TableDocument, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    emit(document, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_builds_summary() {
        let input = "transliteration,character\na,Ꭰ\nha,Ꭽ\n";
        let document =
            convert(input.as_bytes(), &TableConfig::default(), "202401010000").unwrap();
        let summary = ConvertSummary::from_document(&document);
        assert_eq!(
            summary,
            ConvertSummary {
                source_rows: 2,
                quirk_rows: 1,
                max_key_length: 4,
                valid_chars: "ahn".to_string(),
                serial_number: "202401010000".to_string(),
            }
        );
    }

    #[test]
    fn missing_input_file_is_reported_with_path() {
        let err = convert_path(
            Path::new("does-not-exist/chr.csv"),
            &TableConfig::default(),
            "202401010000",
        )
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("read transliteration table does-not-exist/chr.csv: "));
        assert!(message.contains("failed to read file"));
    }

    #[test]
    fn ingest_error_carries_context() {
        let err = convert("transliteration\na\n".as_bytes(), &TableConfig::default(), "0")
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("read transliteration table: "));
        assert!(message.contains("'character'"));
    }
}
