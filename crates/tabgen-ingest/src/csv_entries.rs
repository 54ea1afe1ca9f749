use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use tabgen_model::Entry;

use crate::error::{IngestError, Result};

/// Column holding the typed key.
pub const TRANSLITERATION_COLUMN: &str = "transliteration";

/// Column holding the produced character.
pub const CHARACTER_COLUMN: &str = "character";

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn column_index(headers: &StringRecord, column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| normalize_header(header) == column)
        .ok_or(IngestError::MissingColumn { column })
}

/// Characters that delimit rows and columns of the generated table.
const TABLE_SEPARATORS: [char; 3] = ['\t', '\r', '\n'];

fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    column: &'static str,
    record_number: u64,
) -> Result<&'r str> {
    let value = record.get(index).ok_or(IngestError::MissingField {
        column,
        record: record_number,
    })?;
    if value.contains(TABLE_SEPARATORS) {
        return Err(IngestError::InvalidField {
            column,
            record: record_number,
        });
    }
    Ok(value)
}

/// Read table entries from CSV text with a header row.
///
/// Rows keep input order; columns other than `transliteration` and
/// `character` are ignored. Any malformed row fails the whole read.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<Entry>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let key_idx = column_index(&headers, TRANSLITERATION_COLUMN)?;
    let value_idx = column_index(&headers, CHARACTER_COLUMN)?;

    let mut entries = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let record_number = (idx as u64) + 1;
        let key = field(&record, key_idx, TRANSLITERATION_COLUMN, record_number)?;
        let value = field(&record, value_idx, CHARACTER_COLUMN, record_number)?;
        if key.is_empty() {
            return Err(IngestError::EmptyKey {
                record: record_number,
            });
        }
        entries.push(Entry::new(key, value));
    }
    debug!(rows = entries.len(), "read transliteration rows");
    Ok(entries)
}

/// Read table entries from a CSV file.
pub fn read_entries_from_path(path: &Path) -> Result<Vec<Entry>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_entries(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_order_and_ignores_extra_columns() {
        let csv = "transliteration,character,frequency\na,Ꭰ,12\nha,Ꭽ,3\n";
        let entries = read_entries(csv.as_bytes()).unwrap();
        assert_eq!(entries, vec![Entry::new("a", "Ꭰ"), Entry::new("ha", "Ꭽ")]);
        assert!(entries.iter().all(|e| e.frequency == 1));
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "character,transliteration\nᎦ,ga\n";
        let entries = read_entries(csv.as_bytes()).unwrap();
        assert_eq!(entries, vec![Entry::new("ga", "Ꭶ")]);
    }

    #[test]
    fn header_only_yields_no_entries() {
        let entries = read_entries("transliteration,character\n".as_bytes()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn header_bom_and_padding_are_ignored() {
        let csv = "\u{feff}transliteration , character\nka,Ꭷ\n";
        let entries = read_entries(csv.as_bytes()).unwrap();
        assert_eq!(entries, vec![Entry::new("ka", "Ꭷ")]);
    }

    #[test]
    fn quoted_fields_are_unescaped() {
        let csv = "transliteration,character\n\"qua\",\"Ꮖ\"\n";
        let entries = read_entries(csv.as_bytes()).unwrap();
        assert_eq!(entries, vec![Entry::new("qua", "Ꮖ")]);
    }

    #[test]
    fn missing_header_column_is_an_error() {
        let err = read_entries("transliteration,frequency\na,1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                column: CHARACTER_COLUMN
            }
        ));
    }

    #[test]
    fn short_record_is_an_error() {
        let csv = "transliteration,character\na,Ꭰ\ne\n";
        let err = read_entries(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingField {
                column: CHARACTER_COLUMN,
                record: 2
            }
        ));
    }

    #[test]
    fn empty_transliteration_is_an_error() {
        let csv = "transliteration,character\n,Ꭰ\n";
        let err = read_entries(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyKey { record: 1 }));
    }

    #[test]
    fn quoted_tab_in_key_is_an_error() {
        let csv = "transliteration,character\nka,Ꭷ\n\"ga\tx\",Ꭶ\n";
        let err = read_entries(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidField {
                column: TRANSLITERATION_COLUMN,
                record: 2
            }
        ));
    }

    #[test]
    fn quoted_line_break_in_value_is_an_error() {
        for value in ["\"Ꭶ\nEND_TABLE\"", "\"Ꭶ\r\""] {
            let csv = format!("transliteration,character\nga,{value}\nka,Ꭷ\n");
            let err = read_entries(csv.as_bytes()).unwrap_err();
            assert!(matches!(
                err,
                IngestError::InvalidField {
                    column: CHARACTER_COLUMN,
                    record: 1
                }
            ));
        }
    }
}
