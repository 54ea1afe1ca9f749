//! Loading transliteration tables from CSV.

pub mod csv_entries;
pub mod error;

pub use csv_entries::{
    CHARACTER_COLUMN, TRANSLITERATION_COLUMN, read_entries, read_entries_from_path,
};
pub use error::{IngestError, Result};
