use tabgen_model::{Entry, TableMetadata};

/// Fold keys into [`TableMetadata`].
pub fn accumulate_metadata<'a>(keys: impl IntoIterator<Item = &'a str>) -> TableMetadata {
    keys.into_iter()
        .fold(TableMetadata::default(), TableMetadata::with_key)
}

/// Metadata over the source rows and the synthetic rows together.
pub fn table_metadata(entries: &[Entry], quirks: &[Entry]) -> TableMetadata {
    accumulate_metadata(entries.iter().chain(quirks).map(|e| e.key.as_str()))
}
