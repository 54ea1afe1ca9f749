//! Transformations from source rows to a complete table document.
//!
//! - [`quirks`]: synthetic rows for ambiguous `na` + `h…` input
//! - [`metadata`]: fold of all keys into [`tabgen_model::TableMetadata`]
//! - [`document`]: assembly of the final [`tabgen_model::TableDocument`]

pub mod document;
pub mod metadata;
pub mod quirks;

pub use document::build_document;
pub use metadata::{accumulate_metadata, table_metadata};
pub use quirks::{QuirkRule, QuirkSet, expand_quirks};
