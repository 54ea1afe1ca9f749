//! Data model for transliteration input-method tables.
//!
//! Everything here is built and dropped within a single conversion run:
//! source [`Entry`] rows, the derived [`TableMetadata`], the static and
//! configurable fields of the definition block, and the assembled
//! [`TableDocument`].

pub mod config;
pub mod document;
pub mod entry;
pub mod metadata;

pub use config::{
    AutoSelect, DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_ICON, DEFAULT_UUID, TableConfig,
};
pub use document::{
    FORMAT_HEADER, FORMAT_VERSION, TableDefinition, TableDocument, TableIdentity,
};
pub use entry::{DEFAULT_FREQUENCY, Entry};
pub use metadata::TableMetadata;
