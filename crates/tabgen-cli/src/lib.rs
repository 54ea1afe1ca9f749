//! Library components of the `csv-to-ibus` converter.

pub mod logging;
pub mod pipeline;
