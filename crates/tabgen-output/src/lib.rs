//! Output generation for ibus-table source files.
//!
//! - **Table text**: the `SCIM_Generic_Table_Phrase_Library_TEXT` document
//! - **Serial numbers**: minute-resolution UTC stamps behind a [`Clock`]

mod clock;
mod ibus_table;

pub use clock::{Clock, FixedClock, SERIAL_FORMAT, SystemClock, serial_number};
pub use ibus_table::{render_table, write_table};
