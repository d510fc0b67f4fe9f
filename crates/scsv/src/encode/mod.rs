//! Rendering of parsed documents.

pub mod csv;
pub mod writer;

pub use csv::{to_csv_string, write_csv};
