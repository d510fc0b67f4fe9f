#![doc = include_str!("../README.md")]

pub mod decode;
pub mod document;
pub mod encode;
pub mod error;
pub mod options;

pub use crate::decode::parser::{Parser, parse_lines};
pub use crate::decode::source::{LineSource, ReaderLines, StrLines};
pub use crate::document::{ParsedDocument, Row};
pub use crate::encode::{to_csv_string, write_csv};
pub use crate::error::{Error, FormatErrorKind, Result};
pub use crate::options::Options;

use std::io::BufRead;
use std::path::Path;

pub fn parse_str(s: &str, options: &Options) -> Result<ParsedDocument> {
    parse_lines(StrLines::new(s), options)
}

pub fn parse_reader<R: BufRead>(reader: R, options: &Options) -> Result<ParsedDocument> {
    parse_lines(ReaderLines::new(reader), options)
}

pub fn parse_file<P: AsRef<Path>>(path: P, options: &Options) -> Result<ParsedDocument> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "parsing file");
    parse_lines(ReaderLines::open(path)?, options)
}
