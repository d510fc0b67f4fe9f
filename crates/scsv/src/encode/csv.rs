use std::io::Write;

use crate::document::ParsedDocument;
use crate::encode::writer::LineWriter;
use crate::error::Result;

/// Flatten `doc` into `key,col0,col1,...` lines, one per row. Rows keep their
/// arrival order within a key. Fields are written verbatim, without quoting.
pub fn to_csv_string(doc: &ParsedDocument) -> String {
    let mut w = LineWriter::new();
    for (key, rows) in doc {
        for row in rows {
            w.record(key, row.iter().map(String::as_str));
        }
    }
    w.into_string()
}

/// Stream the CSV rendering of `doc` into `writer`, one key at a time.
pub fn write_csv<W: Write>(mut writer: W, doc: &ParsedDocument) -> Result<()> {
    let mut w = LineWriter::new();
    for (key, rows) in doc {
        w.clear();
        for row in rows {
            w.record(key, row.iter().map(String::as_str));
        }
        writer.write_all(w.as_str().as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
