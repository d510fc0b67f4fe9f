//! Line sources feeding the parser.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// An ordered, finite sequence of text lines.
///
/// `Ok(None)` marks the end of input. Returned lines never carry their
/// terminator.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<&str>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        (**self).next_line()
    }
}

/// Lines of an in-memory string, split on `\n` with an optional `\r` before it.
/// A trailing terminator does not start another line.
#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    rest: &'a str,
}

impl<'a> StrLines<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_newline(s: &str) -> Option<usize> {
    memchr::memchr(b'\n', s.as_bytes())
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_newline(s: &str) -> Option<usize> {
    s.find('\n')
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

impl<'a> Iterator for StrLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let raw = match find_newline(self.rest) {
            Some(pos) => {
                let (raw, remaining) = self.rest.split_at(pos + 1);
                self.rest = remaining;
                raw
            }
            None => core::mem::take(&mut self.rest),
        };
        Some(strip_terminator(raw))
    }
}

impl LineSource for StrLines<'_> {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        Ok(self.next())
    }
}

/// Lines read from any buffered reader. Invalid UTF-8 surfaces as an
/// [`io::ErrorKind::InvalidData`] error.
#[derive(Debug)]
pub struct ReaderLines<R> {
    inner: R,
    buf: String,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl ReaderLines<BufReader<File>> {
    /// Open `path` for reading. The file is closed when the source is dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_terminator(&self.buf)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<S: LineSource>(mut src: S) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(line) = src.next_line().unwrap() {
            out.push(line.to_string());
        }
        out
    }

    #[test]
    fn str_lines_follow_scanner_rules() {
        assert!(drain(StrLines::new("")).is_empty());
        assert_eq!(drain(StrLines::new("a\nb")), vec!["a", "b"]);
        assert_eq!(drain(StrLines::new("a\nb\n")), vec!["a", "b"]);
        assert_eq!(drain(StrLines::new("a\r\n\r\nb\r\n")), vec!["a", "", "b"]);
        assert_eq!(drain(StrLines::new("\n")), vec![""]);
    }

    #[test]
    fn reader_lines_match_str_lines() {
        let input = "#@strictmode,true\r\n2|pkg,bat\n\n,eza";
        let from_reader = drain(ReaderLines::new(input.as_bytes()));
        assert_eq!(from_reader, drain(StrLines::new(input)));
    }

    #[test]
    fn into_inner_returns_unread_remainder() {
        let mut src = ReaderLines::new("a,1\nb,2\n".as_bytes());
        assert_eq!(src.next_line().unwrap(), Some("a,1"));
        let rest = src.into_inner();
        assert_eq!(rest, b"b,2\n");
    }

    #[test]
    fn reader_lines_reject_invalid_utf8() {
        let bytes: &[u8] = &[b'a', b',', 0xff, b'\n'];
        let mut src = ReaderLines::new(bytes);
        let err = src.next_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReaderLines::open(dir.path().join("missing.scsv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
