/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `#@key,value`, marker stripped.
    Directive(&'a str),
    /// `--`
    Reset,
    Comment,
    Data(&'a str),
}

pub const DIRECTIVE_MARKER: &str = "#@";
pub const RESET_MARKER: &str = "--";

pub fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(body) = line.strip_prefix(DIRECTIVE_MARKER) {
        return LineKind::Directive(body);
    }
    if line == RESET_MARKER {
        return LineKind::Reset;
    }
    if line.starts_with('#') {
        return LineKind::Comment;
    }
    LineKind::Data(line)
}

/// Data line split into its key field and value fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    pub key: &'a str,
    pub values: Vec<&'a str>,
}

pub fn split_fields(line: &str) -> Fields<'_> {
    let mut parts = line.split(',');
    // `split` always yields at least one item
    let key = parts.next().unwrap_or_default();
    Fields {
        key,
        values: parts.collect(),
    }
}
