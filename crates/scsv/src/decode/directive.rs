//! `#@key,value` option lines.

use crate::error::FormatErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    StrictMode(bool),
    ValuePrecedence(bool),
    /// Well-formed but unrecognized key; ignored.
    Unknown,
}

/// Parse the body of a directive line (marker already stripped).
pub fn parse_directive(body: &str) -> Result<Directive, FormatErrorKind> {
    let mut parts = body.split(',');
    let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FormatErrorKind::MalformedDirective);
    };
    let key = key.to_lowercase();
    let value = value.to_lowercase();
    let flag = parse_bool(&value).ok_or(FormatErrorKind::InvalidBoolean(value))?;
    Ok(match key.as_str() {
        "strictmode" => Directive::StrictMode(flag),
        "valueprecedence" => Directive::ValuePrecedence(flag),
        _ => Directive::Unknown,
    })
}

/// Boolean literals accepted in directives, compared after lower-casing.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
