use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("format error at line {line}: {kind}")]
    Format { line: usize, kind: FormatErrorKind },
}

/// Reason a line was rejected. Every variant aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("malformed directive, expected `#@key,value`")]
    MalformedDirective,

    #[error("invalid boolean `{0}` in directive")]
    InvalidBoolean(String),

    #[error("no key found")]
    NoKey,

    #[error("no value found in column {column}")]
    NoValue { column: usize },

    #[error("invalid flow key count `{0}`")]
    InvalidFlowKeyCount(String),

    #[error("invalid flow value count `{0}`")]
    InvalidFlowValueCount(String),

    #[error("flow key redefined before clearing")]
    FlowKeyRedefined,

    #[error("flow value in column {column} redefined before clearing")]
    FlowValueRedefined { column: usize },
}

impl Error {
    pub(crate) fn format(line: usize, kind: FormatErrorKind) -> Self {
        Error::Format { line, kind }
    }

    /// Line number of a format error, `None` for I/O failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Format { line, .. } => Some(*line),
            Error::Io(_) => None,
        }
    }

    pub fn format_kind(&self) -> Option<&FormatErrorKind> {
        match self {
            Error::Format { kind, .. } => Some(kind),
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
