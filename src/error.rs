//! Error types for the filter engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Malformed query text, reported by the lexer or the parser.
///
/// `position` is the zero-based character offset of the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Syntax error at position {position}: {message}")]
pub struct SyntaxError {
    pub position: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        SyntaxError {
            position,
            message: message.into(),
        }
    }
}

/// Why a column list cannot be used to look columns up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnMapIssue {
    /// The table has no columns at all
    Empty,
    /// The column at this index has no name
    MissingName(usize),
    /// Two or more columns share this name
    Duplicate(String),
}

impl std::fmt::Display for ColumnMapIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnMapIssue::Empty => write!(f, "the table has no columns"),
            ColumnMapIssue::MissingName(index) => {
                write!(f, "column {} has no name", index + 1)
            }
            ColumnMapIssue::Duplicate(name) => write!(f, "duplicate column name '{}'", name),
        }
    }
}

/// A well-formed query that cannot be compiled against the current columns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("cannot reference column '{name}' by name: {issue}; use $N instead")]
    UnresolvableColumns { name: String, issue: ColumnMapIssue },

    #[error("invalid regular expression '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },

    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),
}

/// Any failure while turning query text into a [`crate::TableFilter`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}
