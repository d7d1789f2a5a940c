use std::{fmt, str::FromStr};

use crate::error::FilterError;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal (`=`)
    Equal,
    /// Not equal (`<>`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,

    // Text matching
    /// Substring containment (`LIKE`)
    Like,
    /// Case-insensitive substring containment (`ILIKE`)
    ILike,
    /// Whole-string regular expression match (`REGEX`)
    Regex,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "<>",
            CompareOp::LessThan => "<",
            CompareOp::GreaterThan => ">",
            CompareOp::LessEqual => "<=",
            CompareOp::GreaterEqual => ">=",
            CompareOp::Like => "LIKE",
            CompareOp::ILike => "ILIKE",
            CompareOp::Regex => "REGEX",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CompareOp {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "=" => Ok(CompareOp::Equal),
            "<>" => Ok(CompareOp::NotEqual),
            "<" => Ok(CompareOp::LessThan),
            ">" => Ok(CompareOp::GreaterThan),
            "<=" => Ok(CompareOp::LessEqual),
            ">=" => Ok(CompareOp::GreaterEqual),
            "LIKE" => Ok(CompareOp::Like),
            "ILIKE" => Ok(CompareOp::ILike),
            "REGEX" => Ok(CompareOp::Regex),
            _ => Err(FilterError::UnsupportedOperator(s.to_string())),
        }
    }
}
