//! Compiles a parse tree into a row predicate.
//!
//! The tree is walked once. Column references are resolved and literal
//! patterns (regular expressions, lowercased `ILIKE` needles) are prepared
//! here, so evaluating a row never fails and never re-reads the query.

use std::cmp::Ordering;

use regex::Regex;

use crate::{
    ast::{AndExpr, CompareOp, Comparison, NotExpr, Operand, OrExpr, Primary},
    columns::{ColumnMap, ColumnSource},
    error::FilterError,
    table::Row,
    value::{contains, contains_ignore_case, safe_compare},
};

/// A compiled test of one row at a zero-based position.
pub type Predicate = Box<dyn Fn(&dyn Row, usize) -> bool + Send + Sync>;

fn predicate<F>(f: F) -> Predicate
where
    F: Fn(&dyn Row, usize) -> bool + Send + Sync + 'static,
{
    Box::new(f)
}

/// Compiles `expr` against `columns`.
///
/// Fails on the first reference that does not resolve or the first literal
/// regular expression that does not compile.
pub fn compile(expr: &OrExpr, columns: &ColumnMap) -> Result<Predicate, FilterError> {
    Compiler { columns }.compile_or(expr)
}

struct Compiler<'a> {
    columns: &'a ColumnMap,
}

impl Compiler<'_> {
    fn compile_or(&self, expr: &OrExpr) -> Result<Predicate, FilterError> {
        let mut children = expr
            .children
            .iter()
            .map(|child| self.compile_and(child))
            .collect::<Result<Vec<_>, _>>()?;

        if children.len() == 1 {
            return Ok(children.remove(0));
        }
        Ok(predicate(move |row, ordinal| {
            children.iter().any(|child| child(row, ordinal))
        }))
    }

    fn compile_and(&self, expr: &AndExpr) -> Result<Predicate, FilterError> {
        let mut children = expr
            .children
            .iter()
            .map(|child| self.compile_not(child))
            .collect::<Result<Vec<_>, _>>()?;

        if children.len() == 1 {
            return Ok(children.remove(0));
        }
        Ok(predicate(move |row, ordinal| {
            children.iter().all(|child| child(row, ordinal))
        }))
    }

    fn compile_not(&self, expr: &NotExpr) -> Result<Predicate, FilterError> {
        match expr {
            NotExpr::Not(inner) => {
                let inner = self.compile_not(inner)?;
                Ok(predicate(move |row, ordinal| !inner(row, ordinal)))
            }
            NotExpr::Primary(Primary::Group(group)) => self.compile_or(group),
            NotExpr::Primary(Primary::Comparison(comparison)) => {
                self.compile_comparison(comparison)
            }
        }
    }

    fn compile_comparison(&self, comparison: &Comparison) -> Result<Predicate, FilterError> {
        let subject = self.columns.resolve(&comparison.left)?;

        match &comparison.right {
            // The literal is the pattern side for LIKE / ILIKE / REGEX.
            Operand::Literal(literal) => against_literal(comparison.op, subject, literal.clone()),
            // Column against column: right is the pattern, left the subject.
            Operand::Column(column) => {
                let pattern = self.columns.resolve(column)?;
                Ok(against_column(comparison.op, subject, pattern))
            }
        }
    }
}

fn against_literal(
    op: CompareOp,
    subject: ColumnSource,
    literal: String,
) -> Result<Predicate, FilterError> {
    let compiled = match op {
        CompareOp::Equal => predicate(move |row, ordinal| {
            subject.read(row, ordinal).as_deref() == Some(literal.as_str())
        }),
        CompareOp::NotEqual => predicate(move |row, ordinal| {
            subject.read(row, ordinal).as_deref() != Some(literal.as_str())
        }),
        CompareOp::LessThan => ordered_literal(subject, literal, Ordering::is_lt),
        CompareOp::GreaterThan => ordered_literal(subject, literal, Ordering::is_gt),
        CompareOp::LessEqual => ordered_literal(subject, literal, Ordering::is_le),
        CompareOp::GreaterEqual => ordered_literal(subject, literal, Ordering::is_ge),
        CompareOp::Like => predicate(move |row, ordinal| {
            contains(Some(literal.as_str()), subject.read(row, ordinal).as_deref())
        }),
        CompareOp::ILike => {
            let needle = literal.to_lowercase();
            predicate(move |row, ordinal| {
                let value = subject.read(row, ordinal).map(|v| v.to_lowercase());
                contains(Some(needle.as_str()), value.as_deref())
            })
        }
        CompareOp::Regex => {
            let regex = anchored_regex(&literal)?;
            predicate(move |row, ordinal| {
                subject
                    .read(row, ordinal)
                    .is_some_and(|value| regex.is_match(&value))
            })
        }
    };
    Ok(compiled)
}

fn ordered_literal(
    subject: ColumnSource,
    literal: String,
    accept: fn(Ordering) -> bool,
) -> Predicate {
    predicate(move |row, ordinal| {
        accept(safe_compare(
            subject.read(row, ordinal).as_deref(),
            Some(literal.as_str()),
        ))
    })
}

fn against_column(op: CompareOp, left: ColumnSource, right: ColumnSource) -> Predicate {
    match op {
        CompareOp::Equal => predicate(move |row, ordinal| {
            left.read(row, ordinal) == right.read(row, ordinal)
        }),
        CompareOp::NotEqual => predicate(move |row, ordinal| {
            left.read(row, ordinal) != right.read(row, ordinal)
        }),
        CompareOp::LessThan => ordered_columns(left, right, Ordering::is_lt),
        CompareOp::GreaterThan => ordered_columns(left, right, Ordering::is_gt),
        CompareOp::LessEqual => ordered_columns(left, right, Ordering::is_le),
        CompareOp::GreaterEqual => ordered_columns(left, right, Ordering::is_ge),
        CompareOp::Like => predicate(move |row, ordinal| {
            let subject = left.read(row, ordinal);
            let pattern = right.read(row, ordinal);
            contains(pattern.as_deref(), subject.as_deref())
        }),
        CompareOp::ILike => predicate(move |row, ordinal| {
            let subject = left.read(row, ordinal);
            let pattern = right.read(row, ordinal);
            contains_ignore_case(pattern.as_deref(), subject.as_deref())
        }),
        // The pattern comes from the row, so it is compiled per row. A value
        // that is not a valid expression simply does not match.
        CompareOp::Regex => predicate(move |row, ordinal| {
            match (left.read(row, ordinal), right.read(row, ordinal)) {
                (Some(subject), Some(pattern)) => anchored_regex(&pattern)
                    .map(|regex| regex.is_match(&subject))
                    .unwrap_or(false),
                _ => false,
            }
        }),
    }
}

fn ordered_columns(
    left: ColumnSource,
    right: ColumnSource,
    accept: fn(Ordering) -> bool,
) -> Predicate {
    predicate(move |row, ordinal| {
        let a = left.read(row, ordinal);
        let b = right.read(row, ordinal);
        accept(safe_compare(a.as_deref(), b.as_deref()))
    })
}

/// Compiles `pattern` so that it must match the whole value.
///
/// The bare pattern is checked on its own first: an unbalanced `)` would
/// otherwise close the anchoring group and leave alternatives half-anchored.
fn anchored_regex(pattern: &str) -> Result<Regex, FilterError> {
    let invalid = |e: regex::Error| FilterError::InvalidRegex {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    };
    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!(r"\A(?:{})\z", pattern)).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_query;

    fn compiled(query: &str, columns: &[&str]) -> Predicate {
        let tree = parse_query(query).unwrap();
        compile(&tree, &ColumnMap::new(columns)).unwrap()
    }

    #[test]
    fn test_single_child_is_not_wrapped() {
        let p = compiled("a = 'x'", &["a"]);
        assert!(p(&vec!["x"], 0));
        assert!(!p(&vec!["y"], 0));
    }

    #[test]
    fn test_regex_is_anchored() {
        let p = compiled("a REGEX '[0-9]+'", &["a"]);
        assert!(p(&vec!["12345"], 0));
        assert!(!p(&vec!["a1"], 0));
        assert!(!p(&vec!["1a"], 0));
    }

    #[test]
    fn test_regex_alternation_stays_anchored() {
        let p = compiled("a REGEX 'x|y'", &["a"]);
        assert!(p(&vec!["x"], 0));
        assert!(!p(&vec!["xz"], 0));
        assert!(!p(&vec!["zy"], 0));
    }

    #[test]
    fn test_invalid_literal_regex_fails_at_compile_time() {
        let tree = parse_query("a REGEX '[0-9'").unwrap();
        let err = compile(&tree, &ColumnMap::new(["a"])).err().unwrap();
        assert!(matches!(err, FilterError::InvalidRegex { .. }));
    }

    #[test]
    fn test_unbalanced_paren_cannot_escape_anchors() {
        let tree = parse_query("a REGEX 'a)|(b'").unwrap();
        let err = compile(&tree, &ColumnMap::new(["a"])).err().unwrap();
        assert_eq!(
            err,
            FilterError::InvalidRegex {
                pattern: "a)|(b".to_string(),
                reason: Regex::new("a)|(b").err().unwrap().to_string(),
            }
        );

        let p = compiled("$1 REGEX $2", &["a", "b"]);
        assert!(!p(&vec!["axyz", "a)|(b"], 0));
        assert!(!p(&vec!["zzzb", "a)|(b"], 0));
        assert!(!p(&vec!["a", "a)|(b"], 0));
    }

    #[test]
    fn test_invalid_row_regex_is_false() {
        let p = compiled("$1 REGEX $2", &["a", "b"]);
        assert!(!p(&vec!["x", "["], 0));
        assert!(p(&vec!["abc", "a.c"], 0));
    }
}
