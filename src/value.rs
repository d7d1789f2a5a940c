//! Null-aware text semantics shared by the compiler and the column quick
//! filters.
//!
//! Every cell is either a string or absent (`None`). There is no other type:
//! `'10' < '9'` holds because comparison is on text.

use std::cmp::Ordering;

/// Compares two possibly-absent strings.
///
/// Absent sorts below every string and equals absent; two strings use their
/// natural (code point) order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use table_filter::value::safe_compare;
///
/// assert_eq!(safe_compare(None, None), Ordering::Equal);
/// assert_eq!(safe_compare(None, Some("")), Ordering::Less);
/// assert_eq!(safe_compare(Some("b"), Some("a")), Ordering::Greater);
/// ```
pub fn safe_compare(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Whether `value` contains `pattern`.
///
/// An absent pattern only matches an absent value; a present pattern never
/// matches an absent value.
pub fn contains(pattern: Option<&str>, value: Option<&str>) -> bool {
    match (pattern, value) {
        (None, value) => value.is_none(),
        (Some(_), None) => false,
        (Some(pattern), Some(value)) => value.contains(pattern),
    }
}

/// Case-insensitive [`contains`]; both sides are lowercased first.
pub fn contains_ignore_case(pattern: Option<&str>, value: Option<&str>) -> bool {
    let pattern = pattern.map(str::to_lowercase);
    let value = value.map(str::to_lowercase);
    contains(pattern.as_deref(), value.as_deref())
}
