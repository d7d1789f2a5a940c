//! Quick per-column filters, the kind picked from a cell's context menu
//! ("only rows equal to this", "only rows containing this").
//!
//! Unlike a query these need no parsing: each one is a [`FilterType`] plus a
//! pattern, pinned to a column index. Filters on different columns combine
//! with AND.

use std::collections::BTreeMap;

use crate::{table::Row, value::contains};

/// How a quick filter compares its pattern with a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Cell equals the pattern (absent equals absent)
    Equals,
    /// Cell contains the pattern
    Contains,
    /// Cell differs from the pattern
    Differs,
}

impl FilterType {
    pub fn test(&self, pattern: Option<&str>, value: Option<&str>) -> bool {
        match self {
            FilterType::Equals => pattern == value,
            FilterType::Contains => match value {
                None => pattern.is_none(),
                Some(_) => pattern.is_some() && contains(pattern, value),
            },
            FilterType::Differs => pattern != value,
        }
    }
}

/// A quick filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub filter_type: FilterType,
    pub pattern: Option<String>,
}

/// The quick filters currently set on a table, at most one per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters {
    filters: BTreeMap<usize, ColumnFilter>,
}

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter for `column`, replacing any previous one.
    pub fn set(&mut self, column: usize, filter_type: FilterType, pattern: Option<&str>) {
        self.filters.insert(
            column,
            ColumnFilter {
                filter_type,
                pattern: pattern.map(str::to_string),
            },
        );
    }

    pub fn get(&self, column: usize) -> Option<&ColumnFilter> {
        self.filters.get(&column)
    }

    pub fn remove(&mut self, column: usize) -> Option<ColumnFilter> {
        self.filters.remove(&column)
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        self.filters.iter().all(|(column, filter)| {
            filter
                .filter_type
                .test(filter.pattern.as_deref(), row.get(*column))
        })
    }

    /// Keeps the rows passing every filter, in order.
    pub fn apply<I>(&self, rows: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Row,
    {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}
