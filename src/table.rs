//! The table abstraction the engine filters.
//!
//! The engine only ever asks a row for the cell at an index. Anything that can
//! answer that implements [`Row`]: `Vec<String>`, `&[&str]`,
//! `Vec<Option<String>>`, fixed-size arrays, or [`SimpleTable`]'s rows.

use crate::columns::ColumnMap;

/// A single record. Cells are addressed by zero-based column index.
///
/// Rows may be ragged: asking past the last cell yields `None`, the same as
/// an absent value.
pub trait Row {
    fn get(&self, index: usize) -> Option<&str>;
}

/// A type that can sit in a row as one cell.
pub trait CellValue {
    fn as_cell(&self) -> Option<&str>;
}

impl CellValue for String {
    fn as_cell(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl CellValue for &str {
    fn as_cell(&self) -> Option<&str> {
        Some(*self)
    }
}

impl<S: AsRef<str>> CellValue for Option<S> {
    fn as_cell(&self) -> Option<&str> {
        self.as_ref().map(|s| AsRef::<str>::as_ref(s))
    }
}

impl<C: CellValue> Row for [C] {
    fn get(&self, index: usize) -> Option<&str> {
        <[C]>::get(self, index).and_then(CellValue::as_cell)
    }
}

impl<C: CellValue> Row for Vec<C> {
    fn get(&self, index: usize) -> Option<&str> {
        Row::get(self.as_slice(), index)
    }
}

impl<C: CellValue, const N: usize> Row for [C; N] {
    fn get(&self, index: usize) -> Option<&str> {
        Row::get(self.as_slice(), index)
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn get(&self, index: usize) -> Option<&str> {
        (**self).get(index)
    }
}

/// Immutable in-memory table: column names plus rows of nullable strings.
///
/// Column names may be absent or repeated; such tables can still be filtered
/// with positional references (`$1`, `$2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleTable {
    columns: Vec<Option<String>>,
    rows: Vec<Vec<Option<String>>>,
}

impl SimpleTable {
    pub fn new(columns: Vec<Option<String>>, rows: Vec<Vec<Option<String>>>) -> Self {
        SimpleTable { columns, rows }
    }

    /// Builds a table where every column name and cell is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use table_filter::table::SimpleTable;
    ///
    /// let table = SimpleTable::from_strings(&["id", "name"], &[&["1", "ann"], &["2", "bob"]]);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_strings(columns: &[&str], rows: &[&[&str]]) -> Self {
        SimpleTable {
            columns: columns.iter().map(|c| Some(c.to_string())).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| Some(cell.to_string())).collect())
                .collect(),
        }
    }

    pub fn columns(&self) -> &[Option<String>] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Name lookup for this table's columns.
    pub fn column_map(&self) -> ColumnMap {
        ColumnMap::from_nullable(self.columns.iter().map(Option::as_deref))
    }

    /// A new table with the same columns, keeping the rows `filter` accepts.
    pub fn filtered(&self, filter: &crate::TableFilter) -> SimpleTable {
        SimpleTable {
            columns: self.columns.clone(),
            rows: filter.apply(&self.rows).into_iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_row_reads_absent() {
        let row = vec!["a", "b"];
        assert_eq!(Row::get(&row, 1), Some("b"));
        assert_eq!(Row::get(&row, 2), None);
    }

    #[test]
    fn test_nullable_cells() {
        let row: Vec<Option<String>> = vec![None, Some("x".to_string())];
        assert_eq!(Row::get(&row, 0), None);
        assert_eq!(Row::get(&row, 1), Some("x"));
    }

    #[test]
    fn test_array_and_reference_rows() {
        let row = ["a", "b", "c"];
        let by_ref: &dyn Row = &&row;
        assert_eq!(by_ref.get(2), Some("c"));
        assert_eq!(by_ref.get(3), None);
    }

    #[test]
    fn test_filtered_keeps_columns() {
        let table = SimpleTable::from_strings(&["k"], &[&["x"], &["y"], &["x"]]);
        let filter = crate::parse("k = 'x'", ["k"]).unwrap();
        let result = table.filtered(&filter);
        assert_eq!(result.columns(), table.columns());
        assert_eq!(result.len(), 2);
    }
}
