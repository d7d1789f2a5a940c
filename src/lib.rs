pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod column_filter;
pub mod columns;
pub mod compiler;
pub mod error;
pub mod filter;
pub mod history;
pub mod lexer;
mod observability;
pub mod parser;
pub mod table;
pub mod value;

pub use ast::{CompareOp, OrExpr, Token};
pub use columns::ColumnMap;
pub use error::{Error, FilterError, Result, SyntaxError};
pub use filter::TableFilter;
pub use lexer::Lexer;
pub use parser::Parser;
pub use table::{Row, SimpleTable};

/// Parses and compiles `query` for a table with the given column names.
///
/// Blank query text yields a filter that keeps every row.
///
/// # Examples
///
/// ```
/// let filter = table_filter::parse("NOT col1 = 'b'", ["col1", "col2"]).unwrap();
/// let rows = [["a", "x"], ["b", "y"]];
/// assert_eq!(table_filter::apply(&filter, &rows), vec![&rows[0]]);
/// ```
pub fn parse<I, S>(query: &str, column_names: I) -> Result<TableFilter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TableFilter::parse(query, &ColumnMap::new(column_names))
}

/// Keeps the rows `filter` accepts, in their original order.
pub fn apply<I>(filter: &TableFilter, rows: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Row,
{
    filter.apply(rows)
}
