//! Compiled filters and running them over rows.

use std::fmt;

use crate::{
    ast::OrExpr,
    columns::ColumnMap,
    compiler::{self, Predicate},
    error::{FilterError, Result},
    observability::{log_debug, log_trace},
    parser::parse_query,
    table::Row,
};

/// A compiled filter query.
///
/// Built once per query and column set; rebuild it when the columns change.
/// Evaluation holds no state, so one filter can be shared across threads and
/// applied any number of times.
///
/// # Examples
///
/// ```
/// use table_filter::TableFilter;
/// use table_filter::columns::ColumnMap;
///
/// let columns = ColumnMap::new(["name", "city"]);
/// let filter = TableFilter::parse("city ILIKE 'york'", &columns).unwrap();
///
/// let rows = vec![vec!["ann", "New York"], vec!["bob", "Boston"]];
/// assert_eq!(filter.apply(&rows), vec![&rows[0]]);
/// ```
pub struct TableFilter {
    query: String,
    predicate: Option<Predicate>,
}

impl TableFilter {
    /// A filter that keeps every row.
    pub fn accept_all() -> Self {
        TableFilter {
            query: String::new(),
            predicate: None,
        }
    }

    /// Parses and compiles `query` against `columns`.
    ///
    /// Blank (empty or whitespace-only) text is [`TableFilter::accept_all`]
    /// and is not tokenized at all.
    pub fn parse(query: &str, columns: &ColumnMap) -> Result<Self> {
        if query.trim().is_empty() {
            return Ok(Self::accept_all());
        }

        let tree = parse_query(query)?;
        log_trace!(event = "query_parsed", query, tree = ?tree);

        let filter = Self::compile(query, &tree, columns)?;
        log_debug!(
            event = "filter_compiled",
            query,
            terms = tree.children.len(),
            names_available = columns.supports_names(),
        );
        Ok(filter)
    }

    /// Compiles an already parsed tree. `query` is kept for display only.
    pub fn compile(
        query: &str,
        tree: &OrExpr,
        columns: &ColumnMap,
    ) -> std::result::Result<Self, FilterError> {
        Ok(TableFilter {
            query: query.to_string(),
            predicate: Some(compiler::compile(tree, columns)?),
        })
    }

    /// The query text this filter was built from (empty for accept-all).
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_accept_all(&self) -> bool {
        self.predicate.is_none()
    }

    /// Tests one row, `ordinal` being its zero-based position among the rows
    /// being filtered. `$0` reads as `ordinal + 1`.
    pub fn matches<R: Row + ?Sized>(&self, row: &R, ordinal: usize) -> bool {
        match &self.predicate {
            Some(predicate) => predicate(&row, ordinal),
            None => true,
        }
    }

    /// Keeps the rows that match, in their original order.
    ///
    /// Ordinals count from zero over exactly the rows passed in, so `$0`
    /// refers to the position within `rows`, not within some larger table.
    pub fn apply<I>(&self, rows: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Row,
    {
        rows.into_iter()
            .enumerate()
            .filter(|(ordinal, row)| self.matches(row, *ordinal))
            .map(|(_, row)| row)
            .collect()
    }
}

impl Default for TableFilter {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl fmt::Debug for TableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableFilter")
            .field("query", &self.query)
            .field("accept_all", &self.is_accept_all())
            .finish()
    }
}
