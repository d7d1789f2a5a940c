//! Column resolution: turning [`ColumnRef`]s into row indices.

use std::{borrow::Cow, collections::HashMap};

use crate::{
    ast::ColumnRef,
    error::{ColumnMapIssue, FilterError},
    observability::log_debug,
    table::Row,
};

/// Where a resolved column reference reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Zero-based cell index
    Cell(usize),
    /// Position of the row being tested
    RowOrdinal,
}

impl ColumnSource {
    /// Reads this column from `row`, the `ordinal`-th (zero-based) row being
    /// filtered. The row position is rendered 1-based, as text.
    pub fn read<'r>(self, row: &'r dyn Row, ordinal: usize) -> Option<Cow<'r, str>> {
        match self {
            ColumnSource::Cell(index) => row.get(index).map(Cow::Borrowed),
            ColumnSource::RowOrdinal => Some(Cow::Owned((ordinal + 1).to_string())),
        }
    }
}

/// Name to zero-based index lookup for one set of columns.
///
/// Name lookup is only available when every column has a name, the names are
/// distinct and there is at least one column. Otherwise the map remembers why,
/// and every name-based reference fails with
/// [`FilterError::UnresolvableColumns`]. Positional references always work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    names: Result<HashMap<String, usize>, ColumnMapIssue>,
}

impl ColumnMap {
    /// Builds the lookup from column names.
    ///
    /// # Examples
    ///
    /// ```
    /// use table_filter::columns::{ColumnMap, ColumnSource};
    /// use table_filter::ast::ColumnRef;
    ///
    /// let map = ColumnMap::new(["id", "name"]);
    /// let name = map.resolve(&ColumnRef::ByName("name".into())).unwrap();
    /// assert_eq!(name, ColumnSource::Cell(1));
    /// ```
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        Self::from_nullable(names.iter().map(|name| Some(name.as_ref())))
    }

    /// Builds the lookup from column names that may be absent.
    pub fn from_nullable<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut map: HashMap<String, usize> = HashMap::new();
        let mut issue = None;

        for (index, name) in names.into_iter().enumerate() {
            match name {
                None => {
                    issue = Some(ColumnMapIssue::MissingName(index));
                    break;
                }
                Some(name) if map.contains_key(name) => {
                    issue = Some(ColumnMapIssue::Duplicate(name.to_string()));
                    break;
                }
                Some(name) => {
                    map.insert(name.to_string(), index);
                }
            }
        }

        if issue.is_none() && map.is_empty() {
            issue = Some(ColumnMapIssue::Empty);
        }

        match issue {
            Some(issue) => {
                log_debug!(event = "column_names_unusable", reason = %issue);
                ColumnMap { names: Err(issue) }
            }
            None => ColumnMap { names: Ok(map) },
        }
    }

    /// Whether columns can be referenced by name.
    pub fn supports_names(&self) -> bool {
        self.names.is_ok()
    }

    /// Why name lookup is unavailable, if it is.
    pub fn issue(&self) -> Option<&ColumnMapIssue> {
        self.names.as_ref().err()
    }

    /// Index of the column called `name`.
    pub fn index_of(&self, name: &str) -> Result<usize, FilterError> {
        let names = self
            .names
            .as_ref()
            .map_err(|issue| FilterError::UnresolvableColumns {
                name: name.to_string(),
                issue: issue.clone(),
            })?;

        names
            .get(name)
            .copied()
            .ok_or_else(|| FilterError::UnknownColumn(name.to_string()))
    }

    /// Resolves a column reference.
    ///
    /// `$N` maps to cell `N - 1` without consulting the names, `$0` (and a
    /// hand-built `ByIndex(0)`) to the row position.
    pub fn resolve(&self, column: &ColumnRef) -> Result<ColumnSource, FilterError> {
        match column {
            ColumnRef::RowOrdinal | ColumnRef::ByIndex(0) => Ok(ColumnSource::RowOrdinal),
            ColumnRef::ByIndex(n) => Ok(ColumnSource::Cell(n - 1)),
            ColumnRef::ByName(name) | ColumnRef::ByQuotedName(name) => {
                self.index_of(name).map(ColumnSource::Cell)
            }
        }
    }
}
