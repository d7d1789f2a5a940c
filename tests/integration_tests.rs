use table_filter::{
    apply, parse, ColumnMap, Error, FilterError, Row, SimpleTable, TableFilter,
};

fn sample_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["a", "aaaa"],
        vec!["a", "iiiii"],
        vec!["a", "ccccc"],
        vec!["a", "dddd"],
        vec!["a", "eeeee"],
        vec!["b", "fffff"],
        vec!["b", "ggggg"],
        vec!["b", "12345"],
    ]
}

fn filter_rows<'a>(query: &str, columns: &[&str], rows: &'a [Vec<&'static str>]) -> Vec<&'a Vec<&'static str>> {
    let filter = parse(query, columns).unwrap();
    apply(&filter, rows)
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_mixed_query() {
    let rows = sample_rows();
    let query = r#"(col1 = 'a' AND ($2 > 'h' OR $0 > '3')) OR "col2" regex '[0-9]+'"#;

    let result = filter_rows(query, &["col1", "col2"], &rows);

    assert_eq!(
        result,
        vec![
            &vec!["a", "iiiii"],
            &vec!["a", "dddd"],
            &vec!["a", "eeeee"],
            &vec!["b", "12345"],
        ]
    );
}

#[test]
fn test_owned_rows() {
    let filter = parse("$1 = 'b'", ["col1", "col2"]).unwrap();
    let result = filter.apply(sample_rows());
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|row| row[0] == "b"));
}

#[test]
fn test_blank_query_keeps_everything() {
    let rows = sample_rows();
    for query in ["", "   ", "\t\n "] {
        let filter = parse(query, ["col1", "col2"]).unwrap();
        assert!(filter.is_accept_all());
        let result = apply(&filter, &rows);
        assert_eq!(result, rows.iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_blank_query_ignores_bad_columns() {
    let filter = parse("  ", Vec::<String>::new()).unwrap();
    assert!(filter.is_accept_all());
}

#[test]
fn test_no_match_is_empty() {
    let rows = sample_rows();
    assert!(filter_rows("col1 = 'z'", &["col1", "col2"], &rows).is_empty());
}

#[test]
fn test_empty_input() {
    let filter = parse("col1 = 'a'", ["col1"]).unwrap();
    let rows: Vec<Vec<String>> = Vec::new();
    assert!(filter.apply(&rows).is_empty());
}

// ============================================================================
// Column resolution errors
// ============================================================================

#[test]
fn test_unknown_column() {
    let err = parse("unknown_col = 'x'", ["col1", "col2"]).unwrap_err();
    assert_eq!(
        err,
        Error::Filter(FilterError::UnknownColumn("unknown_col".to_string()))
    );
    assert_eq!(err.to_string(), "unknown column: unknown_col");
}

#[test]
fn test_unknown_column_on_right_side() {
    let err = parse("col1 = nope", ["col1"]).unwrap_err();
    assert!(matches!(err, Error::Filter(FilterError::UnknownColumn(ref n)) if n == "nope"));
}

#[test]
fn test_unknown_column_inside_short_circuit() {
    // Resolution happens before any row is seen, even on branches that
    // would never be evaluated.
    let err = parse("col1 = 'a' OR missing = 'x'", ["col1"]).unwrap_err();
    assert!(matches!(err, Error::Filter(FilterError::UnknownColumn(_))));
}

#[test]
fn test_duplicate_columns_reject_names() {
    let err = parse("x = 'a'", ["x", "x"]).unwrap_err();
    assert!(matches!(
        err,
        Error::Filter(FilterError::UnresolvableColumns { .. })
    ));
    assert!(err.to_string().contains("duplicate column name 'x'"));
}

#[test]
fn test_duplicate_columns_allow_positions() {
    let rows = vec![vec!["1", "2"], vec!["3", "3"]];
    let filter = parse("$1 = $2", ["x", "x"]).unwrap();
    assert_eq!(filter.apply(&rows), vec![&rows[1]]);
}

#[test]
fn test_no_columns_reject_names() {
    let err = parse("a = 'b'", Vec::<&str>::new()).unwrap_err();
    assert!(err.to_string().contains("no columns"));
}

#[test]
fn test_missing_column_name() {
    let columns = ColumnMap::from_nullable([Some("a"), None]);
    let err = TableFilter::parse("a = 'x'", &columns).unwrap_err();
    assert!(err.to_string().contains("column 2 has no name"));

    let filter = TableFilter::parse("$2 = 'x'", &columns).unwrap();
    assert!(filter.matches(&["q", "x"], 0));
}

#[test]
fn test_syntax_error_kind() {
    let err = parse("col1 = ", ["col1"]).unwrap_err();
    match err {
        Error::Syntax(e) => assert_eq!(e.position, 7),
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_compiling_twice_is_identical() {
    let rows = sample_rows();
    let query = "col2 > 'd' AND NOT col2 ILIKE 'E' OR $0 <= '2'";
    let first = filter_rows(query, &["col1", "col2"], &rows);
    let second = filter_rows(query, &["col1", "col2"], &rows);
    assert_eq!(first, second);
}

#[test]
fn test_or_and_precedence() {
    let filter = parse("p = 't' OR q = 't' AND r = 't'", ["p", "q", "r"]).unwrap();
    let grouped = parse("p = 't' OR (q = 't' AND r = 't')", ["p", "q", "r"]).unwrap();

    for bits in 0..8u8 {
        let (p, q, r) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
        let cell = |b: bool| if b { "t" } else { "f" };
        let row = [cell(p), cell(q), cell(r)];

        assert_eq!(filter.matches(&row, 0), p || (q && r), "p={} q={} r={}", p, q, r);
        assert_eq!(filter.matches(&row, 0), grouped.matches(&row, 0));
    }
}

#[test]
fn test_row_ordinal_is_text() {
    let rows: Vec<Vec<String>> = (0..35).map(|i| vec![format!("row{}", i)]).collect();
    let filter = parse("$0 > '3'", ["name"]).unwrap();

    let positions: Vec<usize> = filter
        .apply(&rows)
        .iter()
        .map(|row| row[0][3..].parse::<usize>().unwrap() + 1)
        .collect();

    let expected: Vec<usize> = (4..=9).chain(30..=35).collect();
    assert_eq!(positions, expected);
}

#[test]
fn test_row_ordinal_counts_within_input() {
    let rows = sample_rows();
    let filter = parse("$0 = '1'", ["col1", "col2"]).unwrap();

    assert_eq!(filter.apply(&rows[3..]), vec![&rows[3]]);
    assert_eq!(filter.apply(&rows[6..]), vec![&rows[6]]);
}

#[test]
fn test_ragged_rows_read_absent() {
    let rows = vec![vec!["a"], vec!["b", "x"]];
    let filter = parse("$2 = 'x'", ["c1", "c2"]).unwrap();
    assert_eq!(filter.apply(&rows), vec![&rows[1]]);

    let filter = parse("$5 < 'a'", ["c1", "c2"]).unwrap();
    assert_eq!(filter.apply(&rows).len(), 2);
}

#[test]
fn test_nullable_cells() {
    let rows: Vec<Vec<Option<&str>>> = vec![vec![Some("a"), None], vec![Some("b"), Some("")]];
    let filter = parse("$2 = ''", ["c1", "c2"]).unwrap();
    assert_eq!(filter.apply(&rows), vec![&rows[1]]);

    let filter = parse("c2 = $9", ["c1", "c2"]).unwrap();
    assert_eq!(filter.apply(&rows), vec![&rows[0]]);
}

#[test]
fn test_filter_is_shareable_across_threads() {
    let filter = std::sync::Arc::new(parse("col2 LIKE 'e'", ["col1", "col2"]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let filter = filter.clone();
            std::thread::spawn(move || filter.apply(sample_rows()).len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}

#[test]
fn test_custom_row_type() {
    struct Record {
        id: String,
        tag: Option<String>,
    }

    impl Row for Record {
        fn get(&self, index: usize) -> Option<&str> {
            match index {
                0 => Some(self.id.as_str()),
                1 => self.tag.as_deref(),
                _ => None,
            }
        }
    }

    let records = vec![
        Record { id: "1".into(), tag: None },
        Record { id: "2".into(), tag: Some("keep".into()) },
    ];
    let filter = parse("tag = 'keep' OR id < '1'", ["id", "tag"]).unwrap();
    let kept = filter.apply(&records);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "2");
}

#[test]
fn test_simple_table() {
    let table = SimpleTable::from_strings(
        &["name", "city"],
        &[&["ann", "Rome"], &["bob", "Oslo"], &["cy", "Roma"]],
    );
    let filter = TableFilter::parse("city REGEX 'Rom.'", &table.column_map()).unwrap();
    let result = table.filtered(&filter);
    assert_eq!(result.len(), 2);
    assert_eq!(result.rows()[1][0].as_deref(), Some("cy"));
    assert_eq!(filter.query(), "city REGEX 'Rom.'");
}
