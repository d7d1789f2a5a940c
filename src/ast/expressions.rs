use crate::ast::CompareOp;

/// Root of every parse tree: a disjunction of one or more conjunctions.
///
/// # Example
/// ```text
/// a = 'x' OR b = 'y'
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrExpr {
    pub children: Vec<AndExpr>,
}

/// Conjunction of one or more (possibly negated) terms.
///
/// # Example
/// ```text
/// a = 'x' AND NOT b = 'y'
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AndExpr {
    pub children: Vec<NotExpr>,
}

/// Optional negation. `NOT` nests to the right, so `NOT NOT x` is valid.
#[derive(Debug, Clone, PartialEq)]
pub enum NotExpr {
    Not(Box<NotExpr>),
    Primary(Primary),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// Parenthesised sub-expression
    Group(Box<OrExpr>),
    Comparison(Comparison),
}

/// A single `column op value` or `column op column` test.
///
/// The left side is always a column. When the right side is a literal it is
/// the pattern for `LIKE`, `ILIKE` and `REGEX`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub op: CompareOp,
    pub left: ColumnRef,
    pub right: Operand,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(ColumnRef),
    /// Single-quoted literal with escapes resolved
    Literal(String),
}

/// Reference to a column, or to the row position.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRef {
    /// Bare identifier (`col1`)
    ByName(String),
    /// Double-quoted name (`"first name"`)
    ByQuotedName(String),
    /// 1-based position (`$1`, `$2`, ...)
    ByIndex(usize),
    /// `$0`: the 1-based position of the row within the rows being filtered
    RowOrdinal,
}
