//! # Filter Query Language - Abstract Syntax Tree
//!
//! A filter query is a boolean expression over the columns of a table:
//!
//! ```text
//! (col1 = 'a' AND ($2 > 'h' OR $0 > '3')) OR "col2" REGEX '[0-9]+'
//! ```
//!
//! ## Organization
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - The parse tree (`OR` / `AND` / `NOT` / comparison)
//! - **[operators]** - Comparison operators
//!
//! ## Precedence
//!
//! From loosest to tightest: `OR`, `AND`, `NOT`, comparison, parentheses.
//! `p OR q AND r` therefore reads as `p OR (q AND r)`.
//!
//! ## Column references
//!
//! | form       | meaning                                     |
//! |------------|---------------------------------------------|
//! | `name`     | column called `name`                        |
//! | `"a b"`    | column called `a b` (`\"` and `\\` escapes) |
//! | `$3`       | third column, whatever its name             |
//! | `$0`       | 1-based position of the row being tested    |
//!
//! Literals are single-quoted: `'it\'s'`. All values are compared as text.
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{AndExpr, ColumnRef, Comparison, NotExpr, Operand, OrExpr, Primary};
pub use operators::CompareOp;
pub use tokens::Token;
