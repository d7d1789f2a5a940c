use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Column references
    /// Bare column name
    ///
    /// Starts with a letter or underscore, followed by letters, digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// col1
    /// _id
    /// ```
    Identifier(String),

    /// Column name in double quotes, escapes already resolved
    ///
    /// # Examples
    /// ```text
    /// "first name"
    /// "say \"hi\""
    /// ```
    QuotedIdentifier(String),

    /// Positional column reference
    ///
    /// `$0` is the row position, `$1` the first column.
    ///
    /// # Examples
    /// ```text
    /// $0
    /// $2
    /// ```
    DollarIndex(usize),

    // Literals
    /// String literal in single quotes, escapes already resolved
    ///
    /// # Examples
    /// ```text
    /// 'hello'
    /// 'it\'s'
    /// ```
    String(String),

    // Comparison
    /// `=`
    Eq,
    /// `<>`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `LIKE` (any case)
    Like,
    /// `ILIKE` (any case)
    ILike,
    /// `REGEX` (any case)
    Regex,

    // Logical
    /// `AND` (any case)
    And,
    /// `OR` (any case)
    Or,
    /// `NOT` (any case)
    Not,

    // Delimiters
    LParen,
    RParen,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::QuotedIdentifier(name) => write!(f, "quoted identifier \"{}\"", name),
            Token::DollarIndex(n) => write!(f, "'${}'", n),
            Token::String(s) => write!(f, "string '{}'", s),
            Token::Eq => write!(f, "'='"),
            Token::NotEq => write!(f, "'<>'"),
            Token::Lt => write!(f, "'<'"),
            Token::Gt => write!(f, "'>'"),
            Token::LtEq => write!(f, "'<='"),
            Token::GtEq => write!(f, "'>='"),
            Token::Like => write!(f, "'LIKE'"),
            Token::ILike => write!(f, "'ILIKE'"),
            Token::Regex => write!(f, "'REGEX'"),
            Token::And => write!(f, "'AND'"),
            Token::Or => write!(f, "'OR'"),
            Token::Not => write!(f, "'NOT'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
