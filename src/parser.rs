use crate::{
    ast::{AndExpr, ColumnRef, CompareOp, Comparison, NotExpr, Operand, OrExpr, Primary, Token},
    error::SyntaxError,
    lexer::Lexer,
};
use std::mem;

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, SyntaxError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_start();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
        })
    }

    fn advance(&mut self) -> Result<(), SyntaxError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_start();
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), SyntaxError> {
        if !self.check(&expected) {
            return Err(self.unexpected(&format!("{}", expected)));
        }
        self.advance()
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        SyntaxError::new(
            self.current_position,
            format!("Expected {}, got {}", expected, self.current_token),
        )
    }

    /// column := "$" digits | quotedIdent | ident
    fn parse_column(&mut self) -> Result<ColumnRef, SyntaxError> {
        let column = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::DollarIndex(0) => ColumnRef::RowOrdinal,
            Token::DollarIndex(n) => ColumnRef::ByIndex(n),
            Token::QuotedIdentifier(name) => ColumnRef::ByQuotedName(name),
            Token::Identifier(name) => ColumnRef::ByName(name),
            token => {
                self.current_token = token;
                return Err(self.unexpected("column reference"));
            }
        };
        self.advance()?;
        Ok(column)
    }

    fn parse_operator(&mut self) -> Result<CompareOp, SyntaxError> {
        let op = match &self.current_token {
            Token::Eq => CompareOp::Equal,
            Token::NotEq => CompareOp::NotEqual,
            Token::Lt => CompareOp::LessThan,
            Token::Gt => CompareOp::GreaterThan,
            Token::LtEq => CompareOp::LessEqual,
            Token::GtEq => CompareOp::GreaterEqual,
            Token::Like => CompareOp::Like,
            Token::ILike => CompareOp::ILike,
            Token::Regex => CompareOp::Regex,
            _ => return Err(self.unexpected("comparison operator")),
        };
        self.advance()?;
        Ok(op)
    }

    /// comparison := column op value | column op column
    fn parse_comparison(&mut self) -> Result<Comparison, SyntaxError> {
        let left = self.parse_column()?;
        let op = self.parse_operator()?;

        let right = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::String(value) => {
                self.advance()?;
                Operand::Literal(value)
            }
            token @ (Token::Identifier(_) | Token::QuotedIdentifier(_) | Token::DollarIndex(_)) => {
                self.current_token = token;
                Operand::Column(self.parse_column()?)
            }
            token => {
                self.current_token = token;
                return Err(self.unexpected("string literal or column reference"));
            }
        };

        Ok(Comparison { op, left, right })
    }

    /// primary := "(" expr ")" | comparison
    fn parse_primary(&mut self) -> Result<Primary, SyntaxError> {
        if self.check(&Token::LParen) {
            self.advance()?;
            let expr = self.parse_or()?;
            self.expect(Token::RParen)?;
            return Ok(Primary::Group(Box::new(expr)));
        }
        Ok(Primary::Comparison(self.parse_comparison()?))
    }

    /// notExpr := "NOT" notExpr | primary
    fn parse_not(&mut self) -> Result<NotExpr, SyntaxError> {
        if self.check(&Token::Not) {
            self.advance()?;
            let inner = self.parse_not()?; // Right-associative
            return Ok(NotExpr::Not(Box::new(inner)));
        }
        Ok(NotExpr::Primary(self.parse_primary()?))
    }

    fn parse_and(&mut self) -> Result<AndExpr, SyntaxError> {
        let mut children = vec![self.parse_not()?];

        while self.check(&Token::And) {
            self.advance()?;
            children.push(self.parse_not()?);
        }
        Ok(AndExpr { children })
    }

    fn parse_or(&mut self) -> Result<OrExpr, SyntaxError> {
        let mut children = vec![self.parse_and()?];

        while self.check(&Token::Or) {
            self.advance()?;
            children.push(self.parse_and()?);
        }
        Ok(OrExpr { children })
    }

    /// Parses a complete query; anything left after the expression is an error.
    pub fn parse(&mut self) -> Result<OrExpr, SyntaxError> {
        let expr = self.parse_or()?;
        if !self.check(&Token::Eof) {
            return Err(self.unexpected("AND, OR or end of input"));
        }
        Ok(expr)
    }
}

/// Tokenizes and parses `query` into its parse tree.
pub fn parse_query(query: &str) -> Result<OrExpr, SyntaxError> {
    Parser::new(Lexer::new(query))?.parse()
}
