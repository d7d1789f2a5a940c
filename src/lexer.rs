use crate::{ast::Token, error::SyntaxError};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    token_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
        }
    }

    /// Character offset where the most recently returned token starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Reads a quoted run. Only `\<quote>` and `\\` are escapes; any other
    /// backslash pair is kept as written so regex classes like `\d` survive.
    fn read_quoted(&mut self, quote: char) -> Result<String, SyntaxError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some(c) if c == quote || c == '\\' => result.push(c),
                        Some(c) => {
                            result.push('\\');
                            result.push(c);
                        }
                        None => break,
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(SyntaxError::new(
            start,
            format!("Unterminated {}: missing closing {}", quoted_kind(quote), quote),
        ))
    }

    fn read_dollar_index(&mut self) -> Result<Token, SyntaxError> {
        let start = self.position;
        self.advance(); // '$'

        let mut digits = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if digits.is_empty() {
            return Err(SyntaxError::new(
                start,
                "Expected column number after '$' (e.g. $1, or $0 for the row position)",
            ));
        }

        digits
            .parse::<usize>()
            .map(Token::DollarIndex)
            .map_err(|_| SyntaxError::new(start, format!("Column index ${} is too large", digits)))
    }

    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace();
        self.token_start = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some('$') => return self.read_dollar_index(),
            Some('"') => return self.read_quoted('"').map(Token::QuotedIdentifier),
            Some('\'') => return self.read_quoted('\'').map(Token::String),
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some('=') => {
                self.advance();
                Token::Eq
            }
            Some('<') => match self.peek_char(1) {
                Some('=') => {
                    self.advance();
                    self.advance();
                    Token::LtEq
                }
                Some('>') => {
                    self.advance();
                    self.advance();
                    Token::NotEq
                }
                _ => {
                    self.advance();
                    Token::Lt
                }
            },
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::GtEq
                } else {
                    self.advance();
                    Token::Gt
                }
            }
            Some('!') => {
                return Err(SyntaxError::new(
                    self.position,
                    "Unexpected '!' (did you mean '<>' or NOT?)",
                ));
            }
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();
                keyword(&ident).unwrap_or(Token::Identifier(ident))
            }
            Some(ch) if ch.is_ascii_digit() => {
                return Err(SyntaxError::new(
                    self.position,
                    format!("Unexpected '{}': values must be quoted, e.g. '{}'", ch, ch),
                ));
            }
            Some(ch) => {
                return Err(SyntaxError::new(
                    self.position,
                    format!("Unexpected character '{}'", ch),
                ));
            }
        };

        Ok(token)
    }

    /// Lexes the whole input, pairing each token with its start offset.
    /// The final element is always `Token::Eof`.
    pub fn tokenize(mut self) -> Result<Vec<(Token, usize)>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push((token, self.token_start));
            if done {
                return Ok(tokens);
            }
        }
    }
}

fn keyword(ident: &str) -> Option<Token> {
    match ident.to_ascii_uppercase().as_str() {
        "AND" => Some(Token::And),
        "OR" => Some(Token::Or),
        "NOT" => Some(Token::Not),
        "LIKE" => Some(Token::Like),
        "ILIKE" => Some(Token::ILike),
        "REGEX" => Some(Token::Regex),
        _ => None,
    }
}

fn quoted_kind(quote: char) -> &'static str {
    if quote == '"' {
        "quoted identifier"
    } else {
        "string"
    }
}

#[test]
fn test_keywords_any_case() {
    let mut lexer = Lexer::new("and Or NOT like ILike regex");
    assert_eq!(lexer.next_token().unwrap(), Token::And);
    assert_eq!(lexer.next_token().unwrap(), Token::Or);
    assert_eq!(lexer.next_token().unwrap(), Token::Not);
    assert_eq!(lexer.next_token().unwrap(), Token::Like);
    assert_eq!(lexer.next_token().unwrap(), Token::ILike);
    assert_eq!(lexer.next_token().unwrap(), Token::Regex);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_comparison() {
    let mut lexer = Lexer::new("(col1 = 'a' AND $2 <> \"x y\")");
    assert_eq!(lexer.next_token().unwrap(), Token::LParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("col1".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eq);
    assert_eq!(lexer.next_token().unwrap(), Token::String("a".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::And);
    assert_eq!(lexer.next_token().unwrap(), Token::DollarIndex(2));
    assert_eq!(lexer.next_token().unwrap(), Token::NotEq);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::QuotedIdentifier("x y".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::RParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
