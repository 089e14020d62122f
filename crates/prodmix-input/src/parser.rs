use crate::lexer::{Lexer, Span, Token, TokenKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected token: expected {expected}, found '{found}' at position {span:?}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },
    #[error("Invalid number '{text}' at position {span:?}")]
    InvalidNumber { text: String, span: Span },
    #[error("Invalid variable count '{0}': expected a positive whole number")]
    InvalidCount(String),
    #[error("No values given")]
    Empty,
    #[error("Row {row} of the matrix is empty")]
    EmptyRow { row: usize },
    #[error("Expected {expected} {what}, found {found}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Parser for the whitespace and comma separated number lists
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse a variable count such as `"3"`
    pub fn parse_count(source: &str) -> Result<usize, ParseError> {
        let mut parser = Parser::new(Lexer::tokenize(source));
        let token = parser.expect(TokenKind::Number).map_err(|e| match e {
            ParseError::UnexpectedToken { found, .. } if found.is_empty() => ParseError::Empty,
            other => other,
        })?;
        parser.expect(TokenKind::Eof)?;

        match token.text.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ParseError::InvalidCount(token.text)),
        }
    }

    /// Parse a whitespace separated list of exactly `expected` numbers,
    /// such as `"3000 2000 3000"`
    pub fn parse_vector(source: &str, expected: usize, what: &'static str) -> Result<Vec<f64>, ParseError> {
        let mut parser = Parser::new(Lexer::tokenize(source));
        let values = parser.parse_numbers()?;
        parser.expect(TokenKind::Eof)?;

        if values.is_empty() {
            return Err(ParseError::Empty);
        }
        if values.len() != expected {
            return Err(ParseError::CountMismatch {
                what,
                expected,
                found: values.len(),
            });
        }
        Ok(values)
    }

    /// Parse an `n x n` matrix written one row per comma, such as
    /// `"2 1 8,4 2 0,5 4 3"`
    pub fn parse_matrix(source: &str, n: usize) -> Result<Vec<Vec<f64>>, ParseError> {
        let mut parser = Parser::new(Lexer::tokenize(source));
        if parser.peek_kind() == TokenKind::Eof {
            return Err(ParseError::Empty);
        }

        let mut rows = Vec::new();
        loop {
            let row = parser.parse_numbers()?;
            if row.is_empty() {
                return Err(ParseError::EmptyRow { row: rows.len() + 1 });
            }
            rows.push(row);

            match parser.peek_kind() {
                TokenKind::Comma => {
                    parser.advance();
                }
                _ => {
                    parser.expect(TokenKind::Eof)?;
                    break;
                }
            }
        }

        if rows.len() != n {
            return Err(ParseError::CountMismatch {
                what: "matrix rows",
                expected: n,
                found: rows.len(),
            });
        }
        for row in &rows {
            if row.len() != n {
                return Err(ParseError::CountMismatch {
                    what: "entries per matrix row",
                    expected: n,
                    found: row.len(),
                });
            }
        }
        Ok(rows)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> TokenKind {
        self.current().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.current().cloned();
        match token {
            Some(t) if t.kind == kind => {
                self.advance();
                Ok(t)
            }
            Some(t) => Err(ParseError::UnexpectedToken {
                expected: format!("{:?}", kind),
                found: t.text,
                span: t.span,
            }),
            None => Err(ParseError::Empty),
        }
    }

    /// Numbers up to the next comma or end of input
    fn parse_numbers(&mut self) -> Result<Vec<f64>, ParseError> {
        let mut values = Vec::new();
        while self.peek_kind() == TokenKind::Number {
            let token = self.expect(TokenKind::Number)?;
            let value = token.text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                text: token.text.clone(),
                span: token.span,
            })?;
            values.push(value);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(Parser::parse_count(" 3 ").unwrap(), 3);
        assert_eq!(
            Parser::parse_count("0").unwrap_err(),
            ParseError::InvalidCount("0".to_string())
        );
        assert_eq!(
            Parser::parse_count("2.5").unwrap_err(),
            ParseError::InvalidCount("2.5".to_string())
        );
        assert_eq!(Parser::parse_count("").unwrap_err(), ParseError::Empty);
        assert!(matches!(
            Parser::parse_count("2 3").unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
        assert!(matches!(
            Parser::parse_count("two").unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_parse_vector() {
        let values = Parser::parse_vector("3000 2000 3000", 3, "profits").unwrap();
        assert_eq!(values, vec![3000.0, 2000.0, 3000.0]);

        let values = Parser::parse_vector("\t750   1000.5 ", 2, "limits").unwrap();
        assert_eq!(values, vec![750.0, 1000.5]);
    }

    #[test]
    fn test_parse_vector_errors() {
        assert_eq!(
            Parser::parse_vector("1 2", 3, "profits").unwrap_err(),
            ParseError::CountMismatch {
                what: "profits",
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Parser::parse_vector("  ", 3, "profits").unwrap_err(), ParseError::Empty);

        let err = Parser::parse_vector("1 2..5", 2, "profits").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                text: "2..5".to_string(),
                span: Span::new(2, 6)
            }
        );

        let err = Parser::parse_vector("1,2", 2, "profits").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == ","));
    }

    #[test]
    fn test_parse_matrix() {
        let matrix = Parser::parse_matrix("2 1 8,4 2 0,5 4 3", 3).unwrap();
        assert_eq!(
            matrix,
            vec![
                vec![2.0, 1.0, 8.0],
                vec![4.0, 2.0, 0.0],
                vec![5.0, 4.0, 3.0]
            ]
        );

        let matrix = Parser::parse_matrix("1 2 , 1.5 1", 2).unwrap();
        assert_eq!(matrix, vec![vec![1.0, 2.0], vec![1.5, 1.0]]);
    }

    #[test]
    fn test_parse_matrix_errors() {
        assert_eq!(Parser::parse_matrix("", 2).unwrap_err(), ParseError::Empty);
        assert_eq!(
            Parser::parse_matrix("1 2,", 2).unwrap_err(),
            ParseError::EmptyRow { row: 2 }
        );
        assert_eq!(
            Parser::parse_matrix(",1 2", 2).unwrap_err(),
            ParseError::EmptyRow { row: 1 }
        );
        assert_eq!(
            Parser::parse_matrix("1 2,3 4,5 6", 2).unwrap_err(),
            ParseError::CountMismatch {
                what: "matrix rows",
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            Parser::parse_matrix("1 2,3", 2).unwrap_err(),
            ParseError::CountMismatch {
                what: "entries per matrix row",
                expected: 2,
                found: 1
            }
        );
        assert!(matches!(
            Parser::parse_matrix("1 2;3 4", 2).unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
    }
}
