pub mod input;
pub mod lexer;
pub mod parser;

pub use input::{InputError, ProblemText, parse_problem};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use parser::{ParseError, Parser};
