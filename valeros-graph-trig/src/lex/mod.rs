//! Lexical analysis for TriG documents.

mod chars;
mod lexer;
mod token;

pub use chars::*;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
