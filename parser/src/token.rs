//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.
//! Identifier and string tokens exist only so the parser can reject them by name;
//! they can never appear in a parsed expression.

use crate::ast::Number;

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A numeric literal: integer, float, or imaginary (2j).
    Number(Number),
    /// A name like `x` or `__import__`. Always rejected by the parser.
    Identifier(String),
    /// A quoted string literal. Always rejected by the parser.
    String(String),

    // Operators
    Plus,
    Minus,
    Asterisk,
    /// Exponentiation: **
    DoubleAsterisk,
    Slash,
    /// Floor division: //
    DoubleSlash,
    Percent,

    // Delimiters
    LParen,
    RParen,

    // Special
    EOF,
    Illegal(char),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::DoubleAsterisk => write!(f, "**"),
            Token::Slash => write!(f, "/"),
            Token::DoubleSlash => write!(f, "//"),
            Token::Percent => write!(f, "%"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::EOF => write!(f, "EOF"),
            Token::Illegal(c) => write!(f, "ILLEGAL({})", c),
        }
    }
}
