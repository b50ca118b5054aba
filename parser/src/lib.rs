//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the sandboxed expression parser.
//! CONTEXT: This crate exposes the lexer, parser, and AST components
//! needed to convert untrusted expression strings into evaluatable trees.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Numeric literals: 42, 3.14, .5, 1e-3, 2j
//! - Arithmetic: +, -, *, /, // (floor division), %, ** (power)
//! - Unary sign: -5, +5
//! - Parentheses for grouping
//!
//! Nothing else parses. The grammar has no productions for names, calls,
//! strings, or any other host-language construct, so the rejection of
//! arbitrary code is structural rather than a filter that could be
//! bypassed.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression, Number, UnaryOperator};
pub use lexer::Lexer;
pub use parser::{
    parse, parse_with_max_depth, ParseError, ParseErrorKind, ParseResult, Parser,
    DEFAULT_MAX_DEPTH,
};
pub use token::Token;
