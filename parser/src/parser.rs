//! FILENAME: parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a stream of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes tokens
//! from the Lexer and builds an Expression tree that can be evaluated.
//!
//! GRAMMAR (complete - the language is nothing but this):
//!   expression     --> additive
//!   additive       --> multiplicative ( ("+" | "-") multiplicative )*
//!   multiplicative --> unary ( ("*" | "/" | "//" | "%") unary )*
//!   unary          --> ("+" | "-") unary | power
//!   power          --> primary ( "**" unary )?     // right-associative
//!   primary        --> NUMBER | "(" expression ")"
//!
//! The grammar is fail-closed by construction: there are no productions for
//! names, calls, attribute access, or non-numeric literals, so no input can
//! parse into anything the evaluator does not handle. Identifier and string
//! tokens from the lexer are rejected here with errors naming the construct.
//!
//! Precedence consequences worth noting: `**` binds tighter than unary
//! minus on its left (-2**2 parses as -(2**2)) but the exponent side goes
//! through `unary`, so 2**-3 is legal and 2**3**2 nests to the right.

use crate::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::lexer::Lexer;
use crate::token::Token;
use thiserror::Error;

/// Default ceiling on expression nesting depth. Bounds the parser's own
/// recursion against pathological inputs like ten thousand open parens.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Classifies why an input was rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseErrorKind {
    /// Empty or whitespace-only input.
    Empty,
    /// Grammatically broken input: unbalanced parens, missing operands,
    /// illegal characters, trailing tokens.
    Malformed,
    /// Syntactically scannable but outside the numeric language: names,
    /// string literals.
    Disallowed,
    /// Nesting exceeds the configured depth ceiling.
    TooDeep,
}

/// Parser errors with descriptive messages.
/// Carries the original input so callers can report failures in context.
#[derive(Debug, PartialEq, Clone, Error)]
#[error("invalid expression: {message}")]
pub struct ParseError {
    pub input: String,
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    pub fn new(input: impl Into<String>, kind: ParseErrorKind, message: impl Into<String>) -> Self {
        ParseError {
            input: input.into(),
            kind,
            message: message.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// The Parser struct holds the lexer and current token state.
pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    current_token: Token,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from an input string.
    /// Automatically advances to the first token.
    pub fn new(input: &'a str) -> Self {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    /// Creates a new parser with a custom nesting-depth ceiling.
    pub fn with_max_depth(input: &'a str, max_depth: usize) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Parser {
            input,
            lexer,
            current_token,
            depth: 0,
            max_depth,
        }
    }

    /// Parses the entire input and returns the AST.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        // Handle empty input
        if self.current_token == Token::EOF {
            return Err(self.error(ParseErrorKind::Empty, "empty expression"));
        }

        let expr = self.parse_expression()?;

        // Ensure we consumed all tokens
        if self.current_token != Token::EOF {
            return Err(self.error(
                ParseErrorKind::Malformed,
                format!("unexpected token after expression: {}", self.current_token),
            ));
        }

        Ok(expr)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    /// Checks if the current token matches the expected token.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        if self.current_token == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.error(
                ParseErrorKind::Malformed,
                format!("expected {}, found {}", expected, self.current_token),
            ))
        }
    }

    /// Builds an error carrying the original input for context.
    fn error(&self, kind: ParseErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::new(self.input, kind, message)
    }

    /// Entry point for expression parsing.
    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_additive()
    }

    /// Parses additive expressions (+ and -).
    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match &self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_multiplicative()?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses multiplicative expressions (*, /, //, %).
    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match &self.current_token {
                Token::Asterisk => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                Token::DoubleSlash => BinaryOperator::FloorDivide,
                Token::Percent => BinaryOperator::Modulo,
                _ => break,
            };

            self.advance();
            let right = self.parse_unary()?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses unary expressions (+x, -x).
    ///
    /// Every recursive cycle in the grammar passes through here (chained
    /// signs, parenthesized groups, exponent operands), so this is the one
    /// place the depth ceiling needs to be enforced.
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        self.depth += 1;
        if self.depth > self.max_depth {
            self.depth -= 1;
            return Err(self.error(
                ParseErrorKind::TooDeep,
                format!(
                    "expression nesting exceeds the maximum depth of {}",
                    self.max_depth
                ),
            ));
        }
        let result = self.parse_unary_inner();
        self.depth -= 1;
        result
    }

    fn parse_unary_inner(&mut self) -> ParseResult<Expression> {
        let op = match &self.current_token {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Negate,
            _ => return self.parse_power(),
        };

        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    /// Parses power/exponentiation expressions (**).
    /// The right operand goes through `unary`, making ** right-associative
    /// and allowing 2**-3.
    fn parse_power(&mut self) -> ParseResult<Expression> {
        let left = self.parse_primary()?;

        if self.current_token == Token::DoubleAsterisk {
            self.advance();
            let right = self.parse_unary()?;

            return Ok(Expression::BinaryOp {
                left: Box::new(left),
                op: BinaryOperator::Power,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// Parses primary expressions (literals and parenthesized groups).
    /// Everything else the lexer can produce is rejected here by name.
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        match self.current_token.clone() {
            Token::Number(n) => {
                self.advance();
                Ok(Expression::Literal(n))
            }

            // Parenthesized expression
            Token::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }

            // Rejections: constructs the language deliberately excludes
            Token::Identifier(name) => Err(self.error(
                ParseErrorKind::Disallowed,
                format!(
                    "name '{}' is not allowed: only numeric literals and arithmetic operators are supported",
                    name
                ),
            )),

            Token::String(_) => Err(self.error(
                ParseErrorKind::Disallowed,
                "string literals are not allowed: only numeric literals and arithmetic operators are supported",
            )),

            // Error cases
            Token::EOF => Err(self.error(ParseErrorKind::Malformed, "unexpected end of expression")),

            Token::Illegal(ch) => Err(self.error(
                ParseErrorKind::Malformed,
                format!("illegal character: '{}'", ch),
            )),

            token => Err(self.error(
                ParseErrorKind::Malformed,
                format!("unexpected token: {}", token),
            )),
        }
    }
}

/// Convenience function to parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<Expression> {
    let mut parser = Parser::new(input);
    parser.parse()
}

/// Parses with a custom nesting-depth ceiling.
pub fn parse_with_max_depth(input: &str, max_depth: usize) -> ParseResult<Expression> {
    let mut parser = Parser::with_max_depth(input, max_depth);
    parser.parse()
}
