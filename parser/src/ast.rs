//! FILENAME: parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for numeric expressions.
//! CONTEXT: After the Lexer tokenizes an input string, the Parser converts
//! those tokens into this tree structure. The Evaluator then traverses
//! this tree to compute the final result.
//!
//! SUPPORTED EXPRESSIONS:
//! - Literals: integers, floats, imaginary numbers (2j)
//! - Binary operations: +, -, *, /, //, %, **
//! - Unary operations: + (identity), - (negation)
//! - Parentheses for grouping
//!
//! The enum is deliberately closed: numeric literals, two unary operators,
//! and seven binary operators are the entire language. Names, calls,
//! indexing, and every other construct are unrepresentable, which is the
//! security property the whole workspace exists to provide.

use num_complex::Complex64;

/// Represents a parsed expression.
/// This is the core data structure that the evaluator will traverse.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    /// A literal numeric value.
    Literal(Number),

    /// A unary operation: op operand (e.g., -5, +2).
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// A binary operation: left op right (e.g., 5 + 3, 2 ** 10).
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
}

/// A numeric value: the three-level numeric tower.
///
/// The literal's source form decides the variant: `7` is `Int`, `7.0`,
/// `1e3`, and `.5` are `Float`, `2j` is `Complex`. Arithmetic promotes
/// upward (int -> float -> complex), never downward.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
    Complex(Complex64),
}

impl Number {
    /// Widens any variant to a complex value.
    pub fn to_complex(self) -> Complex64 {
        match self {
            Number::Int(i) => Complex64::new(i as f64, 0.0),
            Number::Float(f) => Complex64::new(f, 0.0),
            Number::Complex(c) => c,
        }
    }
}

/// Binary operators for expressions.
/// Listed in order of precedence groups (additive is lowest).
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOperator {
    // Additive operators (lowest precedence)
    Add,      // +
    Subtract, // -

    // Multiplicative operators
    Multiply,    // *
    Divide,      // /
    FloorDivide, // //
    Modulo,      // %

    // Exponentiation (highest precedence, right-associative)
    Power, // **
}

/// Unary operators.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UnaryOperator {
    Plus,   // + (identity)
    Negate, // -
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::FloorDivide => write!(f, "//"),
            BinaryOperator::Modulo => write!(f, "%"),
            BinaryOperator::Power => write!(f, "**"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(n) => write!(f, "{}", float_repr(*n)),
            Number::Complex(c) => {
                // Components print without a trailing .0, matching the
                // conventional complex rendering: 2j, (1+2j), (1-2.5j).
                if c.re == 0.0 {
                    write!(f, "{}j", c.im)
                } else if c.im.is_sign_negative() {
                    write!(f, "({}{}j)", c.re, c.im)
                } else {
                    write!(f, "({}+{}j)", c.re, c.im)
                }
            }
        }
    }
}

/// Formats a float so that whole values keep a decimal point (7 -> "7.0"),
/// preserving the visible int/float distinction in results.
fn float_repr(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
