//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates AST expressions to compute numeric values.
//! CONTEXT: After an expression is parsed into an AST, this module
//! traverses the tree bottom-up and computes the final result. Operator
//! semantics live in the arith module; this one handles dispatch, strict
//! left-to-right operand evaluation, and the recursion-depth ceiling.
//!
//! The match over Expression is exhaustive with no catch-all arm: the AST
//! is a closed enum, so a node kind the evaluator does not handle cannot
//! exist, and adding an operator without handling it here is a compile
//! error. That is the whole containment argument - there is nothing to
//! forget to blacklist.

use crate::arith;
use crate::error::{EvalError, EvalResult};
use parser::{BinaryOperator, Expression, Number, UnaryOperator};

/// Default ceiling on evaluation recursion depth. Matches the parser's
/// ceiling; it only matters for trees constructed directly rather than
/// parsed from text.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// The expression evaluator.
/// Stateless apart from its configured depth ceiling; a single instance
/// can evaluate any number of trees, from any number of threads.
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

impl Evaluator {
    /// Creates a new Evaluator with the default depth ceiling.
    pub fn new() -> Self {
        Evaluator {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a new Evaluator with a custom depth ceiling.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Evaluator { max_depth }
    }

    /// Evaluates an AST expression and returns the computed value.
    pub fn evaluate(&self, expr: &Expression) -> EvalResult<Number> {
        self.eval_node(expr, 0)
    }

    fn eval_node(&self, expr: &Expression, depth: usize) -> EvalResult<Number> {
        if depth > self.max_depth {
            return Err(EvalError::ResourceLimitExceeded(format!(
                "expression tree exceeds the maximum evaluation depth of {}",
                self.max_depth
            )));
        }

        match expr {
            Expression::Literal(value) => Ok(*value),

            Expression::UnaryOp { op, operand } => {
                let value = self.eval_node(operand, depth + 1)?;
                match op {
                    UnaryOperator::Plus => Ok(value),
                    UnaryOperator::Negate => arith::negate(value),
                }
            }

            Expression::BinaryOp { left, op, right } => {
                // Strict left-to-right: a failing left operand surfaces
                // before the right operand is evaluated.
                let lhs = self.eval_node(left, depth + 1)?;
                let rhs = self.eval_node(right, depth + 1)?;
                apply_binary(*op, lhs, rhs)
            }
        }
    }
}

/// Applies a binary operator to two computed operands.
fn apply_binary(op: BinaryOperator, lhs: Number, rhs: Number) -> EvalResult<Number> {
    match op {
        BinaryOperator::Add => arith::add(lhs, rhs),
        BinaryOperator::Subtract => arith::subtract(lhs, rhs),
        BinaryOperator::Multiply => arith::multiply(lhs, rhs),
        BinaryOperator::Divide => arith::divide(lhs, rhs),
        BinaryOperator::FloorDivide => arith::floor_divide(lhs, rhs),
        BinaryOperator::Modulo => arith::modulo(lhs, rhs),
        BinaryOperator::Power => arith::power(lhs, rhs),
    }
}

/// Convenience function to evaluate with the default depth ceiling.
pub fn evaluate(expr: &Expression) -> EvalResult<Number> {
    Evaluator::new().evaluate(expr)
}
