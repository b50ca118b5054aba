//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the sandboxed evaluation engine.
//! CONTEXT: Composes the parser and the evaluator behind `safe_eval`, the
//! single recommended entry point for front ends: string in, number or
//! typed error out. The engine performs no I/O of any kind; callers decide
//! how failures are presented.

pub mod arith;
pub mod error;
pub mod evaluator;

// Re-export commonly used types at the crate root
pub use error::{EvalError, EvalResult, EvaluationError};
pub use evaluator::{evaluate, Evaluator, DEFAULT_MAX_DEPTH};
pub use parser::{parse, BinaryOperator, Expression, Number, ParseError, UnaryOperator};

/// Parses and evaluates an expression string in one step.
///
/// Whichever failure occurs first is returned: a `ParseError` if the text
/// is not one well-formed numeric expression, or an `EvalError` if the
/// arithmetic itself fails (division by zero, overflow, depth ceiling).
pub fn safe_eval(input: &str) -> Result<Number, EvaluationError> {
    let expr = parser::parse(input)?;
    let value = evaluator::evaluate(&expr)?;
    Ok(value)
}
