//! FILENAME: engine/src/error.rs
//! PURPOSE: Error taxonomy for expression evaluation.
//! CONTEXT: Every failure the engine can produce is one of these typed
//! variants. Evaluation failures are deterministic functions of the input,
//! so nothing is retried and nothing is logged; errors are returned to the
//! caller, and presentation is the front end's job.

use parser::ParseError;
use thiserror::Error;

/// Failures that can occur while evaluating a parsed expression.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvalError {
    /// Exact zero divisor for /, //, or %.
    #[error("division by zero")]
    DivisionByZero,

    /// An operator applied to operands outside its numeric domain
    /// (e.g. floor division of complex numbers). Never silently tolerated.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The tree is too deep to walk safely, or a result does not fit the
    /// numeric representation (integer overflow, oversized exponent).
    #[error("resource limit exceeded: {0}")]
    ResourceLimitExceeded(String),
}

/// Result type alias for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Union of parse-time and eval-time failures, produced by `safe_eval`.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
