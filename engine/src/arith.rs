//! FILENAME: engine/src/arith.rs
//! PURPOSE: Numeric-tower arithmetic for the evaluator.
//! CONTEXT: Implements operand promotion (int -> float -> complex) and the
//! semantics of each operator on each level of the tower. The evaluator
//! dispatches here after both operands are computed.
//!
//! CONVENTIONS:
//! - int (x) int stays int, except true division which promotes to float.
//! - Floor division and modulo use floor-toward-negative-infinity
//!   semantics: the remainder carries the sign of the divisor
//!   (-5 % 3 == 1, 5 % -3 == -1), consistent with // flooring.
//! - Integer overflow is an error, never a silent wrap: every int
//!   operation is checked.
//! - Floor division and modulo are undefined for complex operands.

use crate::error::{EvalError, EvalResult};
use num_complex::Complex64;
use parser::Number;

/// Both operands promoted to their common level of the tower.
enum Promoted {
    Ints(i64, i64),
    Floats(f64, f64),
    Complexes(Complex64, Complex64),
}

fn promote(a: Number, b: Number) -> Promoted {
    match (a, b) {
        (Number::Complex(x), other) => Promoted::Complexes(x, other.to_complex()),
        (other, Number::Complex(y)) => Promoted::Complexes(other.to_complex(), y),
        (Number::Int(x), Number::Int(y)) => Promoted::Ints(x, y),
        (Number::Int(x), Number::Float(y)) => Promoted::Floats(x as f64, y),
        (Number::Float(x), Number::Int(y)) => Promoted::Floats(x, y as f64),
        (Number::Float(x), Number::Float(y)) => Promoted::Floats(x, y),
    }
}

fn overflow(operation: &str) -> EvalError {
    EvalError::ResourceLimitExceeded(format!("integer overflow in {}", operation))
}

pub(crate) fn add(a: Number, b: Number) -> EvalResult<Number> {
    match promote(a, b) {
        Promoted::Ints(x, y) => x
            .checked_add(y)
            .map(Number::Int)
            .ok_or_else(|| overflow("addition")),
        Promoted::Floats(x, y) => Ok(Number::Float(x + y)),
        Promoted::Complexes(x, y) => Ok(Number::Complex(x + y)),
    }
}

pub(crate) fn subtract(a: Number, b: Number) -> EvalResult<Number> {
    match promote(a, b) {
        Promoted::Ints(x, y) => x
            .checked_sub(y)
            .map(Number::Int)
            .ok_or_else(|| overflow("subtraction")),
        Promoted::Floats(x, y) => Ok(Number::Float(x - y)),
        Promoted::Complexes(x, y) => Ok(Number::Complex(x - y)),
    }
}

pub(crate) fn multiply(a: Number, b: Number) -> EvalResult<Number> {
    match promote(a, b) {
        Promoted::Ints(x, y) => x
            .checked_mul(y)
            .map(Number::Int)
            .ok_or_else(|| overflow("multiplication")),
        Promoted::Floats(x, y) => Ok(Number::Float(x * y)),
        Promoted::Complexes(x, y) => Ok(Number::Complex(x * y)),
    }
}

/// True division: int operands promote to float, so 10/4 == 2.5.
pub(crate) fn divide(a: Number, b: Number) -> EvalResult<Number> {
    match promote(a, b) {
        Promoted::Ints(x, y) => {
            if y == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Number::Float(x as f64 / y as f64))
            }
        }
        Promoted::Floats(x, y) => {
            if y == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Number::Float(x / y))
            }
        }
        Promoted::Complexes(x, y) => {
            if y.re == 0.0 && y.im == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Number::Complex(x / y))
            }
        }
    }
}

/// Floor division: rounds toward negative infinity, so -7//2 == -4.
pub(crate) fn floor_divide(a: Number, b: Number) -> EvalResult<Number> {
    match promote(a, b) {
        Promoted::Ints(x, y) => {
            if y == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // checked_div only fails for i64::MIN / -1
            let q = x.checked_div(y).ok_or_else(|| overflow("floor division"))?;
            let r = x % y;
            if r != 0 && ((r < 0) != (y < 0)) {
                Ok(Number::Int(q - 1))
            } else {
                Ok(Number::Int(q))
            }
        }
        Promoted::Floats(x, y) => {
            if y == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Number::Float((x / y).floor()))
            }
        }
        Promoted::Complexes(_, _) => Err(EvalError::UnsupportedOperation(
            "floor division is not defined for complex numbers".to_string(),
        )),
    }
}

/// Modulo with the sign of the divisor: -5 % 3 == 1, 5 % -3 == -1.
pub(crate) fn modulo(a: Number, b: Number) -> EvalResult<Number> {
    match promote(a, b) {
        Promoted::Ints(x, y) => {
            if y == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // checked_rem is None only for i64::MIN % -1, which is 0
            let r = x.checked_rem(y).unwrap_or(0);
            if r != 0 && ((r < 0) != (y < 0)) {
                Ok(Number::Int(r + y))
            } else {
                Ok(Number::Int(r))
            }
        }
        Promoted::Floats(x, y) => {
            if y == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                // Floor-consistent remainder: x - y*floor(x/y)
                Ok(Number::Float(x - y * (x / y).floor()))
            }
        }
        Promoted::Complexes(_, _) => Err(EvalError::UnsupportedOperation(
            "modulo is not defined for complex numbers".to_string(),
        )),
    }
}

/// Exponentiation. Int bases with non-negative int exponents stay int;
/// negative int exponents promote to float (2**-2 == 0.25); negative
/// float bases with fractional exponents promote to complex.
pub(crate) fn power(a: Number, b: Number) -> EvalResult<Number> {
    match promote(a, b) {
        Promoted::Ints(x, y) => {
            if y >= 0 {
                let exp = u32::try_from(y).map_err(|_| {
                    EvalError::ResourceLimitExceeded(format!("exponent {} is too large", y))
                })?;
                x.checked_pow(exp)
                    .map(Number::Int)
                    .ok_or_else(|| overflow("exponentiation"))
            } else if x == 0 {
                // 0 cannot be raised to a negative power
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Number::Float((x as f64).powf(y as f64)))
            }
        }
        Promoted::Floats(x, y) => {
            if x == 0.0 && y < 0.0 {
                Err(EvalError::DivisionByZero)
            } else if x < 0.0 && y.fract() != 0.0 {
                // A negative base with a fractional exponent has no real
                // result; promote to complex instead of returning NaN.
                Ok(Number::Complex(Complex64::new(x, 0.0).powf(y)))
            } else {
                Ok(Number::Float(x.powf(y)))
            }
        }
        Promoted::Complexes(x, y) => {
            if x.re == 0.0 && x.im == 0.0 {
                // exp(y*ln(0)) is undefined; handle the zero base directly
                if y.re == 0.0 && y.im == 0.0 {
                    Ok(Number::Complex(Complex64::new(1.0, 0.0)))
                } else if y.re > 0.0 && y.im == 0.0 {
                    Ok(Number::Complex(Complex64::new(0.0, 0.0)))
                } else {
                    Err(EvalError::DivisionByZero)
                }
            } else {
                Ok(Number::Complex(x.powc(y)))
            }
        }
    }
}

/// Arithmetic negation (unary minus).
pub(crate) fn negate(v: Number) -> EvalResult<Number> {
    match v {
        Number::Int(i) => i
            .checked_neg()
            .map(Number::Int)
            .ok_or_else(|| overflow("negation")),
        Number::Float(f) => Ok(Number::Float(-f)),
        Number::Complex(c) => Ok(Number::Complex(-c)),
    }
}
