//! # Scientific Operations
//!
//! The four calculator operations as pure, stateless functions. Each call is
//! independent: no I/O, no shared state, domain violations signaled through
//! [`CalcError`] rather than printed.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operations::{factorial, square_root, Operation};
//!
//! assert_eq!(square_root(16.0).unwrap(), 4.0);
//! assert_eq!(factorial(5).unwrap(), 120);
//!
//! // Or go through the request enum, as the shell does:
//! let op = Operation::Power { base: 2.0, exponent: 3.0 };
//! assert_eq!(op.evaluate().unwrap().to_string(), "8");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest argument whose factorial fits in a signed 64-bit integer.
/// 21! = 51_090_942_171_709_440_000 > i64::MAX.
pub const FACTORIAL_MAX: i64 = 20;

/// Non-negative square root of `x`.
///
/// Signals [`CalcError::InvalidDomain`] for negative `x`.
pub fn square_root(x: f64) -> CalcResult<f64> {
    if x < 0.0 {
        return Err(CalcError::invalid_domain(
            "square_root",
            x.to_string(),
            "Square root of negative number is not defined",
        ));
    }
    Ok(x.sqrt())
}

/// Factorial of `n`, with `factorial(0) = 1`.
///
/// Signals [`CalcError::InvalidDomain`] for negative `n` and
/// [`CalcError::Overflow`] for `n > 20`, the largest factorial an `i64`
/// can hold.
pub fn factorial(n: i64) -> CalcResult<i64> {
    if n < 0 {
        return Err(CalcError::invalid_domain(
            "factorial",
            n.to_string(),
            "Factorial is not defined for negative numbers",
        ));
    }
    if n > FACTORIAL_MAX {
        return Err(CalcError::overflow(
            "factorial",
            "Factorial too large for 64-bit integer range",
        ));
    }

    let mut result: i64 = 1;
    for i in 2..=n {
        result *= i;
    }
    Ok(result)
}

/// Natural logarithm of `x`.
///
/// Signals [`CalcError::InvalidDomain`] for `x <= 0`.
pub fn natural_log(x: f64) -> CalcResult<f64> {
    if x <= 0.0 {
        return Err(CalcError::invalid_domain(
            "natural_log",
            x.to_string(),
            "Natural logarithm is only defined for positive numbers",
        ));
    }
    Ok(x.ln())
}

/// `base` raised to `exponent`.
///
/// No sign precondition: negative bases with integer exponents are fine, and
/// a fractional exponent of a negative base produces NaN from `powf`, which
/// is reported as [`CalcError::Overflow`] along with genuinely infinite
/// results. The two cases share one category on purpose.
pub fn power(base: f64, exponent: f64) -> CalcResult<f64> {
    let result = base.powf(exponent);
    if !result.is_finite() {
        return Err(CalcError::overflow(
            "power",
            "Power operation resulted in overflow or invalid result",
        ));
    }
    Ok(result)
}

/// A single operation request.
///
/// Enum wrapper over the four operations so the shell (or any other
/// consumer) can dispatch one evaluation per variant while keeping clean
/// tagged serialization.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Power", "base": 2.0, "exponent": 3.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Operation {
    /// Square root of a non-negative number
    SquareRoot { value: f64 },
    /// Factorial of a small non-negative integer
    Factorial { value: i64 },
    /// Natural logarithm of a positive number
    NaturalLog { value: f64 },
    /// Base raised to an arbitrary exponent
    Power { base: f64, exponent: f64 },
}

impl Operation {
    /// Evaluate this operation, dispatching to the pure functions.
    pub fn evaluate(&self) -> CalcResult<Number> {
        match *self {
            Operation::SquareRoot { value } => square_root(value).map(Number::Float),
            Operation::Factorial { value } => factorial(value).map(Number::Integer),
            Operation::NaturalLog { value } => natural_log(value).map(Number::Float),
            Operation::Power { base, exponent } => power(base, exponent).map(Number::Float),
        }
    }

    /// Human phrase for the result line, e.g. "the square root of 16".
    pub fn describe(&self) -> String {
        match *self {
            Operation::SquareRoot { value } => format!("The square root of {}", value),
            Operation::Factorial { value } => format!("The factorial of {}", value),
            Operation::NaturalLog { value } => format!("The natural log of {}", value),
            Operation::Power { base, exponent } => {
                format!("{} raised to the power of {}", base, exponent)
            }
        }
    }
}

/// Result value of an operation.
///
/// Factorial produces an exact 64-bit integer, everything else a float;
/// keeping the distinction lets 20! display without losing digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_square_root_exact() {
        assert_eq!(square_root(16.0).unwrap(), 4.0);
        assert_eq!(square_root(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_square_root_roundtrip() {
        for &x in &[0.0, 0.25, 1.0, 2.0, 16.0, 1e6, 123.456] {
            let root = square_root(x).unwrap();
            assert!((root * root - x).abs() < TOL * x.max(1.0));
        }
    }

    #[test]
    fn test_square_root_negative() {
        let err = square_root(-4.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
        assert_eq!(err.operation(), "square_root");
    }

    #[test]
    fn test_factorial_exact_table() {
        let expected: [i64; 21] = [
            1,
            1,
            2,
            6,
            24,
            120,
            720,
            5040,
            40320,
            362880,
            3628800,
            39916800,
            479001600,
            6227020800,
            87178291200,
            1307674368000,
            20922789888000,
            355687428096000,
            6402373705728000,
            121645100408832000,
            2432902008176640000,
        ];
        for (n, &want) in expected.iter().enumerate() {
            assert_eq!(factorial(n as i64).unwrap(), want, "factorial({})", n);
        }
    }

    #[test]
    fn test_factorial_negative() {
        let err = factorial(-3).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
    }

    #[test]
    fn test_factorial_overflow() {
        let err = factorial(21).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
        assert!(factorial(100).is_err());
    }

    #[test]
    fn test_natural_log_anchors() {
        assert!(natural_log(1.0).unwrap().abs() < TOL);
        assert!((natural_log(std::f64::consts::E).unwrap() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_natural_log_roundtrip() {
        for &x in &[0.5, 1.0, 2.0, 10.0, 1e6] {
            let ln = natural_log(x).unwrap();
            assert!((ln.exp() - x).abs() < TOL * x.max(1.0));
        }
    }

    #[test]
    fn test_natural_log_domain() {
        assert_eq!(natural_log(0.0).unwrap_err().error_code(), "INVALID_DOMAIN");
        assert_eq!(
            natural_log(-1.0).unwrap_err().error_code(),
            "INVALID_DOMAIN"
        );
    }

    #[test]
    fn test_power_values() {
        assert_eq!(power(2.0, 3.0).unwrap(), 8.0);
        assert_eq!(power(-2.0, 3.0).unwrap(), -8.0);
        assert_eq!(power(-2.0, 2.0).unwrap(), 4.0);
        assert_eq!(power(5.0, 0.0).unwrap(), 1.0);
        assert_eq!(power(4.0, 0.5).unwrap(), 2.0);
    }

    #[test]
    fn test_power_overflow() {
        let err = power(1e308, 2.0).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
        assert!(power(10.0, 1e9).is_err());
    }

    #[test]
    fn test_power_nan_reported_as_overflow() {
        // Fractional exponent of a negative base is NaN from powf
        let err = power(-2.0, 0.5).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
    }

    #[test]
    fn test_operation_dispatch() {
        let op = Operation::SquareRoot { value: 16.0 };
        assert_eq!(op.evaluate().unwrap(), Number::Float(4.0));

        let op = Operation::Factorial { value: 20 };
        assert_eq!(
            op.evaluate().unwrap(),
            Number::Integer(2432902008176640000)
        );

        let op = Operation::Factorial { value: -1 };
        assert!(op.evaluate().is_err());
    }

    #[test]
    fn test_describe() {
        let op = Operation::Power {
            base: 2.0,
            exponent: 3.0,
        };
        assert_eq!(op.describe(), "2 raised to the power of 3");

        let op = Operation::SquareRoot { value: 16.0 };
        assert_eq!(op.describe(), "The square root of 16");
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Integer(2432902008176640000).to_string(), "2432902008176640000");
        assert_eq!(Number::Float(4.0).to_string(), "4");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_operation_serialization() {
        let op = Operation::Power {
            base: 2.0,
            exponent: 10.0,
        };
        let json = serde_json::to_string(&op).unwrap();
        let roundtrip: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(op, roundtrip);
    }
}
