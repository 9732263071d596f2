//! Generic operator dispatch over heterogeneous value kinds.
//!
//! A single entry point, [`apply`], routes an operator across the closed set
//! of operand kinds: plain scalars, complex numbers, and coefficient lists.
//! The match is exhaustive, so every kind combination has a defined outcome.
//!
//! Routing rules:
//! - a coefficient list on either side combines element-wise (zero padding
//!   for addition and subtraction, scalar broadcast otherwise);
//! - a complex number on either side coerces the other operand to complex;
//! - two scalars use native arithmetic, except that the square root of a
//!   negative real and a negative exponent escalate into the complex domain.

use std::str::FromStr;

use cayley_structures::{AlgebraError, Result};

use crate::complex::Complex;

/// An operand of the generic dispatcher.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A plain real number.
    Scalar(f64),
    /// A complex number.
    Complex(Complex),
    /// A polynomial coefficient list in ascending degree order.
    Coeffs(Vec<Value>),
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Scalar(x)
    }
}

impl From<Complex> for Value {
    fn from(z: Complex) -> Self {
        Self::Complex(z)
    }
}

/// Operators resolved by [`apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Square root (unary; the second operand is ignored).
    Sqrt,
    /// Exponentiation by a real exponent.
    Power,
}

impl Op {
    /// The operator's dispatch name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Sqrt => "sqrt",
            Self::Power => "power",
        }
    }

    fn invalid(self) -> AlgebraError {
        AlgebraError::InvalidOperator(self.name().to_string())
    }
}

impl FromStr for Op {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            "mul" => Ok(Self::Mul),
            "div" => Ok(Self::Div),
            "sqrt" => Ok(Self::Sqrt),
            "power" => Ok(Self::Power),
            other => Err(AlgebraError::InvalidOperator(other.to_string())),
        }
    }
}

/// Applies `op` to two operands, routing on their kinds.
///
/// # Errors
///
/// Fails with [`AlgebraError::InvalidOperator`] for combinations outside the
/// dispatch table: list operands under `sqrt`/`power`, two lists of
/// different lengths under `mul`/`div`, and a list coerced to complex.
pub fn apply(op: Op, x: &Value, y: &Value) -> Result<Value> {
    match (x, y) {
        (Value::Coeffs(a), Value::Coeffs(b)) => coeffs_zip(op, a, b),
        (Value::Coeffs(a), other) => coeffs_map(op, a, other, false),
        (other, Value::Coeffs(b)) => coeffs_map(op, b, other, true),
        (Value::Complex(_), _) | (_, Value::Complex(_)) => {
            apply_complex(op, to_complex(op, x)?, to_complex(op, y)?)
        }
        (Value::Scalar(a), Value::Scalar(b)) => Ok(apply_scalar(op, *a, *b)),
    }
}

/// Convenience wrapper for [`Op::Add`].
///
/// # Errors
///
/// Same conditions as [`apply`].
pub fn add(x: &Value, y: &Value) -> Result<Value> {
    apply(Op::Add, x, y)
}

/// Convenience wrapper for [`Op::Sub`].
///
/// # Errors
///
/// Same conditions as [`apply`].
pub fn sub(x: &Value, y: &Value) -> Result<Value> {
    apply(Op::Sub, x, y)
}

/// Convenience wrapper for [`Op::Mul`].
///
/// # Errors
///
/// Same conditions as [`apply`].
pub fn mul(x: &Value, y: &Value) -> Result<Value> {
    apply(Op::Mul, x, y)
}

/// Convenience wrapper for [`Op::Div`].
///
/// # Errors
///
/// Same conditions as [`apply`].
pub fn div(x: &Value, y: &Value) -> Result<Value> {
    apply(Op::Div, x, y)
}

/// Square root of a single operand.
///
/// # Errors
///
/// Fails with [`AlgebraError::InvalidOperator`] on a coefficient list.
pub fn sqrt(x: &Value) -> Result<Value> {
    apply(Op::Sqrt, x, &Value::Scalar(0.0))
}

/// Raises `x` to the power `y`.
///
/// # Errors
///
/// Same conditions as [`apply`].
pub fn power(x: &Value, y: &Value) -> Result<Value> {
    apply(Op::Power, x, y)
}

fn to_complex(op: Op, v: &Value) -> Result<Complex> {
    match v {
        Value::Scalar(x) => Ok(Complex::new(*x, 0.0)),
        Value::Complex(z) => Ok(*z),
        Value::Coeffs(_) => Err(op.invalid()),
    }
}

fn apply_complex(op: Op, a: Complex, b: Complex) -> Result<Value> {
    let z = match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
        Op::Sqrt => a.sqrt(),
        Op::Power => {
            // Exponents must be (numerically) real.
            if b.im.abs() >= f64::EPSILON {
                return Err(op.invalid());
            }
            a.powf(b.re)
        }
    };
    Ok(Value::Complex(z))
}

fn apply_scalar(op: Op, a: f64, b: f64) -> Value {
    match op {
        Op::Add => Value::Scalar(a + b),
        Op::Sub => Value::Scalar(a - b),
        Op::Mul => Value::Scalar(a * b),
        Op::Div => Value::Scalar(a / b),
        Op::Sqrt => {
            if a >= 0.0 {
                Value::Scalar(a.sqrt())
            } else {
                Value::Complex(Complex::new(a, 0.0).sqrt())
            }
        }
        Op::Power => {
            if b >= 0.0 && (a >= 0.0 || b.fract() == 0.0) {
                Value::Scalar(a.powf(b))
            } else {
                Value::Complex(Complex::new(a, 0.0).powf(b))
            }
        }
    }
}

fn coeffs_zip(op: Op, a: &[Value], b: &[Value]) -> Result<Value> {
    match op {
        Op::Sqrt | Op::Power => Err(op.invalid()),
        Op::Add | Op::Sub => {
            let len = a.len().max(b.len());
            let zero = Value::Scalar(0.0);
            let items = (0..len)
                .map(|i| apply(op, a.get(i).unwrap_or(&zero), b.get(i).unwrap_or(&zero)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Coeffs(items))
        }
        Op::Mul | Op::Div => {
            if a.len() != b.len() {
                return Err(op.invalid());
            }
            let items = a
                .iter()
                .zip(b)
                .map(|(x, y)| apply(op, x, y))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Coeffs(items))
        }
    }
}

// `swapped` means the list arrived as the right operand; for the
// non-commutative operators the scalar then stays on the left of each
// element-wise application.
fn coeffs_map(op: Op, list: &[Value], scalar: &Value, swapped: bool) -> Result<Value> {
    if matches!(op, Op::Sqrt | Op::Power) {
        return Err(op.invalid());
    }
    let items = list
        .iter()
        .map(|c| {
            if swapped {
                apply(op, scalar, c)
            } else {
                apply(op, c, scalar)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Coeffs(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars(xs: &[f64]) -> Value {
        Value::Coeffs(xs.iter().map(|&x| Value::Scalar(x)).collect())
    }

    #[test]
    fn operator_names_resolve() {
        assert_eq!("add".parse::<Op>().unwrap(), Op::Add);
        assert_eq!("power".parse::<Op>().unwrap(), Op::Power);
        assert_eq!(
            "modulo".parse::<Op>().unwrap_err(),
            AlgebraError::InvalidOperator("modulo".to_string())
        );
    }

    #[test]
    fn scalar_arithmetic_stays_native() {
        assert_eq!(
            add(&Value::Scalar(2.0), &Value::Scalar(3.0)).unwrap(),
            Value::Scalar(5.0)
        );
        assert_eq!(
            div(&Value::Scalar(1.0), &Value::Scalar(4.0)).unwrap(),
            Value::Scalar(0.25)
        );
        assert_eq!(
            power(&Value::Scalar(2.0), &Value::Scalar(10.0)).unwrap(),
            Value::Scalar(1024.0)
        );
    }

    #[test]
    fn negative_sqrt_escalates_to_complex() {
        let z = sqrt(&Value::Scalar(-4.0)).unwrap();
        match z {
            Value::Complex(c) => assert!(c.approx_eq(&Complex::new(0.0, 2.0))),
            other => panic!("expected complex result, got {other:?}"),
        }
    }

    #[test]
    fn negative_exponent_escalates_to_complex() {
        let z = power(&Value::Scalar(4.0), &Value::Scalar(-0.5)).unwrap();
        match z {
            Value::Complex(c) => assert!(c.approx_eq(&Complex::new(0.5, 0.0))),
            other => panic!("expected complex result, got {other:?}"),
        }
    }

    #[test]
    fn complex_operand_coerces_the_scalar() {
        let z = mul(&Value::Scalar(2.0), &Value::Complex(Complex::new(1.0, 1.0))).unwrap();
        assert_eq!(z, Value::Complex(Complex::new(2.0, 2.0)));
        let w = sub(&Value::Complex(Complex::I), &Value::Scalar(1.0)).unwrap();
        assert_eq!(w, Value::Complex(Complex::new(-1.0, 1.0)));
    }

    #[test]
    fn lists_add_with_zero_padding() {
        let z = add(&scalars(&[1.0, 2.0]), &scalars(&[3.0])).unwrap();
        assert_eq!(z, scalars(&[4.0, 2.0]));
    }

    #[test]
    fn scalar_broadcasts_over_lists() {
        let z = mul(&scalars(&[1.0, 2.0, 3.0]), &Value::Scalar(2.0)).unwrap();
        assert_eq!(z, scalars(&[2.0, 4.0, 6.0]));
        // The scalar stays on the left of each element-wise subtraction.
        let w = sub(&Value::Scalar(10.0), &scalars(&[1.0, 2.0])).unwrap();
        assert_eq!(w, scalars(&[9.0, 8.0]));
    }

    #[test]
    fn list_entries_may_be_complex() {
        let list = Value::Coeffs(vec![Value::Scalar(1.0), Value::Complex(Complex::I)]);
        let z = add(&list, &Value::Scalar(1.0)).unwrap();
        assert_eq!(
            z,
            Value::Coeffs(vec![
                Value::Scalar(2.0),
                Value::Complex(Complex::new(1.0, 1.0)),
            ])
        );
    }

    #[test]
    fn unsupported_list_combinations_fail() {
        assert_eq!(
            sqrt(&scalars(&[1.0, 2.0])).unwrap_err(),
            AlgebraError::InvalidOperator("sqrt".to_string())
        );
        assert_eq!(
            mul(&scalars(&[1.0, 2.0]), &scalars(&[1.0])).unwrap_err(),
            AlgebraError::InvalidOperator("mul".to_string())
        );
        assert_eq!(
            apply(
                Op::Add,
                &Value::Complex(Complex::I),
                &Value::Complex(Complex::I)
            )
            .unwrap(),
            Value::Complex(Complex::new(0.0, 2.0))
        );
    }
}
