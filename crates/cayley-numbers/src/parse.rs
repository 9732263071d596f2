//! Textual input classification.
//!
//! A single entry point sniffs a string for structural markers and routes it
//! to the matching number parser: `;` splits matrix rows, `,` splits array
//! entries, `/` marks a ratio, a trailing `i` marks a complex number, and
//! anything else must read as a plain float.

use cayley_structures::{AlgebraError, Result};

use crate::complex::Complex;
use crate::dispatch::Value;
use crate::ratio::Ratio;

/// A classified parse result.
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed {
    /// A plain real number.
    Number(f64),
    /// A ratio of integers.
    Ratio(Ratio),
    /// A complex number.
    Complex(Complex),
    /// A flat list of entries.
    Array(Vec<Parsed>),
    /// Rows of entries, themselves parsed recursively.
    Matrix(Vec<Parsed>),
}

impl Parsed {
    /// Lowers the parse into a dispatchable [`Value`], flattening ratios to
    /// their real value and arrays to coefficient lists.
    ///
    /// # Errors
    ///
    /// Matrices have no dispatch representation and fail with
    /// [`AlgebraError::Parse`].
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Self::Number(x) => Ok(Value::Scalar(*x)),
            Self::Ratio(r) => Ok(Value::Scalar(r.to_f64())),
            Self::Complex(z) => Ok(Value::Complex(*z)),
            Self::Array(items) => {
                let items: Result<Vec<_>> = items.iter().map(Parsed::to_value).collect();
                Ok(Value::Coeffs(items?))
            }
            Self::Matrix(_) => Err(AlgebraError::Parse(
                "matrices cannot be dispatched".into(),
            )),
        }
    }
}

/// Parses a textual value, classifying it by its structural markers.
///
/// # Errors
///
/// Fails with [`AlgebraError::Parse`] when no classification accepts the
/// input.
pub fn parse(s: &str) -> Result<Parsed> {
    let s = s.trim();
    if s.contains(';') {
        let rows: Result<Vec<_>> = s.split(';').map(parse).collect();
        return Ok(Parsed::Matrix(rows?));
    }
    if s.contains(',') {
        let items: Result<Vec<_>> = s.split(',').map(parse).collect();
        return Ok(Parsed::Array(items?));
    }
    if s.contains('/') {
        return Ok(Parsed::Ratio(Ratio::parse(s)?));
    }
    if s.ends_with('i') {
        return Ok(Parsed::Complex(Complex::parse(s)?));
    }
    s.parse::<f64>()
        .map(Parsed::Number)
        .map_err(|_| AlgebraError::Parse(s.to_owned()))
}
