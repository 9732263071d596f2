//! Closed-form root solving for degrees one through three.
//!
//! The polynomial is made monic first, then its coefficients are lifted into
//! the complex plane, so roots come back as complex numbers even over real
//! or rational coefficient fields. The cubic follows Cardano: solve the
//! depressed cubic in `t`, then undo the `x = t - a/3` substitution so the
//! returned roots belong to the polynomial as given.

use cayley_numbers::{Complex, ToComplex};
use cayley_structures::{AlgebraError, FieldOps, Result};

use crate::polynomial::Polynomial;

/// The primitive cube roots of unity.
const RHO_POS: Complex = Complex::new(-0.5, 0.866_025_403_784_438_6);
const RHO_NEG: Complex = Complex::new(-0.5, -0.866_025_403_784_438_6);

/// Solves for all complex roots of a polynomial of degree one, two, or
/// three.
///
/// # Errors
///
/// Fails with [`AlgebraError::UnsupportedDegree`] outside degrees 1-3, and
/// propagates a failed normalization for a zero leading coefficient.
pub fn roots<F>(poly: &Polynomial<F>) -> Result<Vec<Complex>>
where
    F: FieldOps,
    F::Elem: ToComplex,
{
    let monic = poly.normalize()?;
    let c: Vec<Complex> = monic.coeffs().iter().map(ToComplex::to_complex).collect();
    match c.len() {
        2 => Ok(vec![-c[0]]),
        3 => Ok(quadratic(c[1], c[0])),
        4 => Ok(cubic(c[2], c[1], c[0])),
        n => Err(AlgebraError::UnsupportedDegree(n - 1)),
    }
}

/// Roots of the monic quadratic x² + bx + c.
fn quadratic(b: Complex, c: Complex) -> Vec<Complex> {
    let four: Complex = 4.0.into();
    let half: Complex = 0.5.into();
    let disc = (b * b - four * c).sqrt();
    vec![(-b + disc) * half, (-b - disc) * half]
}

/// Roots of the monic cubic x³ + ax² + bx + c by Cardano's method.
fn cubic(a: Complex, b: Complex, c: Complex) -> Vec<Complex> {
    let third: Complex = (1.0 / 3.0).into();
    let half: Complex = 0.5.into();

    // Substituting x = t - a/3 leaves t³ + 3pt + 2q.
    let p = (b - a * a * third) * third;
    let q = (a * a * a * Complex::from(2.0 / 27.0) - a * b * third + c) * half;

    let d_sqrt = (p * p * p + q * q).sqrt();
    let u_pos = (-q + d_sqrt).cbrt();
    let u_neg = (-q - d_sqrt).cbrt();

    let shift = -a * third;
    vec![
        u_pos + u_neg + shift,
        RHO_POS * u_pos + RHO_NEG * u_neg + shift,
        RHO_NEG * u_pos + RHO_POS * u_neg + shift,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cayley_numbers::float_field;
    use std::sync::Arc;

    fn assert_roots(found: &[Complex], expected: &[Complex]) {
        assert_eq!(found.len(), expected.len());
        let mut unmatched: Vec<Complex> = expected.to_vec();
        for r in found {
            let pos = unmatched.iter().position(|e| e.approx_eq(r));
            assert!(pos.is_some(), "unexpected root {r}, wanted one of {unmatched:?}");
            unmatched.remove(pos.unwrap());
        }
    }

    #[test]
    fn linear_root() {
        let f = Arc::new(float_field());
        // x - 3
        let p = Polynomial::new(&f, vec![-3.0, 1.0]);
        assert_roots(&roots(&p).unwrap(), &[Complex::new(3.0, 0.0)]);
    }

    #[test]
    fn linear_root_normalizes_first() {
        let f = Arc::new(float_field());
        // 2x - 6 has the same root as x - 3
        let p = Polynomial::new(&f, vec![-6.0, 2.0]);
        assert_roots(&roots(&p).unwrap(), &[Complex::new(3.0, 0.0)]);
    }

    #[test]
    fn quadratic_with_real_roots() {
        let f = Arc::new(float_field());
        // x² - 3x + 2 = (x - 1)(x - 2)
        let p = Polynomial::new(&f, vec![2.0, -3.0, 1.0]);
        assert_roots(
            &roots(&p).unwrap(),
            &[Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)],
        );
    }

    #[test]
    fn quadratic_with_imaginary_roots() {
        let f = Arc::new(float_field());
        // x² + 1
        let p = Polynomial::new(&f, vec![1.0, 0.0, 1.0]);
        assert_roots(&roots(&p).unwrap(), &[Complex::I, -Complex::I]);
    }

    #[test]
    fn cubic_with_three_real_roots() {
        let f = Arc::new(float_field());
        // x³ - 6x² + 11x - 6 = (x - 1)(x - 2)(x - 3)
        let p = Polynomial::new(&f, vec![-6.0, 11.0, -6.0, 1.0]);
        assert_roots(
            &roots(&p).unwrap(),
            &[
                Complex::new(1.0, 0.0),
                Complex::new(2.0, 0.0),
                Complex::new(3.0, 0.0),
            ],
        );
    }

    #[test]
    fn cubic_roots_of_unity() {
        let f = Arc::new(float_field());
        // x³ - 1
        let p = Polynomial::new(&f, vec![-1.0, 0.0, 0.0, 1.0]);
        assert_roots(&roots(&p).unwrap(), &[Complex::ONE, RHO_POS, RHO_NEG]);
    }

    #[test]
    fn cubic_with_one_real_root() {
        let f = Arc::new(float_field());
        // x³ + x - 2 = (x - 1)(x² + x + 2)
        let p = Polynomial::new(&f, vec![-2.0, 1.0, 0.0, 1.0]);
        let rs = roots(&p).unwrap();
        let one = Complex::ONE;
        assert!(rs.iter().any(|r| r.approx_eq(&one)));
        for r in &rs {
            // Every returned value really is a root.
            let val = *r * *r * *r + *r - Complex::new(2.0, 0.0);
            assert!(val.abs() < 1e-8, "residual {val} for root {r}");
        }
    }

    #[test]
    fn unsupported_degrees_are_rejected() {
        let f = Arc::new(float_field());
        let constant = Polynomial::new(&f, vec![5.0]);
        assert_eq!(
            roots(&constant),
            Err(AlgebraError::UnsupportedDegree(0))
        );
        let quartic = Polynomial::new(&f, vec![1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            roots(&quartic),
            Err(AlgebraError::UnsupportedDegree(4))
        );
    }

    #[test]
    fn zero_leading_coefficient_fails() {
        let f = Arc::new(float_field());
        let p = Polynomial::new(&f, vec![1.0, 0.0]);
        assert!(roots(&p).is_err());
    }
}
