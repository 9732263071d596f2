//! Coefficient-list polynomials bound to a shared field.

use std::fmt;
use std::sync::Arc;

use cayley_structures::{FieldOps, Result};

/// A polynomial over the field `F`, stored as coefficients in ascending
/// degree order.
///
/// Trailing zero coefficients are kept as written; [`Polynomial::eq`] pads
/// the shorter operand, so `x + 0·x²` and `x` compare equal.
pub struct Polynomial<F: FieldOps> {
    coeffs: Vec<F::Elem>,
    field: Arc<F>,
}

impl<F: FieldOps> Polynomial<F> {
    /// Wraps a coefficient list over the given field. An empty list becomes
    /// the zero polynomial.
    #[must_use]
    pub fn new(field: &Arc<F>, coeffs: Vec<F::Elem>) -> Self {
        let coeffs = if coeffs.is_empty() {
            vec![field.zero()]
        } else {
            coeffs
        };
        Self {
            coeffs,
            field: Arc::clone(field),
        }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(field: &Arc<F>) -> Self {
        Self::new(field, vec![field.zero()])
    }

    /// The constant-one polynomial.
    #[must_use]
    pub fn one(field: &Arc<F>) -> Self {
        Self::new(field, vec![field.one()])
    }

    /// The number of stored coefficients, trailing zeros included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.coeffs.len()
    }

    /// The degree implied by the stored length.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[F::Elem] {
        &self.coeffs
    }

    /// The field the coefficients live in.
    #[must_use]
    pub fn field(&self) -> &Arc<F> {
        &self.field
    }

    /// The coefficient of the highest stored degree.
    #[must_use]
    pub fn leading_coeff(&self) -> &F::Elem {
        // new() guarantees at least one coefficient.
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Evaluates at `x` by Horner's rule.
    #[must_use]
    pub fn eval(&self, x: &F::Elem) -> F::Elem {
        let mut acc = self.field.zero();
        for c in self.coeffs.iter().rev() {
            acc = self.field.add(&self.field.mul(&acc, x), c);
        }
        acc
    }

    /// Divides every coefficient by the leading one, producing a monic
    /// polynomial of the same degree.
    ///
    /// # Errors
    ///
    /// Fails when the leading coefficient has no inverse, which includes the
    /// zero polynomial.
    pub fn normalize(&self) -> Result<Self> {
        let lead = self.leading_coeff();
        let coeffs: Result<Vec<_>> = self
            .coeffs
            .iter()
            .map(|c| self.field.div(c, lead))
            .collect();
        Ok(Self::new(&self.field, coeffs?))
    }

    /// Equality under the field's own comparison, padding the shorter
    /// operand with zeros.
    #[must_use]
    pub fn eq(&self, other: &Self) -> bool {
        let zero = self.field.zero();
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|k| {
            let a = self.coeffs.get(k).unwrap_or(&zero);
            let b = other.coeffs.get(k).unwrap_or(&zero);
            self.field.eq(a, b)
        })
    }
}

impl<F: FieldOps> Clone for Polynomial<F> {
    fn clone(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
            field: Arc::clone(&self.field),
        }
    }
}

impl<F: FieldOps> fmt::Debug for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("coeffs", &self.coeffs)
            .finish()
    }
}

impl<F: FieldOps> fmt::Display for Polynomial<F>
where
    F::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .map(|(k, c)| format!("{c}x^{k}"))
            .collect();
        f.write_str(&terms.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cayley_numbers::{finite_field, float_field};
    use cayley_structures::AlgebraError;

    #[test]
    fn empty_input_becomes_zero() {
        let f = Arc::new(float_field());
        let p = Polynomial::new(&f, vec![]);
        assert_eq!(p.size(), 1);
        assert!(p.eq(&Polynomial::zero(&f)));
    }

    #[test]
    fn degree_follows_stored_length() {
        let f = Arc::new(float_field());
        let p = Polynomial::new(&f, vec![-6.0, 11.0, -6.0, 1.0]);
        assert_eq!(p.degree(), 3);
        assert!((p.leading_coeff() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn horner_evaluation() {
        let f = Arc::new(float_field());
        // x³ - 6x² + 11x - 6 vanishes at 1, 2, 3.
        let p = Polynomial::new(&f, vec![-6.0, 11.0, -6.0, 1.0]);
        for x in [1.0, 2.0, 3.0] {
            assert!(p.eval(&x).abs() < 1e-9);
        }
        assert!((p.eval(&0.0) + 6.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_produces_monic() {
        let f = Arc::new(float_field());
        let p = Polynomial::new(&f, vec![2.0, 4.0]);
        let monic = p.normalize().unwrap();
        assert!(monic.eq(&Polynomial::new(&f, vec![0.5, 1.0])));
    }

    #[test]
    fn normalize_fails_on_zero_lead() {
        let f = Arc::new(float_field());
        let p = Polynomial::zero(&f);
        assert!(matches!(p.normalize(), Err(AlgebraError::DivisionByZero)));
    }

    #[test]
    fn equality_pads_trailing_zeros() {
        let f = Arc::new(float_field());
        let a = Polynomial::new(&f, vec![0.0, 1.0]);
        let b = Polynomial::new(&f, vec![0.0, 1.0, 0.0]);
        assert!(a.eq(&b));
        assert!(!a.eq(&Polynomial::new(&f, vec![1.0, 1.0])));
    }

    #[test]
    fn works_over_finite_fields() {
        let f = Arc::new(finite_field(5));
        let p = Polynomial::new(&f, vec![1, 2, 3]);
        // 3·4 + 2·2 + 1 = 53 ≡ 3 (mod 5); eval is Horner so 3·16+2·4+1.
        assert_eq!(p.eval(&4), (3 * 16 + 2 * 4 + 1) % 5);
    }

    #[test]
    fn display_lists_descending_terms() {
        let f = Arc::new(float_field());
        let p = Polynomial::new(&f, vec![2.0, 0.0, 1.0]);
        assert_eq!(p.to_string(), "1x^2+0x^1+2x^0");
    }
}
