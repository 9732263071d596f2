//! Group structures over coefficient lists and the ring that binds them.

use std::fmt;
use std::sync::Arc;

use rand::{Rng, RngCore};

use cayley_structures::{
    AbelianGroup, AlgebraError, FieldOps, Group, Magma, Monoid, Result, RingStructure, SemiGroup,
};

use crate::polynomial::Polynomial;

/// The additive group of polynomials: coefficient-wise addition with
/// zero-padding of the shorter operand.
pub struct PolyAddGroup<F: FieldOps> {
    field: Arc<F>,
}

impl<F: FieldOps> PolyAddGroup<F> {
    /// Builds the additive structure over the given field.
    #[must_use]
    pub fn new(field: &Arc<F>) -> Self {
        Self {
            field: Arc::clone(field),
        }
    }
}

impl<F: FieldOps> Magma for PolyAddGroup<F> {
    type Elem = Polynomial<F>;

    fn op(&self, a: &Polynomial<F>, b: &Polynomial<F>) -> Polynomial<F> {
        let zero = self.field.zero();
        let len = a.size().max(b.size());
        let coeffs = (0..len)
            .map(|k| {
                let x = a.coeffs().get(k).unwrap_or(&zero);
                let y = b.coeffs().get(k).unwrap_or(&zero);
                self.field.add(x, y)
            })
            .collect();
        Polynomial::new(&self.field, coeffs)
    }

    fn contains(&self, x: &Polynomial<F>) -> bool {
        x.coeffs().iter().all(|c| self.field.contains(c))
    }

    fn eq(&self, a: &Polynomial<F>, b: &Polynomial<F>) -> bool {
        a.eq(b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Polynomial<F> {
        let len = rng.gen_range(1..=4);
        let coeffs = (0..len).map(|_| self.field.sample(rng)).collect();
        Polynomial::new(&self.field, coeffs)
    }
}

impl<F: FieldOps> SemiGroup for PolyAddGroup<F> {}

impl<F: FieldOps> Monoid for PolyAddGroup<F> {
    fn identity(&self) -> Polynomial<F> {
        Polynomial::zero(&self.field)
    }
}

impl<F: FieldOps> Group for PolyAddGroup<F> {
    fn inverse(&self, x: &Polynomial<F>) -> Result<Polynomial<F>> {
        let coeffs: Result<Vec<_>> = x.coeffs().iter().map(|c| self.field.neg(c)).collect();
        Ok(Polynomial::new(&self.field, coeffs?))
    }
}

impl<F: FieldOps> AbelianGroup for PolyAddGroup<F> {}

/// The multiplicative monoid of polynomials under convolution.
///
/// Only constants have multiplicative inverses, so the structure stops at
/// a monoid; [`Group::inverse`] always fails.
pub struct PolyMulMonoid<F: FieldOps> {
    field: Arc<F>,
}

impl<F: FieldOps> PolyMulMonoid<F> {
    /// Builds the multiplicative structure over the given field.
    #[must_use]
    pub fn new(field: &Arc<F>) -> Self {
        Self {
            field: Arc::clone(field),
        }
    }
}

impl<F: FieldOps> Magma for PolyMulMonoid<F> {
    type Elem = Polynomial<F>;

    fn op(&self, a: &Polynomial<F>, b: &Polynomial<F>) -> Polynomial<F> {
        let mut acc = vec![self.field.zero(); a.size() + b.size() - 1];
        for (i, x) in a.coeffs().iter().enumerate() {
            for (j, y) in b.coeffs().iter().enumerate() {
                acc[i + j] = self.field.add(&acc[i + j], &self.field.mul(x, y));
            }
        }
        Polynomial::new(&self.field, acc)
    }

    fn contains(&self, x: &Polynomial<F>) -> bool {
        x.coeffs().iter().all(|c| self.field.contains(c))
    }

    fn eq(&self, a: &Polynomial<F>, b: &Polynomial<F>) -> bool {
        a.eq(b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Polynomial<F> {
        let len = rng.gen_range(1..=4);
        let coeffs = (0..len).map(|_| self.field.sample(rng)).collect();
        Polynomial::new(&self.field, coeffs)
    }
}

impl<F: FieldOps> SemiGroup for PolyMulMonoid<F> {}

impl<F: FieldOps> Monoid for PolyMulMonoid<F> {
    fn identity(&self) -> Polynomial<F> {
        Polynomial::one(&self.field)
    }
}

impl<F: FieldOps> Group for PolyMulMonoid<F> {
    fn inverse(&self, _x: &Polynomial<F>) -> Result<Polynomial<F>> {
        Err(AlgebraError::NotInvertible)
    }
}

impl<F: FieldOps> fmt::Debug for PolyAddGroup<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyAddGroup").finish()
    }
}

impl<F: FieldOps> fmt::Debug for PolyMulMonoid<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyMulMonoid").finish()
    }
}

/// The polynomial ring over `F`.
pub type PolyRing<F> = RingStructure<PolyAddGroup<F>, PolyMulMonoid<F>>;

/// Builds the polynomial ring: both structures first, then the binding.
#[must_use]
pub fn poly_ring<F: FieldOps>(field: &Arc<F>) -> PolyRing<F> {
    RingStructure::new(PolyAddGroup::new(field), PolyMulMonoid::new(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cayley_numbers::{finite_field, float_field};
    use cayley_structures::axioms;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn addition_pads_the_shorter_operand() {
        let f = Arc::new(float_field());
        let ring = poly_ring(&f);
        let a = Polynomial::new(&f, vec![1.0, 2.0]);
        let b = Polynomial::new(&f, vec![3.0, 4.0, 5.0]);
        let sum = ring.add(&a, &b);
        assert!(sum.eq(&Polynomial::new(&f, vec![4.0, 6.0, 5.0])));
    }

    #[test]
    fn zero_polynomial_is_additive_identity() {
        let f = Arc::new(float_field());
        let add = PolyAddGroup::new(&f);
        let p = Polynomial::new(&f, vec![1.0, 2.0, 3.0]);
        assert!(add.op(&p, &add.identity()).eq(&p));
    }

    #[test]
    fn subtraction_negates_coefficients() {
        let f = Arc::new(float_field());
        let ring = poly_ring(&f);
        let a = Polynomial::new(&f, vec![1.0]);
        let b = Polynomial::new(&f, vec![0.0, 1.0]);
        let diff = ring.sub(&a, &b).unwrap();
        assert!(diff.eq(&Polynomial::new(&f, vec![1.0, -1.0])));
    }

    #[test]
    fn multiplication_is_convolution() {
        let f = Arc::new(float_field());
        let ring = poly_ring(&f);
        // (x + 1)(x - 1) = x² - 1
        let a = Polynomial::new(&f, vec![1.0, 1.0]);
        let b = Polynomial::new(&f, vec![-1.0, 1.0]);
        let prod = ring.mul(&a, &b);
        assert!(prod.eq(&Polynomial::new(&f, vec![-1.0, 0.0, 1.0])));
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let f = Arc::new(float_field());
        let ring = poly_ring(&f);
        let a = Polynomial::new(&f, vec![2.0, 3.0, 4.0]);
        assert!(ring.mul(&a, &ring.mul_set().identity()).eq(&a));
    }

    #[test]
    fn power_repeats_multiplication() {
        let f = Arc::new(float_field());
        let ring = poly_ring(&f);
        // (x + 1)² = x² + 2x + 1
        let a = Polynomial::new(&f, vec![1.0, 1.0]);
        assert!(ring.power(&a, 2).eq(&Polynomial::new(&f, vec![1.0, 2.0, 1.0])));
    }

    #[test]
    fn polynomials_are_not_multiplicatively_invertible() {
        let f = Arc::new(float_field());
        let mul = PolyMulMonoid::new(&f);
        let a = Polynomial::new(&f, vec![1.0, 1.0]);
        assert!(mul.inverse(&a).is_err());
    }

    #[test]
    fn passes_ring_spot_checks() {
        let f = Arc::new(float_field());
        let ring = poly_ring(&f);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..16 {
            assert!(axioms::is_ring(&ring, &mut rng));
            assert!(axioms::is_distributive(
                ring.add_set(),
                ring.mul_set(),
                &mut rng
            ));
        }
    }

    #[test]
    fn ring_over_a_finite_field() {
        let f = Arc::new(finite_field(5));
        let ring = poly_ring(&f);
        // (x + 3)(x + 4) = x² + 7x + 12 ≡ x² + 2x + 2 (mod 5)
        let a = Polynomial::new(&f, vec![3, 1]);
        let b = Polynomial::new(&f, vec![4, 1]);
        assert!(ring.mul(&a, &b).eq(&Polynomial::new(&f, vec![2, 2, 1])));
    }
}
