//! Finite fields ℤ/n with a precomputed inverse table.

use rand::{Rng, RngCore};

use cayley_structures::{
    AbelianGroup, AlgebraError, FieldStructure, Group, Magma, Monoid, Result, SemiGroup,
};

/// The additive group of integers modulo `n`.
#[derive(Clone, Debug)]
pub struct FiniteAddGroup {
    n: u64,
}

impl FiniteAddGroup {
    /// The group (ℤ/n, +).
    #[must_use]
    pub fn new(n: u64) -> Self {
        Self { n }
    }

    /// The modulus.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.n
    }
}

impl Magma for FiniteAddGroup {
    type Elem = u64;

    fn op(&self, a: &u64, b: &u64) -> u64 {
        (a + b) % self.n
    }

    fn contains(&self, x: &u64) -> bool {
        *x < self.n
    }

    fn eq(&self, a: &u64, b: &u64) -> bool {
        a == b
    }

    fn sample(&self, rng: &mut dyn RngCore) -> u64 {
        rng.gen_range(0..self.n)
    }
}

impl SemiGroup for FiniteAddGroup {}

impl Monoid for FiniteAddGroup {
    fn identity(&self) -> u64 {
        0
    }
}

impl Group for FiniteAddGroup {
    fn inverse(&self, x: &u64) -> Result<u64> {
        Ok((self.n - x) % self.n)
    }
}

impl AbelianGroup for FiniteAddGroup {}

/// The multiplicative group of units modulo `n`.
///
/// The inverse table is computed once at construction via the extended
/// Euclidean algorithm and never mutated afterwards. Residues sharing a
/// factor with `n` have no entry and surface `NotInvertible`.
#[derive(Clone, Debug)]
pub struct FiniteMulGroup {
    n: u64,
    inv_table: Vec<Option<u64>>,
}

impl FiniteMulGroup {
    /// The group ((ℤ/n) \ {0}, ×) with its inverse table.
    #[must_use]
    pub fn new(n: u64) -> Self {
        let mut inv_table = vec![None; usize::try_from(n).unwrap_or(usize::MAX)];
        for x in 1..n {
            inv_table[usize::try_from(x).unwrap_or_default()] = mod_inverse(x, n);
        }
        Self { n, inv_table }
    }

    /// The modulus.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.n
    }
}

/// Extended Euclidean inverse of `x` modulo `n`.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn mod_inverse(x: u64, n: u64) -> Option<u64> {
    let (mut t, mut new_t) = (0i64, 1i64);
    let (mut r, mut new_r) = (n as i64, x as i64);
    while new_r != 0 {
        let q = r / new_r;
        (t, new_t) = (new_t, t - q * new_t);
        (r, new_r) = (new_r, r - q * new_r);
    }
    if r != 1 {
        return None;
    }
    Some(t.rem_euclid(n as i64) as u64)
}

impl Magma for FiniteMulGroup {
    type Elem = u64;

    #[allow(clippy::cast_possible_truncation)]
    fn op(&self, a: &u64, b: &u64) -> u64 {
        // The remainder is always below n, so the narrowing cast is exact.
        (u128::from(*a) * u128::from(*b) % u128::from(self.n)) as u64
    }

    fn contains(&self, x: &u64) -> bool {
        *x > 0 && *x < self.n
    }

    fn eq(&self, a: &u64, b: &u64) -> bool {
        a == b
    }

    fn sample(&self, rng: &mut dyn RngCore) -> u64 {
        rng.gen_range(1..self.n)
    }
}

impl SemiGroup for FiniteMulGroup {}

impl Monoid for FiniteMulGroup {
    fn identity(&self) -> u64 {
        1
    }
}

impl Group for FiniteMulGroup {
    fn inverse(&self, x: &u64) -> Result<u64> {
        if *x == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        self.inv_table
            .get(usize::try_from(*x).unwrap_or_default())
            .copied()
            .flatten()
            .ok_or(AlgebraError::NotInvertible)
    }
}

impl AbelianGroup for FiniteMulGroup {}

/// A finite field of integers modulo `n`.
pub type FiniteField = FieldStructure<FiniteAddGroup, FiniteMulGroup>;

/// Builds ℤ/n: the additive group, the multiplicative group with its unit
/// inverse table, then the field binding.
///
/// For composite `n` the structure is a ring rather than a true field;
/// inverting a non-unit residue fails with `NotInvertible`.
///
/// # Panics
///
/// Panics if `n < 2`.
#[must_use]
pub fn finite_field(n: u64) -> FiniteField {
    assert!(n >= 2, "modulus must be at least 2");
    let add_set = FiniteAddGroup::new(n);
    let mul_set = FiniteMulGroup::new(n);
    FieldStructure::new(add_set, mul_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cayley_structures::{axioms, FieldElement, FieldOps};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::Arc;

    #[test]
    fn mod_five_fixtures() {
        let f5 = finite_field(5);
        assert_eq!(f5.add_set().op(&3, &4), 2);
        assert_eq!(f5.add_set().inverse(&3).unwrap(), 2);
        assert_eq!(f5.mul_set().op(&3, &4), 2);
    }

    #[test]
    fn inverse_table_holds_true_inverses() {
        let f7 = finite_field(7);
        for x in 1..7 {
            let xi = f7.mul_set().inverse(&x).unwrap();
            assert_eq!(f7.mul_set().op(&x, &xi), 1, "inverse of {x} mod 7");
        }
    }

    #[test]
    fn composite_modulus_has_non_units() {
        let f6 = finite_field(6);
        assert_eq!(f6.mul_set().inverse(&5).unwrap(), 5);
        assert_eq!(
            f6.mul_set().inverse(&2).unwrap_err(),
            AlgebraError::NotInvertible
        );
        assert_eq!(
            f6.mul_set().inverse(&3).unwrap_err(),
            AlgebraError::NotInvertible
        );
    }

    #[test]
    fn zero_is_outside_the_multiplicative_carrier() {
        let f5 = finite_field(5);
        assert!(!f5.mul_set().contains(&0));
        assert_eq!(f5.inv(&0).unwrap_err(), AlgebraError::DivisionByZero);
        assert_eq!(f5.div(&3, &0).unwrap_err(), AlgebraError::DivisionByZero);
    }

    #[test]
    fn derived_field_operations() {
        let f5 = finite_field(5);
        assert_eq!(f5.sub(&1, &3).unwrap(), 3);
        assert_eq!(f5.div(&1, &3).unwrap(), 2);
        assert_eq!(f5.power(&3, 4), 1);
    }

    #[test]
    fn passes_field_spot_checks_for_prime_modulus() {
        let f11 = finite_field(11);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..32 {
            assert!(axioms::is_field(&f11, &mut rng));
            assert!(axioms::is_distributive(
                f11.add_set(),
                f11.mul_set(),
                &mut rng
            ));
        }
    }

    #[test]
    fn elements_of_different_moduli_do_not_mix() {
        let f5 = Arc::new(finite_field(5));
        let f7 = Arc::new(finite_field(7));
        let a = FieldElement::new(&f5, 3);
        let b = FieldElement::new(&f7, 3);
        assert_eq!(a.add(&b).unwrap_err(), AlgebraError::MixedField);
    }
}
