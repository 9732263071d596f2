//! The field of floating point reals.

use rand::{Rng, RngCore};

use cayley_structures::{
    AbelianGroup, AlgebraError, FieldStructure, Group, Magma, Monoid, Result, SemiGroup,
};

/// Tolerance for approximate equality of floating point carriers.
pub const EPSILON: f64 = 1e-9;

/// Approximate equality within [`EPSILON`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// The additive group (ℝ, +, 0).
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatAddGroup;

impl Magma for FloatAddGroup {
    type Elem = f64;

    fn op(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn contains(&self, x: &f64) -> bool {
        x.is_finite()
    }

    fn eq(&self, a: &f64, b: &f64) -> bool {
        approx_eq(*a, *b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        rng.gen_range(-10.0..10.0)
    }
}

impl SemiGroup for FloatAddGroup {}

impl Monoid for FloatAddGroup {
    fn identity(&self) -> f64 {
        0.0
    }
}

impl Group for FloatAddGroup {
    fn inverse(&self, x: &f64) -> Result<f64> {
        Ok(-x)
    }
}

impl AbelianGroup for FloatAddGroup {}

/// The multiplicative group (ℝ \ {0}, ×, 1).
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatMulGroup;

impl Magma for FloatMulGroup {
    type Elem = f64;

    fn op(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn contains(&self, x: &f64) -> bool {
        x.is_finite() && *x != 0.0
    }

    fn eq(&self, a: &f64, b: &f64) -> bool {
        approx_eq(*a, *b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        let magnitude = rng.gen_range(0.5..10.0);
        if rng.gen::<bool>() {
            magnitude
        } else {
            -magnitude
        }
    }
}

impl SemiGroup for FloatMulGroup {}

impl Monoid for FloatMulGroup {
    fn identity(&self) -> f64 {
        1.0
    }
}

impl Group for FloatMulGroup {
    fn inverse(&self, x: &f64) -> Result<f64> {
        if approx_eq(*x, 0.0) {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(1.0 / x)
    }
}

impl AbelianGroup for FloatMulGroup {}

/// The field of floating point reals.
pub type FloatField = FieldStructure<FloatAddGroup, FloatMulGroup>;

/// Builds the float field: both group structures first, then the binding.
#[must_use]
pub fn float_field() -> FloatField {
    FieldStructure::new(FloatAddGroup, FloatMulGroup)
}
