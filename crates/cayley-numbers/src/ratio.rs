//! Rational pairs and the ratio field.
//!
//! Ratios are deliberately not reduced on construction; reduction is the
//! explicit [`Ratio::reduce`] operation. Structure equality therefore
//! compares by cross-multiplication.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use rand::{Rng, RngCore};

use cayley_structures::{
    AbelianGroup, AlgebraError, FieldStructure, Group, Magma, Monoid, Result, SemiGroup,
};

use crate::complex::{Complex, ToComplex};

/// A rational number a/b.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    /// The numerator.
    pub num: i64,
    /// The denominator, never zero.
    pub den: i64,
}

impl Ratio {
    /// Creates a/b.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self { num, den }
    }

    /// Creates a/1.
    #[must_use]
    pub fn from_integer(num: i64) -> Self {
        Self { num, den: 1 }
    }

    /// Divides both components by their greatest common divisor.
    #[must_use]
    pub fn reduce(&self) -> Self {
        let g = gcd(self.num, self.den);
        Self {
            num: self.num / g,
            den: self.den / g,
        }
    }

    /// Cross-multiplied equality: a/b = c/d iff a·d = c·b.
    #[must_use]
    pub fn eq_value(&self, other: &Self) -> bool {
        i128::from(self.num) * i128::from(other.den) == i128::from(other.num) * i128::from(self.den)
    }

    /// The numeric value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Parses `"a/b"`, or a bare integer `"a"` meaning denominator 1.
    ///
    /// # Errors
    ///
    /// Fails with [`AlgebraError::Parse`] on malformed components or a zero
    /// denominator.
    pub fn parse(s: &str) -> Result<Self> {
        let fail = || AlgebraError::Parse(s.to_string());
        match s.trim().split_once('/') {
            Some((a, b)) => {
                let num = a.trim().parse().map_err(|_| fail())?;
                let den: i64 = b.trim().parse().map_err(|_| fail())?;
                if den == 0 {
                    return Err(fail());
                }
                Ok(Self { num, den })
            }
            None => {
                let num = s.trim().parse().map_err(|_| fail())?;
                Ok(Self { num, den: 1 })
            }
        }
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.den + self.den * rhs.num, self.den * rhs.den)
    }
}

impl Sub for Ratio {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for Ratio {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Neg for Ratio {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Zero for Ratio {
    fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Ratio {
    fn one() -> Self {
        Self { num: 1, den: 1 }
    }

    fn is_one(&self) -> bool {
        self.num == self.den
    }
}

impl ToComplex for Ratio {
    fn to_complex(&self) -> Complex {
        Complex::new(self.to_f64(), 0.0)
    }
}

/// The additive group of ratios: cross-multiplied sum, no auto-reduction.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatioAddGroup;

impl Magma for RatioAddGroup {
    type Elem = Ratio;

    fn op(&self, a: &Ratio, b: &Ratio) -> Ratio {
        *a + *b
    }

    fn contains(&self, x: &Ratio) -> bool {
        x.den != 0
    }

    fn eq(&self, a: &Ratio, b: &Ratio) -> bool {
        a.eq_value(b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Ratio {
        Ratio::new(rng.gen_range(-20..=20), rng.gen_range(1..=20))
    }
}

impl SemiGroup for RatioAddGroup {}

impl Monoid for RatioAddGroup {
    fn identity(&self) -> Ratio {
        Ratio::zero()
    }
}

impl Group for RatioAddGroup {
    fn inverse(&self, x: &Ratio) -> Result<Ratio> {
        Ok(-*x)
    }
}

impl AbelianGroup for RatioAddGroup {}

/// The multiplicative group of nonzero ratios: componentwise product,
/// inverse swaps numerator and denominator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatioMulGroup;

impl Magma for RatioMulGroup {
    type Elem = Ratio;

    fn op(&self, a: &Ratio, b: &Ratio) -> Ratio {
        *a * *b
    }

    fn contains(&self, x: &Ratio) -> bool {
        x.den != 0 && x.num != 0
    }

    fn eq(&self, a: &Ratio, b: &Ratio) -> bool {
        a.eq_value(b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Ratio {
        let num = rng.gen_range(1..=20);
        let num = if rng.gen::<bool>() { num } else { -num };
        Ratio::new(num, rng.gen_range(1..=20))
    }
}

impl SemiGroup for RatioMulGroup {}

impl Monoid for RatioMulGroup {
    fn identity(&self) -> Ratio {
        Ratio::one()
    }
}

impl Group for RatioMulGroup {
    fn inverse(&self, x: &Ratio) -> Result<Ratio> {
        if x.num == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Ratio {
            num: x.den,
            den: x.num,
        })
    }
}

impl AbelianGroup for RatioMulGroup {}

/// The field of rational pairs.
pub type RatioField = FieldStructure<RatioAddGroup, RatioMulGroup>;

/// Builds the ratio field: both group structures first, then the binding.
#[must_use]
pub fn ratio_field() -> RatioField {
    FieldStructure::new(RatioAddGroup, RatioMulGroup)
}
