//! Complex numbers and the complex field.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};
use rand::{Rng, RngCore};

use cayley_structures::{
    AbelianGroup, AlgebraError, FieldStructure, Group, Magma, Monoid, Result, SemiGroup,
};

use crate::float::{approx_eq, EPSILON};

/// A complex number a + bi over `f64`.
///
/// The polar form is derived on demand, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex {
    /// The additive identity 0 + 0i.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The multiplicative identity 1 + 0i.
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// The imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Creates a + bi.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// The complex conjugate a - bi.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// The squared modulus a² + b².
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// The modulus.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Polar decomposition (r, θ).
    ///
    /// θ comes from `atan2`, so the quadrant survives the round trip through
    /// [`Complex::from_polar`].
    #[must_use]
    pub fn to_polar(&self) -> (f64, f64) {
        (self.abs(), self.im.atan2(self.re))
    }

    /// Builds r·(cos θ + i·sin θ).
    #[must_use]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Raises to a real power through the polar form.
    #[must_use]
    pub fn powf(&self, k: f64) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            return if k == 0.0 { Self::ONE } else { Self::ZERO };
        }
        let (r, theta) = self.to_polar();
        Self::from_polar(r.powf(k), k * theta)
    }

    /// The principal square root.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.powf(0.5)
    }

    /// The cube root.
    ///
    /// Inputs on the real axis take the real branch; Cardano's formula
    /// relies on this so conjugate cube roots sum back to real values.
    #[must_use]
    pub fn cbrt(&self) -> Self {
        if approx_eq(self.im, 0.0) {
            return Self::new(self.re.cbrt(), 0.0);
        }
        self.powf(1.0 / 3.0)
    }

    /// Component-wise approximate equality.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.re, other.re) && approx_eq(self.im, other.im)
    }

    /// Parses `<re>`, `<re>+<im>i`, `<re>-<im>i`, or `<im>i`.
    ///
    /// A missing imaginary coefficient before the `i` defaults to 1, an
    /// inherited convention rather than a general one.
    ///
    /// # Errors
    ///
    /// Fails with [`AlgebraError::Parse`] on malformed literals.
    pub fn parse(s: &str) -> Result<Self> {
        let fail = || AlgebraError::Parse(s.to_string());
        let body = s.trim().strip_suffix('i').ok_or_else(fail)?;

        // Split at the last sign that is neither leading nor an exponent sign.
        let mut split_at = None;
        for (idx, ch) in body.char_indices().skip(1) {
            if (ch == '+' || ch == '-') && !matches!(body.as_bytes()[idx - 1], b'e' | b'E') {
                split_at = Some(idx);
            }
        }
        let (re_str, im_str) = match split_at {
            Some(idx) => (&body[..idx], &body[idx..]),
            None => ("0", body),
        };

        let re: f64 = re_str.trim().parse().map_err(|_| fail())?;
        let im = match im_str.trim() {
            "" | "+" => 1.0,
            "-" => -1.0,
            v => v.parse().map_err(|_| fail())?,
        };
        Ok(Self::new(re, im))
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let r = rhs.norm_sqr();
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / r,
            (self.im * rhs.re - self.re * rhs.im) / r,
        )
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.re == 1.0 && self.im == 0.0
    }
}

/// Conversion of field carriers into complex numbers, used by the root
/// solver to take coefficients into the complex plane.
pub trait ToComplex {
    /// The complex image of this value.
    fn to_complex(&self) -> Complex;
}

impl ToComplex for f64 {
    fn to_complex(&self) -> Complex {
        Complex::new(*self, 0.0)
    }
}

impl ToComplex for Complex {
    fn to_complex(&self) -> Complex {
        *self
    }
}

/// The additive group (ℂ, +, 0).
#[derive(Clone, Copy, Debug, Default)]
pub struct ComplexAddGroup;

impl Magma for ComplexAddGroup {
    type Elem = Complex;

    fn op(&self, a: &Complex, b: &Complex) -> Complex {
        *a + *b
    }

    fn contains(&self, x: &Complex) -> bool {
        x.re.is_finite() && x.im.is_finite()
    }

    fn eq(&self, a: &Complex, b: &Complex) -> bool {
        a.approx_eq(b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Complex {
        Complex::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0))
    }
}

impl SemiGroup for ComplexAddGroup {}

impl Monoid for ComplexAddGroup {
    fn identity(&self) -> Complex {
        Complex::ZERO
    }
}

impl Group for ComplexAddGroup {
    fn inverse(&self, x: &Complex) -> Result<Complex> {
        Ok(-*x)
    }
}

impl AbelianGroup for ComplexAddGroup {}

/// The multiplicative group (ℂ \ {0}, ×, 1).
#[derive(Clone, Copy, Debug, Default)]
pub struct ComplexMulGroup;

impl Magma for ComplexMulGroup {
    type Elem = Complex;

    fn op(&self, a: &Complex, b: &Complex) -> Complex {
        *a * *b
    }

    fn contains(&self, x: &Complex) -> bool {
        x.re.is_finite() && x.im.is_finite() && !(x.re == 0.0 && x.im == 0.0)
    }

    fn eq(&self, a: &Complex, b: &Complex) -> bool {
        a.approx_eq(b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Complex {
        let r = rng.gen_range(0.5..10.0);
        let theta = rng.gen_range(0.0..std::f64::consts::TAU);
        Complex::from_polar(r, theta)
    }
}

impl SemiGroup for ComplexMulGroup {}

impl Monoid for ComplexMulGroup {
    fn identity(&self) -> Complex {
        Complex::ONE
    }
}

impl Group for ComplexMulGroup {
    fn inverse(&self, x: &Complex) -> Result<Complex> {
        let r = x.norm_sqr();
        if r < EPSILON {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Complex::new(x.re / r, -x.im / r))
    }
}

impl AbelianGroup for ComplexMulGroup {}

/// The field of complex numbers.
pub type ComplexField = FieldStructure<ComplexAddGroup, ComplexMulGroup>;

/// Builds the complex field: both group structures first, then the binding.
#[must_use]
pub fn complex_field() -> ComplexField {
    FieldStructure::new(ComplexAddGroup, ComplexMulGroup)
}
