//! Ring and field construction from paired group structures.
//!
//! Construction is two-phase: the additive and multiplicative structures are
//! built first, then bound together. The bound structure derives its
//! operations entirely from the two components.

use std::fmt::Debug;

use rand::RngCore;

use crate::error::{AlgebraError, Result};
use crate::traits::{AbelianGroup, Magma, Monoid};

/// A ring assembled from an additive abelian group and a multiplicative
/// monoid over the same carrier.
#[derive(Clone, Debug)]
pub struct RingStructure<A, M> {
    add_set: A,
    mul_set: M,
}

impl<A, M> RingStructure<A, M>
where
    A: AbelianGroup,
    M: Monoid<Elem = A::Elem>,
{
    /// Binds the additive and multiplicative structures.
    #[must_use]
    pub fn new(add_set: A, mul_set: M) -> Self {
        Self { add_set, mul_set }
    }

    /// The additive structure.
    pub fn add_set(&self) -> &A {
        &self.add_set
    }

    /// The multiplicative structure.
    pub fn mul_set(&self) -> &M {
        &self.mul_set
    }

    /// The additive identity.
    pub fn zero(&self) -> A::Elem {
        self.add_set.identity()
    }

    /// Adds two elements.
    pub fn add(&self, x: &A::Elem, y: &A::Elem) -> A::Elem {
        self.add_set.op(x, y)
    }

    /// Negates an element.
    ///
    /// # Errors
    ///
    /// Propagates a failed additive inverse; additive groups over a full
    /// carrier never fail.
    pub fn neg(&self, x: &A::Elem) -> Result<A::Elem> {
        self.add_set.inverse(x)
    }

    /// Subtracts `y` from `x` by adding the additive inverse.
    ///
    /// # Errors
    ///
    /// Propagates a failed additive inverse.
    pub fn sub(&self, x: &A::Elem, y: &A::Elem) -> Result<A::Elem> {
        Ok(self.add_set.op(x, &self.add_set.inverse(y)?))
    }

    /// Multiplies two elements.
    pub fn mul(&self, x: &A::Elem, y: &A::Elem) -> A::Elem {
        self.mul_set.op(x, y)
    }

    /// Raises `x` to the `n`-th power under multiplication.
    pub fn power(&self, x: &A::Elem, n: u32) -> A::Elem {
        self.mul_set.power(x, n)
    }
}

/// A field assembled from additive and multiplicative abelian groups.
///
/// The multiplicative carrier excludes the additive identity, so division
/// or inversion at zero fails with [`AlgebraError::DivisionByZero`].
#[derive(Clone, Debug)]
pub struct FieldStructure<A, M> {
    add_set: A,
    mul_set: M,
}

impl<A, M> FieldStructure<A, M>
where
    A: AbelianGroup,
    M: AbelianGroup<Elem = A::Elem>,
{
    /// Binds the additive and multiplicative structures.
    #[must_use]
    pub fn new(add_set: A, mul_set: M) -> Self {
        Self { add_set, mul_set }
    }

    /// The additive structure.
    pub fn add_set(&self) -> &A {
        &self.add_set
    }

    /// The multiplicative structure.
    pub fn mul_set(&self) -> &M {
        &self.mul_set
    }
}

/// The derived operation surface of a field.
///
/// Elements and polynomials are generic over this trait, so they work with
/// any concrete field structure without caring how it was assembled.
pub trait FieldOps: Debug {
    /// The carrier element type.
    type Elem: Clone + Debug;

    /// The additive identity.
    fn zero(&self) -> Self::Elem;

    /// The multiplicative identity.
    fn one(&self) -> Self::Elem;

    /// Adds two elements.
    fn add(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// Negates an element.
    ///
    /// # Errors
    ///
    /// Propagates a failed additive inverse.
    fn neg(&self, x: &Self::Elem) -> Result<Self::Elem>;

    /// Subtracts `y` from `x`.
    ///
    /// # Errors
    ///
    /// Propagates a failed additive inverse.
    fn sub(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem>;

    /// Multiplies two elements.
    fn mul(&self, x: &Self::Elem, y: &Self::Elem) -> Self::Elem;

    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Fails with [`AlgebraError::DivisionByZero`] at the additive identity
    /// and [`AlgebraError::NotInvertible`] for other non-units.
    fn inv(&self, x: &Self::Elem) -> Result<Self::Elem>;

    /// Divides `x` by `y`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`FieldOps::inv`] applied to `y`.
    fn div(&self, x: &Self::Elem, y: &Self::Elem) -> Result<Self::Elem>;

    /// Raises `x` to the `n`-th power under multiplication.
    fn power(&self, x: &Self::Elem, n: u32) -> Self::Elem;

    /// The field's element equality.
    fn eq(&self, a: &Self::Elem, b: &Self::Elem) -> bool;

    /// Tests membership of the additive carrier.
    fn contains(&self, x: &Self::Elem) -> bool;

    /// Draws a carrier element for spot checks and tests.
    fn sample(&self, rng: &mut dyn RngCore) -> Self::Elem;
}

impl<A, M> FieldOps for FieldStructure<A, M>
where
    A: AbelianGroup + Debug,
    M: AbelianGroup<Elem = A::Elem> + Debug,
{
    type Elem = A::Elem;

    fn zero(&self) -> A::Elem {
        self.add_set.identity()
    }

    fn one(&self) -> A::Elem {
        self.mul_set.identity()
    }

    fn add(&self, x: &A::Elem, y: &A::Elem) -> A::Elem {
        self.add_set.op(x, y)
    }

    fn neg(&self, x: &A::Elem) -> Result<A::Elem> {
        self.add_set.inverse(x)
    }

    fn sub(&self, x: &A::Elem, y: &A::Elem) -> Result<A::Elem> {
        Ok(self.add_set.op(x, &self.add_set.inverse(y)?))
    }

    fn mul(&self, x: &A::Elem, y: &A::Elem) -> A::Elem {
        self.mul_set.op(x, y)
    }

    fn inv(&self, x: &A::Elem) -> Result<A::Elem> {
        if self.add_set.eq(x, &self.add_set.identity()) {
            return Err(AlgebraError::DivisionByZero);
        }
        self.mul_set.inverse(x)
    }

    fn div(&self, x: &A::Elem, y: &A::Elem) -> Result<A::Elem> {
        Ok(self.mul_set.op(x, &self.inv(y)?))
    }

    fn power(&self, x: &A::Elem, n: u32) -> A::Elem {
        self.mul_set.power(x, n)
    }

    fn eq(&self, a: &A::Elem, b: &A::Elem) -> bool {
        self.add_set.eq(a, b)
    }

    fn contains(&self, x: &A::Elem) -> bool {
        self.add_set.contains(x)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> A::Elem {
        self.add_set.sample(rng)
    }
}
