//! Algebraic structure traits.
//!
//! A structure is a capability object: it carries the operation, identity,
//! inverse, membership test, and sampler for one carrier type. Structures are
//! shared and immutable; many values may reference a single instance.

use std::fmt::Debug;

use rand::RngCore;

use crate::error::Result;

/// A set with a closed binary operation.
pub trait Magma {
    /// The carrier element type.
    type Elem: Clone + Debug;

    /// Applies the binary operation.
    fn op(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Tests carrier membership.
    fn contains(&self, x: &Self::Elem) -> bool;

    /// Structure-specific equality on carrier elements.
    ///
    /// Floating point carriers compare within a tolerance; rationals compare
    /// by cross-multiplication.
    fn eq(&self, a: &Self::Elem, b: &Self::Elem) -> bool;

    /// Draws a carrier element for axiom spot checks.
    fn sample(&self, rng: &mut dyn RngCore) -> Self::Elem;
}

/// A magma whose operation is associative.
pub trait SemiGroup: Magma {
    /// Computes the coset g·H = {g·h : h ∈ H}.
    ///
    /// The result is deduplicated under the structure's equality.
    fn left_coset(&self, g: &Self::Elem, hs: &[Self::Elem]) -> Vec<Self::Elem> {
        let mut coset: Vec<Self::Elem> = Vec::with_capacity(hs.len());
        for h in hs {
            let gh = self.op(g, h);
            if !coset.iter().any(|x| self.eq(x, &gh)) {
                coset.push(gh);
            }
        }
        coset
    }

    /// Computes the coset H·g, formed by composing `g` with every element of
    /// `H` under the same operation as `left_coset`.
    fn right_coset(&self, hs: &[Self::Elem], g: &Self::Elem) -> Vec<Self::Elem> {
        self.left_coset(g, hs)
    }
}

/// A semigroup with an identity element.
pub trait Monoid: SemiGroup {
    /// The identity element.
    fn identity(&self) -> Self::Elem;

    /// Applies the operation to `x` a total of `n` times, starting from the
    /// identity.
    fn power(&self, x: &Self::Elem, n: u32) -> Self::Elem {
        let mut acc = self.identity();
        for _ in 0..n {
            acc = self.op(&acc, x);
        }
        acc
    }
}

/// A monoid in which elements have two-sided inverses.
pub trait Group: Monoid {
    /// Computes the inverse of `x`.
    ///
    /// # Errors
    ///
    /// Fails when `x` has no inverse in this structure.
    fn inverse(&self, x: &Self::Elem) -> Result<Self::Elem>;
}

/// A group whose operation is commutative.
pub trait AbelianGroup: Group {}
