//! # cayley-poly
//!
//! Polynomials over an arbitrary field, organised the same way as the
//! number systems: the coefficient lists form an additive abelian group and
//! a multiplicative monoid, and a [`PolyRing`] binds the two.
//!
//! - [`polynomial`]: the coefficient-list representation and its queries
//! - [`groups`]: the additive group, multiplicative monoid, and ring binding
//! - [`roots`]: closed-form roots for degrees one through three
//!
//! Coefficients are stored in ascending degree order, so `coeffs[k]` is the
//! coefficient of `x^k`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod groups;
pub mod polynomial;
pub mod roots;

pub use groups::{poly_ring, PolyAddGroup, PolyMulMonoid, PolyRing};
pub use polynomial::Polynomial;
pub use roots::roots;
