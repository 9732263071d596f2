//! # cayley-structures
//!
//! Composable algebraic structures for the Cayley workspace.
//!
//! This crate provides:
//! - Capability traits: `Magma`, `SemiGroup`, `Monoid`, `Group`, `AbelianGroup`
//! - Generic ring and field construction from paired group structures
//! - Field-valued elements bound to a shared field instance
//! - Permutation groups
//! - Probabilistic axiom spot checks
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Magma
//!  └── SemiGroup
//!       └── Monoid
//!            └── Group
//!                 └── AbelianGroup
//! ```
//!
//! A `RingStructure` binds an additive `AbelianGroup` to a multiplicative
//! `Monoid` over the same carrier; a `FieldStructure` binds two abelian
//! groups and additionally derives division.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod axioms;
pub mod element;
pub mod error;
pub mod permutation;
pub mod ring;
pub mod traits;

pub use element::FieldElement;
pub use error::{AlgebraError, Result};
pub use permutation::PermutationGroup;
pub use ring::{FieldOps, FieldStructure, RingStructure};
pub use traits::{AbelianGroup, Group, Magma, Monoid, SemiGroup};
