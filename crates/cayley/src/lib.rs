//! # cayley
//!
//! Composable algebra built bottom-up: capability traits classify a carrier
//! as a semigroup, monoid, group, or abelian group; rings and fields bind an
//! additive and a multiplicative structure over one carrier; concrete number
//! systems instantiate the field interface; polynomials and root solving sit
//! on top of any of them.
//!
//! ```
//! use std::sync::Arc;
//!
//! use cayley::numbers::float_field;
//! use cayley::poly::{roots, Polynomial};
//!
//! let field = Arc::new(float_field());
//! // x² - 3x + 2 = (x - 1)(x - 2)
//! let p = Polynomial::new(&field, vec![2.0, -3.0, 1.0]);
//! let rs = roots(&p)?;
//! assert!(rs.iter().any(|r| r.approx_eq(&1.0.into())));
//! # Ok::<(), cayley::structures::AlgebraError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cayley_dirmeta as dirmeta;
pub use cayley_numbers as numbers;
pub use cayley_poly as poly;
pub use cayley_structures as structures;

/// The commonly used surface in one import.
pub mod prelude {
    pub use cayley_numbers::{
        complex_field, finite_field, float_field, function_field, parse, ratio_field, Complex,
        Op, Parsed, Ratio, RealFn, ToComplex, Value,
    };
    pub use cayley_poly::{poly_ring, roots, Polynomial};
    pub use cayley_structures::{
        AbelianGroup, AlgebraError, FieldElement, FieldOps, FieldStructure, Group, Magma,
        Monoid, PermutationGroup, Result, RingStructure, SemiGroup,
    };
}
