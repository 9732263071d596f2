//! # cayley-numbers
//!
//! Concrete number systems built on the structure hierarchy:
//!
//! - [`float`]: the field of floating point reals
//! - [`finite`]: integers modulo n with a precomputed inverse table
//! - [`complex`]: complex numbers a + bi
//! - [`ratio`]: rational pairs a/b with explicit reduction
//! - [`function`]: pointwise function spaces
//! - [`dispatch`]: generic operator dispatch over heterogeneous value kinds
//! - [`parse`]: the textual literal parser
//!
//! Every field is a `FieldStructure` assembled from an additive and a
//! multiplicative group over the same carrier; fields are built once and
//! shared behind `Arc` by the values that reference them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod dispatch;
pub mod finite;
pub mod float;
pub mod function;
pub mod parse;
pub mod ratio;

mod proptests;

pub use complex::{complex_field, Complex, ComplexField, ToComplex};
pub use dispatch::{Op, Value};
pub use finite::{finite_field, FiniteField};
pub use float::{float_field, FloatField};
pub use function::{function_field, FunctionField, RealFn};
pub use parse::{parse, Parsed};
pub use ratio::{ratio_field, Ratio, RatioField};
