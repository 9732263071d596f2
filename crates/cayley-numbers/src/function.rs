//! Pointwise function spaces as a field-like structure.
//!
//! Elements are shared real functions; the group operations combine values
//! pointwise through the generic operator dispatch. Equality probes a fixed
//! grid of sample points, so it is as heuristic as the axiom checks that
//! rely on it.

use std::fmt;
use std::sync::Arc;

use rand::{Rng, RngCore};

use cayley_structures::{
    AbelianGroup, FieldStructure, Group, Magma, Monoid, Result, SemiGroup,
};

use crate::dispatch::{self, Op, Value};
use crate::float::approx_eq;

/// A shared real function ℝ → ℝ.
#[derive(Clone)]
pub struct RealFn(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl RealFn {
    /// Wraps a closure.
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// The constant function x ↦ c.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(move |_| c)
    }

    /// The linear function x ↦ a·x + b.
    #[must_use]
    pub fn linear(a: f64, b: f64) -> Self {
        Self::new(move |x| a * x + b)
    }

    /// Evaluates at `x`.
    #[must_use]
    pub fn call(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}

impl fmt::Debug for RealFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RealFn")
    }
}

/// Grid probed by the structure equality check.
const PROBE_POINTS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

fn probe_eq(f: &RealFn, g: &RealFn) -> bool {
    PROBE_POINTS
        .iter()
        .all(|&x| approx_eq(f.call(x), g.call(x)))
}

fn pointwise(op: Op, f: &RealFn, g: &RealFn) -> RealFn {
    let (f, g) = (f.clone(), g.clone());
    RealFn::new(move |x| {
        match dispatch::apply(op, &Value::Scalar(f.call(x)), &Value::Scalar(g.call(x))) {
            Ok(Value::Scalar(v)) => v,
            _ => f64::NAN,
        }
    })
}

/// The additive group of real functions under pointwise addition.
#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionAddGroup;

impl Magma for FunctionAddGroup {
    type Elem = RealFn;

    fn op(&self, a: &RealFn, b: &RealFn) -> RealFn {
        pointwise(Op::Add, a, b)
    }

    fn contains(&self, _x: &RealFn) -> bool {
        true
    }

    fn eq(&self, a: &RealFn, b: &RealFn) -> bool {
        probe_eq(a, b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> RealFn {
        RealFn::linear(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))
    }
}

impl SemiGroup for FunctionAddGroup {}

impl Monoid for FunctionAddGroup {
    fn identity(&self) -> RealFn {
        RealFn::constant(0.0)
    }
}

impl Group for FunctionAddGroup {
    fn inverse(&self, x: &RealFn) -> Result<RealFn> {
        let x = x.clone();
        Ok(RealFn::new(move |t| -x.call(t)))
    }
}

impl AbelianGroup for FunctionAddGroup {}

/// The multiplicative group of real functions under pointwise
/// multiplication; identity is the constant-one function.
#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionMulGroup;

impl Magma for FunctionMulGroup {
    type Elem = RealFn;

    fn op(&self, a: &RealFn, b: &RealFn) -> RealFn {
        pointwise(Op::Mul, a, b)
    }

    fn contains(&self, _x: &RealFn) -> bool {
        true
    }

    fn eq(&self, a: &RealFn, b: &RealFn) -> bool {
        probe_eq(a, b)
    }

    fn sample(&self, rng: &mut dyn RngCore) -> RealFn {
        // Linear functions whose root lies outside the probe grid, so the
        // pointwise reciprocal stays finite where equality looks.
        let a = rng.gen_range(-1.0..1.0);
        let b = rng.gen_range(3.0..6.0);
        let b = if rng.gen::<bool>() { b } else { -b };
        RealFn::linear(a, b)
    }
}

impl SemiGroup for FunctionMulGroup {}

impl Monoid for FunctionMulGroup {
    fn identity(&self) -> RealFn {
        RealFn::constant(1.0)
    }
}

impl Group for FunctionMulGroup {
    fn inverse(&self, x: &RealFn) -> Result<RealFn> {
        let x = x.clone();
        Ok(RealFn::new(move |t| 1.0 / x.call(t)))
    }
}

impl AbelianGroup for FunctionMulGroup {}

/// The field-like structure of real function spaces.
pub type FunctionField = FieldStructure<FunctionAddGroup, FunctionMulGroup>;

/// Builds the function field: both group structures first, then the binding.
#[must_use]
pub fn function_field() -> FunctionField {
    FieldStructure::new(FunctionAddGroup, FunctionMulGroup)
}
