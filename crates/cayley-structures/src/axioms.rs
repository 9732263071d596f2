//! Probabilistic axiom spot checks.
//!
//! Each predicate tests a single instance of an axiom under the structure's
//! own equality. The sampled classification checks (`is_group`, `is_field`,
//! ...) draw 2-3 elements from the structure's sampler. A pass is evidence,
//! not proof: a structure can satisfy a sampled instance while violating the
//! axiom on an untested element.

use rand::RngCore;

use crate::ring::{FieldStructure, RingStructure};
use crate::traits::{AbelianGroup, Group, Magma, Monoid, SemiGroup};

/// `a·b` stays inside the carrier.
pub fn closure<S: Magma>(s: &S, a: &S::Elem, b: &S::Elem) -> bool {
    s.contains(&s.op(a, b))
}

/// `(a·b)·c = a·(b·c)`.
pub fn associativity<S: Magma>(s: &S, a: &S::Elem, b: &S::Elem, c: &S::Elem) -> bool {
    s.eq(&s.op(&s.op(a, b), c), &s.op(a, &s.op(b, c)))
}

/// `e·a = a`.
pub fn identity<S: Monoid>(s: &S, a: &S::Elem) -> bool {
    s.eq(&s.op(&s.identity(), a), a)
}

/// `a·a⁻¹ = e`.
pub fn inverse<S: Group>(s: &S, a: &S::Elem) -> bool {
    match s.inverse(a) {
        Ok(ai) => s.eq(&s.op(a, &ai), &s.identity()),
        Err(_) => false,
    }
}

/// `a·b = b·a`.
pub fn commutative<S: Magma>(s: &S, a: &S::Elem, b: &S::Elem) -> bool {
    s.eq(&s.op(a, b), &s.op(b, a))
}

/// `a·(b+c) = a·b + a·c`, relating two structures over one carrier.
pub fn left_distributive<A, M>(add: &A, mul: &M, a: &A::Elem, b: &A::Elem, c: &A::Elem) -> bool
where
    A: Magma,
    M: Magma<Elem = A::Elem>,
{
    add.eq(
        &mul.op(a, &add.op(b, c)),
        &add.op(&mul.op(a, b), &mul.op(a, c)),
    )
}

/// `(b+c)·a = b·a + c·a`.
pub fn right_distributive<A, M>(add: &A, mul: &M, a: &A::Elem, b: &A::Elem, c: &A::Elem) -> bool
where
    A: Magma,
    M: Magma<Elem = A::Elem>,
{
    add.eq(
        &mul.op(&add.op(b, c), a),
        &add.op(&mul.op(b, a), &mul.op(c, a)),
    )
}

/// `g·h·g⁻¹` lands back in `H`: one conjugation instance of the normal
/// subgroup condition.
pub fn conjugation_closed<G: Group>(s: &G, hs: &[G::Elem], g: &G::Elem, h: &G::Elem) -> bool {
    match s.inverse(g) {
        Ok(gi) => {
            let conj = s.op(&s.op(g, h), &gi);
            hs.iter().any(|x| s.eq(x, &conj))
        }
        Err(_) => false,
    }
}

/// Closure on a sampled pair.
pub fn is_magma<S: Magma>(s: &S, rng: &mut dyn RngCore) -> bool {
    let a = s.sample(rng);
    let b = s.sample(rng);
    closure(s, &a, &b)
}

/// Closure plus associativity on sampled elements.
pub fn is_semigroup<S: SemiGroup>(s: &S, rng: &mut dyn RngCore) -> bool {
    let a = s.sample(rng);
    let b = s.sample(rng);
    let c = s.sample(rng);
    closure(s, &a, &b) && associativity(s, &a, &b, &c)
}

/// Semigroup check plus the identity axiom on a sampled element.
pub fn is_monoid<S: Monoid>(s: &S, rng: &mut dyn RngCore) -> bool {
    let a = s.sample(rng);
    is_semigroup(s, rng) && identity(s, &a)
}

/// Monoid check plus the inverse axiom on a sampled element.
pub fn is_group<S: Group>(s: &S, rng: &mut dyn RngCore) -> bool {
    let a = s.sample(rng);
    is_monoid(s, rng) && inverse(s, &a)
}

/// Closure plus the inverse axiom on sampled elements, without requiring
/// associativity or an identity law.
pub fn is_quasigroup<S: Group>(s: &S, rng: &mut dyn RngCore) -> bool {
    let a = s.sample(rng);
    let b = s.sample(rng);
    closure(s, &a, &b) && inverse(s, &a)
}

/// Quasigroup check plus the identity axiom on a sampled element.
pub fn is_loop<S: Group>(s: &S, rng: &mut dyn RngCore) -> bool {
    let a = s.sample(rng);
    is_quasigroup(s, rng) && identity(s, &a)
}

/// Group check plus commutativity on a sampled pair.
pub fn is_abelian_group<S: AbelianGroup>(s: &S, rng: &mut dyn RngCore) -> bool {
    let a = s.sample(rng);
    let b = s.sample(rng);
    is_group(s, rng) && commutative(s, &a, &b)
}

/// Sampled left and right distributivity of `mul` over `add`.
pub fn is_distributive<A, M>(add: &A, mul: &M, rng: &mut dyn RngCore) -> bool
where
    A: Magma,
    M: Magma<Elem = A::Elem>,
{
    let a = add.sample(rng);
    let b = add.sample(rng);
    let c = add.sample(rng);
    left_distributive(add, mul, &a, &b, &c) && right_distributive(add, mul, &a, &b, &c)
}

/// Abelian additive group plus multiplicative semigroup, on samples.
pub fn is_ring<A, M>(ring: &RingStructure<A, M>, rng: &mut dyn RngCore) -> bool
where
    A: AbelianGroup,
    M: Monoid<Elem = A::Elem>,
{
    is_abelian_group(ring.add_set(), rng) && is_semigroup(ring.mul_set(), rng)
}

/// Abelian additive and multiplicative groups, on samples.
///
/// The multiplicative structure samples its own carrier, which excludes the
/// additive identity.
pub fn is_field<A, M>(field: &FieldStructure<A, M>, rng: &mut dyn RngCore) -> bool
where
    A: AbelianGroup,
    M: AbelianGroup<Elem = A::Elem>,
{
    is_abelian_group(field.add_set(), rng) && is_abelian_group(field.mul_set(), rng)
}
