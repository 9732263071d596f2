//! Field-valued objects.
//!
//! An element captures a shared reference to its owning field at construction
//! and delegates every arithmetic operation to it. Elements are immutable;
//! each operation returns a new element.

use std::sync::Arc;

use crate::error::{AlgebraError, Result};
use crate::ring::FieldOps;

/// A value paired with the field structure that defines its arithmetic.
///
/// Two elements may only be combined when they reference the same field
/// instance; mixing instances fails with [`AlgebraError::MixedField`] rather
/// than coercing silently.
#[derive(Clone, Debug)]
pub struct FieldElement<F: FieldOps> {
    value: F::Elem,
    field: Arc<F>,
}

impl<F: FieldOps> FieldElement<F> {
    /// Wraps `value` as an element of `field`.
    #[must_use]
    pub fn new(field: &Arc<F>, value: F::Elem) -> Self {
        Self {
            value,
            field: Arc::clone(field),
        }
    }

    /// The underlying value.
    pub fn value(&self) -> &F::Elem {
        &self.value
    }

    /// The owning field.
    pub fn field(&self) -> &Arc<F> {
        &self.field
    }

    fn same_field(&self, other: &Self) -> Result<()> {
        if Arc::ptr_eq(&self.field, &other.field) {
            Ok(())
        } else {
            Err(AlgebraError::MixedField)
        }
    }

    fn wrap(&self, value: F::Elem) -> Self {
        Self::new(&self.field, value)
    }

    /// Adds two elements of the same field.
    ///
    /// # Errors
    ///
    /// Fails with [`AlgebraError::MixedField`] when `other` is bound to a
    /// different field instance.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.same_field(other)?;
        Ok(self.wrap(self.field.add(&self.value, &other.value)))
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Fails with [`AlgebraError::MixedField`] on mismatched field instances.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.same_field(other)?;
        Ok(self.wrap(self.field.sub(&self.value, &other.value)?))
    }

    /// Multiplies two elements of the same field.
    ///
    /// # Errors
    ///
    /// Fails with [`AlgebraError::MixedField`] on mismatched field instances.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.same_field(other)?;
        Ok(self.wrap(self.field.mul(&self.value, &other.value)))
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    ///
    /// Fails with [`AlgebraError::MixedField`] on mismatched field instances,
    /// [`AlgebraError::DivisionByZero`] when `other` is the additive
    /// identity.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.same_field(other)?;
        Ok(self.wrap(self.field.div(&self.value, &other.value)?))
    }

    /// The additive inverse.
    ///
    /// # Errors
    ///
    /// Propagates a failed additive inverse.
    pub fn neg(&self) -> Result<Self> {
        Ok(self.wrap(self.field.neg(&self.value)?))
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Same conditions as [`FieldOps::inv`].
    pub fn inv(&self) -> Result<Self> {
        Ok(self.wrap(self.field.inv(&self.value)?))
    }

    /// Raises the element to the `n`-th power.
    #[must_use]
    pub fn power(&self, n: u32) -> Self {
        self.wrap(self.field.power(&self.value, n))
    }

    /// Whether this is the field's additive identity.
    pub fn is_zero(&self) -> bool {
        self.field.eq(&self.value, &self.field.zero())
    }

    /// Whether this is the field's multiplicative identity.
    pub fn is_one(&self) -> bool {
        self.field.eq(&self.value, &self.field.one())
    }

    /// Field equality of two elements.
    ///
    /// # Errors
    ///
    /// Fails with [`AlgebraError::MixedField`] on mismatched field instances.
    pub fn eq(&self, other: &Self) -> Result<bool> {
        self.same_field(other)?;
        Ok(self.field.eq(&self.value, &other.value))
    }
}
