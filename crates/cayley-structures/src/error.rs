//! The shared error type for the algebra crates.

use thiserror::Error;

/// Errors surfaced by algebraic operations.
///
/// All failures are local and synchronous; nothing is retried or recovered
/// internally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// An operator name or operand-kind combination the generic dispatcher
    /// does not recognize.
    #[error("invalid operator `{0}`")]
    InvalidOperator(String),

    /// A malformed numeric, complex, or ratio literal.
    #[error("parse failure: `{0}`")]
    Parse(String),

    /// An inverse was requested for an element that has none.
    #[error("element is not invertible")]
    NotInvertible,

    /// Division or inversion at the additive identity.
    #[error("division by zero")]
    DivisionByZero,

    /// The root solver only handles degrees 1 through 3.
    #[error("unsupported polynomial degree {0}")]
    UnsupportedDegree(usize),

    /// Arithmetic between elements bound to different field instances.
    #[error("operands belong to different field instances")]
    MixedField,
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AlgebraError>;
