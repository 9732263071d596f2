//! Property-based tests across the concrete number fields.
