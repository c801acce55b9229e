//! Numeric constraints checked at construction time.
//!
//! Model parameters are plain numbers on the hot evaluation path, so instead
//! of wrapping them these markers are used to validate values once, when a
//! model is built from its parameters.
//!
//! # Provided constraints
//!
//! - [`Finite`]: Neither infinite nor `NaN`
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitIntervalLowerOpen`]: Lower-open unit interval `0 < x ≤ 1`
//!
//! # Example
//!
//! ```
//! use twine_galactic::support::constraint::{Constraint, ConstraintError, StrictlyPositive};
//!
//! assert!(StrictlyPositive::check(&220.0).is_ok());
//! assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
//! ```
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod finite;
mod non_negative;
mod strictly_positive;
mod unit_interval;

use thiserror::Error;

pub use finite::Finite;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitIntervalLowerOpen;

/// A trait for enforcing numeric invariants.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`NonNegative`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}
