use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Note that `-0.0` compares equal to zero and is accepted.
///
/// # Examples
///
/// ```
/// use twine_galactic::support::constraint::{Constraint, NonNegative};
///
/// assert!(NonNegative::check(&0.0).is_ok());
/// assert!(NonNegative::check(&5).is_ok());
///
/// // Error cases:
/// assert!(NonNegative::check(&-7).is_err());
/// assert!(NonNegative::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
