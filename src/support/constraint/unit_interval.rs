use std::cmp::Ordering;

use num_traits::{One, Zero};

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the left-open unit interval: `0 < x ≤ 1`.
///
/// # Examples
///
/// ```
/// use twine_galactic::support::constraint::{Constraint, UnitIntervalLowerOpen};
///
/// assert!(UnitIntervalLowerOpen::check(&0.25).is_ok());
/// assert!(UnitIntervalLowerOpen::check(&1.0).is_ok());
///
/// // Error cases:
/// assert!(UnitIntervalLowerOpen::check(&0.0).is_err());
/// assert!(UnitIntervalLowerOpen::check(&-0.5).is_err());
/// assert!(UnitIntervalLowerOpen::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
