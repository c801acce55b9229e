use num_traits::Float;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// # Examples
///
/// ```
/// use twine_galactic::support::constraint::{Constraint, Finite};
///
/// assert!(Finite::check(&-3.0).is_ok());
/// assert!(Finite::check(&0.0_f32).is_ok());
///
/// // Error cases:
/// assert!(Finite::check(&f64::INFINITY).is_err());
/// assert!(Finite::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
