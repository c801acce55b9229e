//! Flattened logarithmic potential.
//!
//! The potential is
//!
//! ```text
//! Φ(R, z) = ½·v0²·ln(m),   m = R² + z²/q² + rc² − Re⁻³·r·(R² − z²),   r = √(R² + z²)
//! ```
//!
//! where the last term of `m` is an optional perturbation that is switched
//! off entirely when `Re = 0`. The choice between the plain and perturbed
//! forms is made once at construction.
//!
//! Every evaluation mode is built on one shared algebraic shape of `m`
//! and its logarithmic derivatives, so the modes agree with each other by
//! construction.

mod describe;
mod error;
mod evaluate;
mod frequencies;
mod parameters;
mod results;
mod shape;

#[cfg(test)]
mod test_support;

pub use error::{FrequencyError, FrequencyKind, ParametersError, SingularityError};
pub use frequencies::{CircularOrbit, Frequencies};
pub use parameters::LogPotentialParameters;
pub use results::{Gradient, Hessian, RadialCurvature};

use crate::support::constraint::{
    Constraint, Finite, NonNegative, StrictlyPositive, UnitIntervalLowerOpen,
};

/// Whether the asymmetric perturbation term is active.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Branch {
    Plain,
    Perturbed {
        /// Perturbation coefficient `Re⁻³`.
        re_inv3: f64,
    },
}

/// An immutable flattened logarithmic potential.
///
/// Construct once, then query as often as needed. The value is `Copy` and
/// holds no interior mutability, so it may be shared freely across threads.
///
/// # Example
///
/// ```
/// use twine_galactic::models::galactic::log_potential::{
///     LogPotential, LogPotentialParameters,
/// };
///
/// let potential = LogPotential::new(LogPotentialParameters::new(1.0, 0.7, 0.1, 0.0))?;
///
/// let gradient = potential.gradient(1.0, 0.0)?;
/// assert!((gradient.dp_dr - 1.0 / 1.01).abs() < 1e-15);
/// assert_eq!(gradient.dp_dz, 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogPotential {
    v0: f64,
    q: f64,
    rc: f64,
    re: f64,
    v0sq: f64,
    v0sq_half: f64,
    q2i: f64,
    rc2: f64,
    offset: f64,
    branch: Branch,
}

impl LogPotential {
    /// Creates a potential from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError`] if `v0` is not strictly positive, `q` is
    /// outside `(0, 1]`, `rc` is negative, or `re`/`offset` is not finite.
    pub fn new(parameters: LogPotentialParameters) -> Result<Self, ParametersError> {
        let LogPotentialParameters {
            v0,
            q,
            rc,
            re,
            offset,
        } = parameters;

        StrictlyPositive::check(&v0)
            .map_err(|source| ParametersError::ScaleVelocity { v0, source })?;
        UnitIntervalLowerOpen::check(&q)
            .map_err(|source| ParametersError::Flattening { q, source })?;
        NonNegative::check(&rc).map_err(|source| ParametersError::CoreRadius { rc, source })?;
        Finite::check(&re)
            .map_err(|source| ParametersError::PerturbationRadius { re, source })?;
        Finite::check(&offset).map_err(|source| ParametersError::Offset { offset, source })?;

        Ok(Self::unchecked(v0, q, rc, re).with_offset(offset))
    }

    /// Creates a potential without validating the parameters.
    ///
    /// A zero `re` disables the perturbation term. Values outside the
    /// analytic domain (`v0 ≤ 0`, `q` outside `(0, 1]`, `rc < 0`) are not
    /// rejected; evaluating such a model yields unspecified numbers.
    #[must_use]
    pub fn unchecked(v0: f64, q: f64, rc: f64, re: f64) -> Self {
        let v0sq = v0 * v0;
        let branch = if re == 0.0 {
            Branch::Plain
        } else {
            let re_inv = re.recip();
            Branch::Perturbed {
                re_inv3: re_inv * re_inv * re_inv,
            }
        };

        Self {
            v0,
            q,
            rc,
            re,
            v0sq,
            v0sq_half: 0.5 * v0sq,
            q2i: (q * q).recip(),
            rc2: rc * rc,
            offset: 0.0,
            branch,
        }
    }

    /// Returns this potential with the additive normalization constant set.
    ///
    /// The offset is only applied by [`LogPotential::potential`] when the
    /// perturbation is disabled.
    #[must_use]
    pub fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Scale velocity `v0`.
    #[must_use]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// Flattening `q`.
    #[must_use]
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Core radius `rc`.
    #[must_use]
    pub fn rc(&self) -> f64 {
        self.rc
    }

    /// Perturbation radius `Re` (zero when the perturbation is disabled).
    #[must_use]
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Additive normalization constant.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Perturbation coefficient `Re⁻³`, or `None` when disabled.
    #[must_use]
    pub fn perturbation(&self) -> Option<f64> {
        match self.branch {
            Branch::Plain => None,
            Branch::Perturbed { re_inv3 } => Some(re_inv3),
        }
    }

    /// Rejects the origin of a potential with zero core radius.
    fn check_domain(&self, r: f64, z: f64) -> Result<(), SingularityError> {
        if self.rc2 == 0.0 && r == 0.0 && z == 0.0 {
            Err(SingularityError { r, z })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn derived_constants() {
        let potential = LogPotential::unchecked(2.0, 0.5, 0.3, 2.0);

        assert_eq!(potential.v0sq, 4.0);
        assert_eq!(potential.v0sq_half, 2.0);
        assert_eq!(potential.q2i, 4.0);
        assert!((potential.rc2 - 0.09).abs() < 1e-16);
        assert_eq!(potential.perturbation(), Some(0.125));
        assert_eq!(potential.offset(), 0.0);
    }

    #[test]
    fn zero_perturbation_radius_disables_branch() {
        let potential = LogPotential::unchecked(1.0, 1.0, 0.0, 0.0);
        assert_eq!(potential.branch, Branch::Plain);
        assert_eq!(potential.perturbation(), None);
    }

    #[test]
    fn negative_perturbation_radius_flips_sign() {
        let potential = LogPotential::unchecked(1.0, 1.0, 0.0, -2.0);
        assert_eq!(potential.perturbation(), Some(-0.125));
    }

    #[test]
    fn validated_construction() {
        let parameters = LogPotentialParameters::new(1.0, 0.7, 0.1, 0.0).with_offset(3.0);
        let potential = LogPotential::new(parameters).unwrap();

        assert_eq!(potential.v0(), 1.0);
        assert_eq!(potential.q(), 0.7);
        assert_eq!(potential.rc(), 0.1);
        assert_eq!(potential.re(), 0.0);
        assert_eq!(potential.offset(), 3.0);
    }

    #[test]
    fn rejects_invalid_parameters() {
        let base = LogPotentialParameters::default();

        assert_eq!(
            LogPotential::new(LogPotentialParameters { v0: 0.0, ..base }),
            Err(ParametersError::ScaleVelocity {
                v0: 0.0,
                source: ConstraintError::Zero
            })
        );
        assert_eq!(
            LogPotential::new(LogPotentialParameters { q: 1.2, ..base }),
            Err(ParametersError::Flattening {
                q: 1.2,
                source: ConstraintError::AboveMaximum
            })
        );
        assert_eq!(
            LogPotential::new(LogPotentialParameters { rc: -0.1, ..base }),
            Err(ParametersError::CoreRadius {
                rc: -0.1,
                source: ConstraintError::Negative
            })
        );
        assert!(matches!(
            LogPotential::new(LogPotentialParameters {
                re: f64::INFINITY,
                ..base
            }),
            Err(ParametersError::PerturbationRadius { .. })
        ));
        assert!(matches!(
            LogPotential::new(LogPotentialParameters {
                offset: f64::NAN,
                ..base
            }),
            Err(ParametersError::Offset { .. })
        ));
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogPotential>();

        let potential = LogPotential::unchecked(1.0, 0.8, 0.2, 5.0);
        let expected = potential.potential(1.5, 0.5).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| potential.potential(1.5, 0.5).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
