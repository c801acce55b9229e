use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// The logarithm argument vanishes: the origin of a potential with zero core radius.
///
/// For the equatorial evaluation `z` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("(R, z) = ({r}, {z}) is singular at zero core radius")]
pub struct SingularityError {
    /// Cylindrical radius `R` of the rejected point.
    pub r: f64,

    /// Height `z` of the rejected point.
    pub z: f64,
}

/// Errors that can occur while deriving orbital frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrequencyError {
    /// The underlying potential evaluation hit the singular origin.
    #[error("potential evaluation failed")]
    Singularity(#[from] SingularityError),

    /// Frequencies are undefined on the symmetry axis, where `Ω² = 0/0`.
    #[error("frequencies are undefined on the symmetry axis (R = 0)")]
    OnAxis,

    /// A squared frequency came out negative (or `NaN`).
    ///
    /// The potential does not support a stable near-circular orbit at this
    /// radius.
    #[error("{kind} frequency is imaginary: squared value {squared}")]
    Imaginary {
        /// Which frequency failed.
        kind: FrequencyKind,

        /// The offending squared frequency.
        squared: f64,
    },
}

/// Names one of the three characteristic frequencies of a near-circular orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyKind {
    /// Radial epicyclic frequency κ.
    Radial,
    /// Vertical frequency ν.
    Vertical,
    /// Circular (azimuthal) frequency Ω.
    Circular,
}

impl fmt::Display for FrequencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Radial => "radial epicyclic",
            Self::Vertical => "vertical",
            Self::Circular => "circular",
        })
    }
}

/// Errors raised when validating [`LogPotentialParameters`](super::LogPotentialParameters).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParametersError {
    #[error("invalid scale velocity v0: {v0}")]
    ScaleVelocity { v0: f64, source: ConstraintError },
    #[error("invalid flattening q: {q}")]
    Flattening { q: f64, source: ConstraintError },
    #[error("invalid core radius rc: {rc}")]
    CoreRadius { rc: f64, source: ConstraintError },
    #[error("invalid perturbation radius Re: {re}")]
    PerturbationRadius { re: f64, source: ConstraintError },
    #[error("invalid offset: {offset}")]
    Offset { offset: f64, source: ConstraintError },
}
