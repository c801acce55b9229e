//! Flattened logarithmic potential.
//!
//! The computational core lives in the internal `core` module and is
//! re-exported here. [`LogPotentialModel`] exposes each evaluation mode as a
//! [`twine_core::Model`], selected by a mode marker type.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_galactic::models::galactic::log_potential::{
//!     Epicyclic, LogPotential, LogPotentialModel, LogPotentialParameters, Point, WithGradient,
//! };
//!
//! let potential = LogPotential::new(LogPotentialParameters::new(1.0, 0.9, 0.1, 0.0))?;
//!
//! let forces = LogPotentialModel::<WithGradient>::new(potential);
//! let gradient = forces.call(&Point::new(1.0, 0.5))?;
//! assert!(gradient.dp_dr > 0.0 && gradient.dp_dz > 0.0);
//!
//! let epicycles = LogPotentialModel::<Epicyclic>::new(potential);
//! let frequencies = epicycles.call(&2.0)?;
//! assert!(frequencies.kappa > frequencies.omega);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    CircularOrbit, FrequencyError, FrequencyKind, Frequencies, Gradient, Hessian, LogPotential,
    LogPotentialParameters, ParametersError, RadialCurvature, SingularityError,
};

use std::marker::PhantomData;

use twine_core::Model;

/// A point in the meridional `(R, z)` plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Cylindrical radius `R`.
    pub r: f64,

    /// Height above the plane `z`.
    pub z: f64,
}

impl Point {
    #[must_use]
    pub fn new(r: f64, z: f64) -> Self {
        Self { r, z }
    }
}

/// Mode marker: potential only. Input [`Point`], output `Φ`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PotentialOnly;

/// Mode marker: potential and first derivatives. Input [`Point`], output [`Gradient`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WithGradient;

/// Mode marker: potential, first derivatives and Hessian. Input [`Point`], output [`Hessian`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WithHessian;

/// Mode marker: equatorial radial curvature. Input `R`, output [`RadialCurvature`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InPlane;

/// Mode marker: epicyclic frequencies. Input `R`, output [`Frequencies`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Epicyclic;

/// [`twine_core::Model`] adapter over a [`LogPotential`].
///
/// The `Mode` marker selects which evaluation the model performs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogPotentialModel<Mode> {
    potential: LogPotential,
    _mode: PhantomData<Mode>,
}

impl<Mode> LogPotentialModel<Mode> {
    #[must_use]
    pub fn new(potential: LogPotential) -> Self {
        Self {
            potential,
            _mode: PhantomData,
        }
    }

    /// The wrapped potential.
    #[must_use]
    pub fn potential(&self) -> &LogPotential {
        &self.potential
    }
}

impl Model for LogPotentialModel<PotentialOnly> {
    type Input = Point;
    type Output = f64;
    type Error = SingularityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.potential.potential(input.r, input.z)
    }
}

impl Model for LogPotentialModel<WithGradient> {
    type Input = Point;
    type Output = Gradient;
    type Error = SingularityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.potential.gradient(input.r, input.z)
    }
}

impl Model for LogPotentialModel<WithHessian> {
    type Input = Point;
    type Output = Hessian;
    type Error = SingularityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.potential.hessian(input.r, input.z)
    }
}

impl Model for LogPotentialModel<InPlane> {
    type Input = f64;
    type Output = RadialCurvature;
    type Error = SingularityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.potential.equatorial(*input)
    }
}

impl Model for LogPotentialModel<Epicyclic> {
    type Input = f64;
    type Output = Frequencies;
    type Error = FrequencyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.potential.frequencies(*input)
    }
}
