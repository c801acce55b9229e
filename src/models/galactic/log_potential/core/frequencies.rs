//! Orbital frequencies and circular orbits in the equatorial plane.
//!
//! For a near-circular orbit of radius `R` in the plane `z = 0`:
//!
//! ```text
//! Ω² = (∂Φ/∂R)/R
//! ν² = ∂²Φ/∂z²
//! κ² = ∂²Φ/∂R² + 3·Ω²
//! ```

use super::{FrequencyError, FrequencyKind, LogPotential};

/// Characteristic frequencies of a near-circular equatorial orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequencies {
    /// Radial epicyclic frequency κ.
    pub kappa: f64,

    /// Vertical frequency ν.
    pub nu: f64,

    /// Circular (azimuthal) frequency Ω.
    pub omega: f64,
}

impl Frequencies {
    /// Returns the frequencies ordered as `[κ, ν, Ω]`.
    #[must_use]
    pub fn to_array(self) -> [f64; 3] {
        [self.kappa, self.nu, self.omega]
    }
}

impl From<Frequencies> for [f64; 3] {
    fn from(frequencies: Frequencies) -> Self {
        frequencies.to_array()
    }
}

/// Speed and angular momentum of the circular orbit at a given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    /// Orbit radius `R`.
    pub radius: f64,

    /// Circular speed `v_c = √(R·∂Φ/∂R)`.
    pub speed: f64,

    /// Specific angular momentum `L_c = R·v_c = √(R³·∂Φ/∂R)`.
    pub angular_momentum: f64,
}

impl LogPotential {
    /// Computes the epicyclic frequencies `(κ, ν, Ω)` at radius `R` in the plane `z = 0`.
    ///
    /// # Errors
    ///
    /// - [`FrequencyError::Singularity`] at `R = 0` when `rc = 0`.
    /// - [`FrequencyError::OnAxis`] at `R = 0` otherwise.
    /// - [`FrequencyError::Imaginary`] if any squared frequency is negative,
    ///   checked in the order Ω, ν, κ.
    pub fn frequencies(&self, r: f64) -> Result<Frequencies, FrequencyError> {
        let hessian = self.hessian(r, 0.0)?;
        if r == 0.0 {
            return Err(FrequencyError::OnAxis);
        }

        let omega2 = hessian.dp_dr / r;
        let omega = real_root(FrequencyKind::Circular, omega2)?;
        let nu = real_root(FrequencyKind::Vertical, hessian.d2p_dz2)?;
        let kappa = real_root(FrequencyKind::Radial, hessian.d2p_dr2 + 3.0 * omega2)?;

        Ok(Frequencies { kappa, nu, omega })
    }

    /// Computes the circular orbit at radius `R` in the plane `z = 0`.
    ///
    /// # Errors
    ///
    /// - [`FrequencyError::Singularity`] at `R = 0` when `rc = 0`.
    /// - [`FrequencyError::Imaginary`] (circular) where the radial force
    ///   points outward and no circular orbit exists.
    pub fn circular_orbit(&self, r: f64) -> Result<CircularOrbit, FrequencyError> {
        let gradient = self.gradient(r, 0.0)?;
        let speed = real_root(FrequencyKind::Circular, r * gradient.dp_dr)?;

        Ok(CircularOrbit {
            radius: r,
            speed,
            angular_momentum: r.abs() * speed,
        })
    }
}

/// Square root that refuses negative and `NaN` arguments.
fn real_root(kind: FrequencyKind, squared: f64) -> Result<f64, FrequencyError> {
    if squared >= 0.0 {
        Ok(squared.sqrt())
    } else {
        Err(FrequencyError::Imaginary { kind, squared })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::super::{
        SingularityError,
        test_support::{assert_close, models, perturbed, plain},
    };

    #[test]
    fn singular_isothermal_sphere() {
        let potential = LogPotential::unchecked(1.0, 1.0, 0.0, 0.0);

        for r in [0.5, 1.0, 4.0] {
            let Frequencies { kappa, nu, omega } = potential.frequencies(r).unwrap();
            assert_relative_eq!(omega, 1.0 / r, max_relative = 1e-12);
            assert_relative_eq!(nu, 1.0 / r, max_relative = 1e-12);
            assert_relative_eq!(kappa, 2.0_f64.sqrt() / r, max_relative = 1e-12);
        }
    }

    #[test]
    fn flattening_raises_vertical_frequency() {
        let q = 0.7;
        let potential = LogPotential::unchecked(2.0, q, 0.0, 0.0);

        let frequencies = potential.frequencies(3.0).unwrap();
        assert_relative_eq!(frequencies.omega, 2.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(frequencies.nu, frequencies.omega / q, max_relative = 1e-12);
    }

    #[test]
    fn cored_plain_closed_form() {
        let (v0, rc, r) = (1.5, 0.4, 0.9);
        let potential = LogPotential::unchecked(v0, 1.0, rc, 0.0);

        let m = r * r + rc * rc;
        let omega2 = v0 * v0 / m;
        let kappa2 = v0 * v0 / m * (1.0 - 2.0 * r * r / m) + 3.0 * omega2;

        let frequencies = potential.frequencies(r).unwrap();
        assert_relative_eq!(frequencies.omega, omega2.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(frequencies.nu, omega2.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(frequencies.kappa, kappa2.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn finite_and_non_negative_for_cored_models() {
        for potential in models().into_iter().filter(|p| p.rc() > 0.0) {
            for r in [0.05, 0.3, 1.0, 2.5] {
                let frequencies = potential.frequencies(r).unwrap();
                for value in frequencies.to_array() {
                    assert!(value.is_finite() && value >= 0.0, "{value} at R = {r}");
                }
            }
        }
    }

    #[test]
    fn derived_from_hessian() {
        let potential = perturbed();
        let r = 1.4;

        let hessian = potential.hessian(r, 0.0).unwrap();
        let [kappa, nu, omega]: [f64; 3] = potential.frequencies(r).unwrap().into();

        assert_close(omega * omega, hessian.dp_dr / r);
        assert_close(nu * nu, hessian.d2p_dz2);
        assert_close(kappa * kappa, hessian.d2p_dr2 + 3.0 * hessian.dp_dr / r);
    }

    #[test]
    fn tiny_radius_near_cored_center() {
        let r = 1e-160;
        let expected = plain().frequencies(r).unwrap();
        let frequencies = perturbed().frequencies(r).unwrap();

        assert_relative_eq!(frequencies.kappa, expected.kappa, max_relative = 1e-9);
        assert_relative_eq!(frequencies.nu, expected.nu, max_relative = 1e-9);
        assert_relative_eq!(frequencies.omega, expected.omega, max_relative = 1e-9);
    }

    #[test]
    fn axis_and_singularity() {
        let cored = LogPotential::unchecked(1.0, 1.0, 0.5, 0.0);
        assert_eq!(cored.frequencies(0.0), Err(FrequencyError::OnAxis));

        let singular = LogPotential::unchecked(1.0, 1.0, 0.0, 0.0);
        assert_eq!(
            singular.frequencies(0.0),
            Err(FrequencyError::Singularity(SingularityError { r: 0.0, z: 0.0 }))
        );
    }

    #[test]
    fn outward_force_is_imaginary() {
        // Strong perturbation: ∂m/∂R < 0 at R = 0.9, so ∂Φ/∂R < 0.
        let potential = LogPotential::unchecked(1.0, 1.0, 0.5, 1.0);

        assert!(matches!(
            potential.frequencies(0.9),
            Err(FrequencyError::Imaginary {
                kind: FrequencyKind::Circular,
                squared,
            }) if squared < 0.0
        ));
        assert!(matches!(
            potential.circular_orbit(0.9),
            Err(FrequencyError::Imaginary {
                kind: FrequencyKind::Circular,
                ..
            })
        ));
    }

    #[test]
    fn flat_rotation_curve() {
        let potential = LogPotential::unchecked(220.0, 0.9, 0.0, 0.0);

        for r in [1.0, 8.0, 20.0] {
            let orbit = potential.circular_orbit(r).unwrap();
            assert_relative_eq!(orbit.radius, r);
            assert_relative_eq!(orbit.speed, 220.0, max_relative = 1e-12);
            assert_relative_eq!(orbit.angular_momentum, 220.0 * r, max_relative = 1e-12);
        }
    }

    #[test]
    fn circular_orbit_matches_frequency() {
        let potential = perturbed();
        let r = 1.1;

        let orbit = potential.circular_orbit(r).unwrap();
        let frequencies = potential.frequencies(r).unwrap();

        assert_close(orbit.speed, frequencies.omega * r);
        assert_close(orbit.angular_momentum, frequencies.omega * r * r);
    }

    #[test]
    fn circular_orbit_at_cored_center() {
        let potential = LogPotential::unchecked(1.0, 1.0, 0.5, 0.0);
        let orbit = potential.circular_orbit(0.0).unwrap();
        assert_eq!((orbit.speed, orbit.angular_momentum), (0.0, 0.0));
    }
}
