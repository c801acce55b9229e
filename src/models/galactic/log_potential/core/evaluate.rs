//! The four evaluation modes.

use super::{
    Branch, Gradient, Hessian, LogPotential, RadialCurvature, SingularityError,
    shape::{self, Bend, Shape},
};

impl LogPotential {
    /// Evaluates the potential `Φ(R, z)`.
    ///
    /// When the perturbation is disabled the result includes the additive
    /// [offset](LogPotential::offset); the perturbed form and the other
    /// evaluation modes never add it.
    ///
    /// # Errors
    ///
    /// Returns [`SingularityError`] at `R = z = 0` when `rc = 0`.
    pub fn potential(&self, r: f64, z: f64) -> Result<f64, SingularityError> {
        self.check_domain(r, z)?;

        let value = self.v0sq_half * shape::argument(self, r, z).ln();
        Ok(match self.branch {
            Branch::Plain => value + self.offset,
            Branch::Perturbed { .. } => value,
        })
    }

    /// Evaluates the potential and its first derivatives at `(R, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularityError`] at `R = z = 0` when `rc = 0`.
    pub fn gradient(&self, r: f64, z: f64) -> Result<Gradient, SingularityError> {
        self.check_domain(r, z)?;

        let Shape { m, g_r, g_z } = Shape::new(self, r, z);
        let h = self.v0sq_half / m;

        Ok(Gradient {
            potential: self.v0sq_half * m.ln(),
            dp_dr: h * r * g_r,
            dp_dz: h * z * g_z,
        })
    }

    /// Evaluates the potential and its first and second radial derivatives
    /// in the equatorial plane `z = 0`.
    ///
    /// The radius is expected to satisfy `R ≥ 0`. For negative `R` the
    /// perturbation uses `|R|³`, matching [`hessian`](Self::hessian) at
    /// `(R, 0)`, rather than the odd extension `R³`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularityError`] at `R = 0` when `rc = 0`.
    pub fn equatorial(&self, r: f64) -> Result<RadialCurvature, SingularityError> {
        self.check_domain(r, 0.0)?;

        let Shape { m, g_r, .. } = Shape::new(self, r, 0.0);
        let bend = Bend::new(self, r, 0.0);
        let h = self.v0sq_half / m;

        Ok(RadialCurvature {
            potential: self.v0sq_half * m.ln(),
            dp_dr: h * r * g_r,
            d2p_dr2: h * (g_r + bend.rr - g_r * g_r * r * r / m),
        })
    }

    /// Evaluates the potential, its first derivatives and its Hessian at `(R, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularityError`] at `R = z = 0` when `rc = 0`.
    pub fn hessian(&self, r: f64, z: f64) -> Result<Hessian, SingularityError> {
        self.check_domain(r, z)?;

        let Shape { m, g_r, g_z } = Shape::new(self, r, z);
        let bend = Bend::new(self, r, z);
        let h = self.v0sq_half / m;

        Ok(Hessian {
            potential: self.v0sq_half * m.ln(),
            dp_dr: h * r * g_r,
            dp_dz: h * z * g_z,
            d2p_dr2: h * (g_r + bend.rr - g_r * g_r * r * r / m),
            d2p_dz2: h * (g_z + bend.zz - g_z * g_z * z * z / m),
            d2p_drdz: h * r * z * (bend.rz - g_r * g_z / m),
        })
    }
}
