//! Results of the derivative-carrying evaluation modes.

/// Potential and its first derivatives at `(R, z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// Potential `Φ`.
    pub potential: f64,

    /// `∂Φ/∂R`.
    pub dp_dr: f64,

    /// `∂Φ/∂z`.
    pub dp_dz: f64,
}

/// Potential and its first and second radial derivatives in the plane `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialCurvature {
    /// Potential `Φ`.
    pub potential: f64,

    /// `∂Φ/∂R`.
    pub dp_dr: f64,

    /// `∂²Φ/∂R²`.
    pub d2p_dr2: f64,
}

/// Potential with its first derivatives and full `(R, z)` Hessian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hessian {
    /// Potential `Φ`.
    pub potential: f64,

    /// `∂Φ/∂R`.
    pub dp_dr: f64,

    /// `∂Φ/∂z`.
    pub dp_dz: f64,

    /// `∂²Φ/∂R²`.
    pub d2p_dr2: f64,

    /// `∂²Φ/∂z²`.
    pub d2p_dz2: f64,

    /// `∂²Φ/∂R∂z`.
    pub d2p_drdz: f64,
}

impl From<Hessian> for Gradient {
    fn from(hessian: Hessian) -> Self {
        Self {
            potential: hessian.potential,
            dp_dr: hessian.dp_dr,
            dp_dz: hessian.dp_dz,
        }
    }
}
