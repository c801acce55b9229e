//! Shared algebra of the logarithm argument `m(R, z)`.
//!
//! Writing `k = Re⁻³` and `r = √(R² + z²)`:
//!
//! ```text
//! m    = R² + z²·q⁻² + rc² − k·r·(R² − z²)
//! g_R  = (∂m/∂R)/R = 2     − k·(3R² +  z²)/r
//! g_z  = (∂m/∂z)/z = 2·q⁻² + k·( R² + 3z²)/r
//! ```
//!
//! With `Φ = ½·v0²·ln(m)` and `h = ½·v0²/m` every derivative follows:
//!
//! ```text
//! ∂Φ/∂R    = h·R·g_R
//! ∂Φ/∂z    = h·z·g_z
//! ∂²Φ/∂R²  = h·(g_R + R·∂g_R/∂R − g_R²·R²/m)
//! ∂²Φ/∂z²  = h·(g_z + z·∂g_z/∂z − g_z²·z²/m)
//! ∂²Φ/∂R∂z = h·R·z·((∂g_R/∂z)/z − g_R·g_z/m)
//! ```
//!
//! The perturbation terms are `O(r)` at the origin and vanish there, so the
//! plain values are used at `r = 0` instead of evaluating `0/0`.

use super::{Branch, LogPotential};

/// The logarithm argument and its logarithmic-derivative helpers at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Shape {
    /// Logarithm argument `m`.
    pub(super) m: f64,

    /// `(∂m/∂R)/R`.
    pub(super) g_r: f64,

    /// `(∂m/∂z)/z`.
    pub(super) g_z: f64,
}

/// Curvature corrections of the helpers, nonzero only for the perturbed branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bend {
    /// `R·∂g_R/∂R`.
    pub(super) rr: f64,

    /// `z·∂g_z/∂z`.
    pub(super) zz: f64,

    /// `(∂g_R/∂z)/z`, which equals `(∂g_z/∂R)/R`.
    pub(super) rz: f64,
}

impl Bend {
    const FLAT: Self = Self {
        rr: 0.0,
        zz: 0.0,
        rz: 0.0,
    };

    pub(super) fn new(potential: &LogPotential, r: f64, z: f64) -> Self {
        let Branch::Perturbed { re_inv3: k } = potential.branch else {
            return Self::FLAT;
        };

        let r2 = r * r;
        let z2 = z * z;
        let s2 = r2 + z2;
        let s = s2.sqrt();
        if s == 0.0 {
            return Self::FLAT;
        }

        // Ratios first: `s³` underflows to zero for tiny radii.
        let a = r2 / s2;
        let b = z2 / s2;

        Self {
            rr: -k * a * (3.0 * r2 + 5.0 * z2) / s,
            zz: k * b * (3.0 * z2 + 5.0 * r2) / s,
            rz: k * (a - b) / s,
        }
    }
}

/// Returns only the logarithm argument `m`.
pub(super) fn argument(potential: &LogPotential, r: f64, z: f64) -> f64 {
    let r2 = r * r;
    let z2 = z * z;
    let m = r2 + z2 * potential.q2i + potential.rc2;

    match potential.branch {
        Branch::Plain => m,
        Branch::Perturbed { re_inv3: k } => m - k * (r2 + z2).sqrt() * (r2 - z2),
    }
}

impl Shape {
    pub(super) fn new(potential: &LogPotential, r: f64, z: f64) -> Self {
        let r2 = r * r;
        let z2 = z * z;
        let m = r2 + z2 * potential.q2i + potential.rc2;
        let plain = Self {
            m,
            g_r: 2.0,
            g_z: 2.0 * potential.q2i,
        };

        let Branch::Perturbed { re_inv3: k } = potential.branch else {
            return plain;
        };

        let s = (r2 + z2).sqrt();
        if s == 0.0 {
            return plain;
        }

        Self {
            m: m - k * s * (r2 - z2),
            g_r: plain.g_r - k * (3.0 * r2 + z2) / s,
            g_z: plain.g_z + k * (3.0 * z2 + r2) / s,
        }
    }
}
