use approx::assert_relative_eq;

use super::LogPotential;

/// Step used for central differences.
const STEP: f64 = 1e-5;

/// Sample points `(R, z)` away from the origin, including the plane `z = 0`.
pub(super) const POINTS: [(f64, f64); 6] = [
    (1.0, 0.0),
    (0.5, 0.25),
    (1.3, 0.4),
    (0.9, -0.6),
    (2.0, 1.5),
    (0.7, 1.1),
];

/// Flattened, cored, no perturbation.
pub(super) fn plain() -> LogPotential {
    LogPotential::unchecked(1.0, 0.8, 0.2, 0.0)
}

/// Same as [`plain`] with a perturbation at `Re = 5`.
pub(super) fn perturbed() -> LogPotential {
    LogPotential::unchecked(1.0, 0.8, 0.2, 5.0)
}

/// Every model family the derivative tests sweep over.
pub(super) fn models() -> [LogPotential; 4] {
    [
        plain(),
        perturbed(),
        LogPotential::unchecked(1.3, 1.0, 0.0, 0.0),
        LogPotential::unchecked(1.3, 0.6, 0.0, -4.0),
    ]
}

/// Central difference of `f` at `x`.
pub(super) fn central_difference(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    (f(x + STEP) - f(x - STEP)) / (2.0 * STEP)
}

/// Asserts agreement to the tolerance used for analytic-versus-numeric checks.
#[track_caller]
pub(super) fn assert_close(actual: f64, expected: f64) {
    assert_relative_eq!(actual, expected, epsilon = 1e-8, max_relative = 1e-6);
}
