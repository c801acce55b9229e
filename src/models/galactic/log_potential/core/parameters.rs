/// Parameters for constructing a [`LogPotential`](super::LogPotential).
///
/// The default is the singular isothermal sphere: `v0 = 1`, `q = 1`,
/// `rc = 0`, no perturbation and no offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogPotentialParameters {
    /// Scale velocity, the asymptotic circular speed.
    pub v0: f64,

    /// Flattening of the equipotentials, `z`-axis over `R`-axis scale.
    pub q: f64,

    /// Core radius.
    pub rc: f64,

    /// Perturbation radius, or zero to disable the perturbation term.
    pub re: f64,

    /// Additive normalization constant.
    pub offset: f64,
}

impl LogPotentialParameters {
    #[must_use]
    pub fn new(v0: f64, q: f64, rc: f64, re: f64) -> Self {
        Self {
            v0,
            q,
            rc,
            re,
            offset: 0.0,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

impl Default for LogPotentialParameters {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0, 0.0)
    }
}
