use std::fmt;

use super::{Branch, LogPotential};

/// Renders the potential formula with the stored parameters.
///
/// ```
/// use twine_galactic::models::galactic::log_potential::LogPotential;
///
/// let potential = LogPotential::unchecked(1.0, 1.0, 0.0, 0.0);
/// assert_eq!(
///     potential.to_string(),
///     "logarithmic potential Phi = 1/2 ln[R^2 + z^2]",
/// );
/// ```
impl fmt::Display for LogPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("logarithmic potential Phi = ")?;

        if self.v0 == 1.0 {
            f.write_str("1")?;
        } else {
            write!(f, "{}^2", self.v0)?;
        }

        f.write_str("/2 ln[R^2 + ")?;
        if self.q == 1.0 {
            f.write_str("z^2")?;
        } else {
            write!(f, "(z/{})^2", self.q)?;
        }

        if let Branch::Perturbed { re_inv3 } = self.branch {
            let sign = if re_inv3 < 0.0 { '+' } else { '-' };
            write!(f, " {sign} {} sqrt[R^2+z^2](R^2-z^2)", re_inv3.abs())?;
        }

        if self.rc != 0.0 {
            write!(f, " + {}^2", self.rc)?;
        }

        f.write_str("]")
    }
}
