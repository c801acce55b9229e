//! Galactic dynamics models.
//!
//! This module contains analytic gravitational potentials used as force
//! fields for orbit integration and stellar-dynamics computations.

pub mod log_potential;
