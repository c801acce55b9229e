//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently only
//! `galactic`). This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The `core` module is an implementation
//! detail; its public types are re-exported by the model module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the model-specific core API. A single `core` is exposed through several
//! adapters, one per evaluation mode.

pub mod galactic;
