//! Public hydrosphere models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The `core` module is an implementation
//! detail and is **not** re-exported as part of the public API.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the model-specific core. A single `core` may be exposed through multiple
//! adapters (e.g., scalar and array inputs).

pub mod hydrosphere;
