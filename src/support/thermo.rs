//! Thermodynamic property modeling for water and ice phases.

mod error;
mod phase;
mod state;

pub mod capability;
pub mod model;

pub use error::PropertyError;
pub use phase::{PhaseIndexError, WaterPhase};
pub use state::State;
