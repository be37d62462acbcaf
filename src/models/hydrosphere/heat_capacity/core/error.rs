use thiserror::Error;

use crate::support::thermo::PhaseIndexError;

/// Errors that can occur while evaluating heat capacity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeatCapacityError {
    /// A phase index has no row in the coefficient table.
    #[error("no heat capacity fit: {0}")]
    IndexOutOfRange(#[from] PhaseIndexError),

    /// Temperature and phase index arrays cannot be broadcast together.
    #[error("cannot broadcast temperature shape {temperature:?} with phase index shape {phase_index:?}")]
    ShapeMismatch {
        temperature: Vec<usize>,
        phase_index: Vec<usize>,
    },
}
