use std::fmt;

use thiserror::Error;

/// Error returned when a phase index does not name a [`WaterPhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("phase index {index} is outside the valid range [1, 6]")]
pub struct PhaseIndexError {
    /// The rejected index.
    pub index: i64,
}

/// Water and ice phases with tabulated heat capacity fits.
///
/// Phases are identified by a 1-based index that matches the row order of a
/// [`CoefficientTable`](crate::support::thermo::model::CoefficientTable).
/// Deciding which phase is stable at a given pressure and temperature is the
/// caller's responsibility.
///
/// # Example
///
/// ```
/// use hydrosphere_models::support::thermo::WaterPhase;
///
/// let phase = WaterPhase::from_index(4).unwrap();
/// assert_eq!(phase, WaterPhase::IceV);
/// assert_eq!(phase.index(), 4);
///
/// assert!(WaterPhase::from_index(0).is_err());
/// assert!(WaterPhase::from_index(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WaterPhase {
    #[default]
    IceIh,
    IceII,
    IceIII,
    IceV,
    /// Fifth table slot, between Ice V and Ice VI.
    ///
    /// The source data carries coefficients for this slot without naming a
    /// phase, so no label is assigned here.
    Unlabeled,
    IceVI,
}

impl WaterPhase {
    /// All phases in table order.
    pub const ALL: [WaterPhase; 6] = [
        WaterPhase::IceIh,
        WaterPhase::IceII,
        WaterPhase::IceIII,
        WaterPhase::IceV,
        WaterPhase::Unlabeled,
        WaterPhase::IceVI,
    ];

    /// Returns the phase for a 1-based table index.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseIndexError`] if `index` is not in `1..=6`.
    pub fn from_index(index: i64) -> Result<Self, PhaseIndexError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(PhaseIndexError { index })
    }

    /// Returns the 1-based table index of this phase.
    #[must_use]
    pub fn index(self) -> usize {
        self.slot() + 1
    }

    /// Zero-based row in a coefficient table.
    pub(crate) fn slot(self) -> usize {
        match self {
            WaterPhase::IceIh => 0,
            WaterPhase::IceII => 1,
            WaterPhase::IceIII => 2,
            WaterPhase::IceV => 3,
            WaterPhase::Unlabeled => 4,
            WaterPhase::IceVI => 5,
        }
    }
}

impl TryFrom<i64> for WaterPhase {
    type Error = PhaseIndexError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for WaterPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WaterPhase::IceIh => "Ice Ih",
            WaterPhase::IceII => "Ice II",
            WaterPhase::IceIII => "Ice III",
            WaterPhase::IceV => "Ice V",
            WaterPhase::Unlabeled => "unlabeled (slot 5)",
            WaterPhase::IceVI => "Ice VI",
        };
        f.write_str(label)
    }
}
