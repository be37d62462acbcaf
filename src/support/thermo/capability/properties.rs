use uom::si::f64::SpecificHeatCapacity;

use crate::support::thermo::{PropertyError, State};

use super::ThermoModel;

pub trait HasCp: ThermoModel {
    /// Returns the specific heat capacity at constant pressure for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cp` cannot be calculated.
    fn cp(&self, state: &State<Self::Substance>) -> Result<SpecificHeatCapacity, PropertyError>;
}
