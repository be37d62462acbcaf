//! Phase-wise linear heat capacity model for water ice.
//!
//! `LinearHeatCapacity` evaluates the specific isobaric heat capacity of a
//! water/ice phase as a first-order polynomial in temperature:
//!
//! ```text
//! cp(T) = c1·T + c0
//! ```
//!
//! with one `(c0, c1)` pair per [`WaterPhase`].
//!
//! # Assumptions
//!
//! - `cp` depends on temperature and phase only; pressure is ignored
//! - Fits are applied as-is, without range checks on temperature
//!
//! # Reference Data
//!
//! The default coefficients, [`CHOUKROUN_GRASSET_2010`], are the linear fits
//! of Choukroun & Grasset (2010), "Thermodynamic data and modeling of the
//! water and ammonia-water phase diagrams up to 2.2 GPa for planetary
//! geophysics", J. Chem. Phys. 133, 144502.

use std::convert::Infallible;

use thiserror::Error;
use uom::si::{
    f64::{Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{
    PropertyError, State, WaterPhase,
    capability::{HasCp, StateFrom, ThermoModel},
};

/// Linear fits from Choukroun & Grasset (2010), in [`WaterPhase`] order.
pub const CHOUKROUN_GRASSET_2010: CoefficientTable = CoefficientTable([
    LinearFit::new(4190.0, 9.0),
    LinearFit::new(74.11, 7.56),
    LinearFit::new(2200.0, 0.0),
    LinearFit::new(820.0, 7.0),
    LinearFit::new(700.0, 7.56),
    LinearFit::new(940.0, 5.5),
]);

/// A first-order heat capacity fit, `cp = slope·T + intercept`.
///
/// Coefficients are stored in SI units so tables can be built at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Intercept `c0`, in J/(kg·K).
    pub intercept: f64,
    /// Slope `c1`, in J/(kg·K²).
    pub slope: f64,
}

impl LinearFit {
    #[must_use]
    pub const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Evaluates the fit at the given temperature.
    #[must_use]
    pub fn cp(&self, temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
        let t = temperature.get::<kelvin>();
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(self.slope * t + self.intercept)
    }

    fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.slope.is_finite()
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoefficientTableError {
    #[error("non-finite coefficients for {phase}: {fit:?}")]
    NonFinite { phase: WaterPhase, fit: LinearFit },
}

/// Heat capacity fits for every [`WaterPhase`], one row per phase index.
///
/// The table always holds exactly six rows, ordered by
/// [`WaterPhase::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientTable([LinearFit; 6]);

impl CoefficientTable {
    /// Creates a table from fits given in phase index order.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientTableError`] if any coefficient is `NaN` or infinite.
    pub fn new(fits: [LinearFit; 6]) -> Result<Self, CoefficientTableError> {
        for (phase, fit) in WaterPhase::ALL.into_iter().zip(fits) {
            if !fit.is_finite() {
                return Err(CoefficientTableError::NonFinite { phase, fit });
            }
        }
        Ok(Self(fits))
    }

    /// Returns the fit for a phase.
    #[must_use]
    pub fn fit(&self, phase: WaterPhase) -> LinearFit {
        self.0[phase.slot()]
    }

    /// Iterates over `(phase, fit)` rows in index order.
    pub fn iter(&self) -> impl Iterator<Item = (WaterPhase, LinearFit)> + '_ {
        WaterPhase::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Default for CoefficientTable {
    fn default() -> Self {
        CHOUKROUN_GRASSET_2010
    }
}

/// Heat capacity model that applies a [`CoefficientTable`] by phase.
///
/// # Example
///
/// ```
/// use hydrosphere_models::support::thermo::{
///     WaterPhase,
///     capability::{HasCp, StateFrom},
///     model::LinearHeatCapacity,
/// };
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::megapascal,
///     specific_heat_capacity::joule_per_kilogram_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let thermo = LinearHeatCapacity::default();
/// let state = thermo
///     .state_from((
///         WaterPhase::IceVI,
///         ThermodynamicTemperature::new::<kelvin>(300.0),
///         Pressure::new::<megapascal>(1_000.0),
///     ))
///     .unwrap();
///
/// let cp = thermo.cp(&state).unwrap();
/// assert!((cp.get::<joule_per_kilogram_kelvin>() - 2590.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearHeatCapacity {
    table: CoefficientTable,
}

impl LinearHeatCapacity {
    #[must_use]
    pub fn new(table: CoefficientTable) -> Self {
        Self { table }
    }

    /// Returns the coefficient table used by this model.
    #[must_use]
    pub fn table(&self) -> &CoefficientTable {
        &self.table
    }
}

impl ThermoModel for LinearHeatCapacity {
    type Substance = WaterPhase;
}

impl HasCp for LinearHeatCapacity {
    /// Evaluates the phase's linear fit at the state temperature.
    ///
    /// Pressure has no effect on the result.
    fn cp(&self, state: &State<WaterPhase>) -> Result<SpecificHeatCapacity, PropertyError> {
        if !state.temperature.value.is_finite() {
            return Err(PropertyError::InvalidState {
                context: format!("non-finite temperature: {:?}", state.temperature),
            });
        }
        Ok(self.table.fit(state.substance).cp(state.temperature))
    }
}

impl StateFrom<(WaterPhase, ThermodynamicTemperature, Pressure)> for LinearHeatCapacity {
    type Error = Infallible;

    fn state_from(
        &self,
        (phase, temperature, pressure): (WaterPhase, ThermodynamicTemperature, Pressure),
    ) -> Result<State<WaterPhase>, Self::Error> {
        Ok(State::new(temperature, pressure, phase))
    }
}
