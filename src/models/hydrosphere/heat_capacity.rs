//! Specific isobaric heat capacity of water ice phases.
//!
//! This module provides [`twine_core::Model`] implementations that evaluate
//! a linear heat capacity fit selected by a 1-based phase index:
//!
//! - [`HeatCapacity`]: one pressure, temperature, and phase index.
//! - [`HeatCapacityArray`]: element-wise over [`ndarray`] inputs, with
//!   NumPy-style broadcasting between temperature and phase index.
//!
//! Both default to the [`CHOUKROUN_GRASSET_2010`] coefficients and accept a
//! custom [`CoefficientTable`].
//!
//! # Pressure
//!
//! Every input carries a pressure so these models line up with other
//! pressure-temperature property models. The linear fits do not depend on
//! pressure and it never changes the result.
//!
//! # Phase selection
//!
//! Deciding which phase is present at a given pressure and temperature is
//! left to the caller. An index outside `1..=6` is reported as
//! [`HeatCapacityError::IndexOutOfRange`].

mod core;

pub use self::core::HeatCapacityError;

use ndarray::{Array2, ArrayD, ArrayView1};
use twine_core::Model;
use uom::si::f64::{Pressure, SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::thermo::model::{CHOUKROUN_GRASSET_2010, CoefficientTable};

/// Input to [`HeatCapacity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCapacityInput {
    /// Accepted for interface symmetry; does not affect the result.
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    /// 1-based phase index, see [`WaterPhase`](crate::support::thermo::WaterPhase).
    pub phase_index: i64,
}

/// Heat capacity of a single water/ice state.
///
/// # Example
///
/// ```
/// use hydrosphere_models::models::hydrosphere::heat_capacity::{
///     HeatCapacity, HeatCapacityInput,
/// };
/// use twine_core::Model;
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::megapascal,
///     specific_heat_capacity::joule_per_kilogram_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let model = HeatCapacity::default();
/// let cp = model
///     .call(&HeatCapacityInput {
///         pressure: Pressure::new::<megapascal>(0.1),
///         temperature: ThermodynamicTemperature::new::<kelvin>(260.0),
///         phase_index: 3,
///     })
///     .unwrap();
///
/// assert_eq!(cp.get::<joule_per_kilogram_kelvin>(), 2200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCapacity {
    table: CoefficientTable,
}

impl HeatCapacity {
    #[must_use]
    pub fn new(table: CoefficientTable) -> Self {
        Self { table }
    }
}

impl Default for HeatCapacity {
    fn default() -> Self {
        Self::new(CHOUKROUN_GRASSET_2010)
    }
}

impl Model for HeatCapacity {
    type Input = HeatCapacityInput;
    type Output = SpecificHeatCapacity;
    type Error = HeatCapacityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::evaluate(
            &self.table,
            input.pressure,
            input.temperature,
            input.phase_index,
        )
    }
}

/// Input to [`HeatCapacityArray`].
///
/// Use zero-dimensional arrays for scalar values that should broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatCapacityArrayInput {
    /// Accepted for interface symmetry; neither its values nor its shape are used.
    pub pressure: ArrayD<Pressure>,
    pub temperature: ArrayD<ThermodynamicTemperature>,
    pub phase_index: ArrayD<i64>,
}

/// Element-wise heat capacity over arrays of states.
///
/// The output takes the broadcast shape of `temperature` and `phase_index`.
///
/// # Example
///
/// ```
/// use hydrosphere_models::models::hydrosphere::heat_capacity::{
///     HeatCapacityArray, HeatCapacityArrayInput,
/// };
/// use ndarray::{arr0, arr1};
/// use twine_core::Model;
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::megapascal,
///     specific_heat_capacity::joule_per_kilogram_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let t = |k| ThermodynamicTemperature::new::<kelvin>(k);
/// let input = HeatCapacityArrayInput {
///     pressure: arr0(Pressure::new::<megapascal>(400.0)).into_dyn(),
///     temperature: arr1(&[t(250.0), t(260.0), t(270.0)]).into_dyn(),
///     phase_index: arr0(4).into_dyn(),
/// };
///
/// let cp = HeatCapacityArray::default().call(&input).unwrap();
/// let cp: Vec<f64> = cp.iter().map(|cp| cp.get::<joule_per_kilogram_kelvin>()).collect();
/// assert_eq!(cp, [2570.0, 2640.0, 2710.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCapacityArray {
    table: CoefficientTable,
}

impl HeatCapacityArray {
    #[must_use]
    pub fn new(table: CoefficientTable) -> Self {
        Self { table }
    }

    /// Evaluates one phase over a pressure-temperature grid.
    ///
    /// The result has shape `(pressures.len(), temperatures.len())` and every
    /// row holds the same values.
    ///
    /// # Errors
    ///
    /// Returns [`HeatCapacityError::IndexOutOfRange`] if `phase_index` is not in `1..=6`.
    pub fn grid(
        &self,
        pressures: ArrayView1<'_, Pressure>,
        temperatures: ArrayView1<'_, ThermodynamicTemperature>,
        phase_index: i64,
    ) -> Result<Array2<SpecificHeatCapacity>, HeatCapacityError> {
        core::evaluate_grid(&self.table, pressures, temperatures, phase_index)
    }
}

impl Default for HeatCapacityArray {
    fn default() -> Self {
        Self::new(CHOUKROUN_GRASSET_2010)
    }
}

impl Model for HeatCapacityArray {
    type Input = HeatCapacityArrayInput;
    type Output = ArrayD<SpecificHeatCapacity>;
    type Error = HeatCapacityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::evaluate_array(
            &self.table,
            input.pressure.view(),
            input.temperature.view(),
            input.phase_index.view(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{arr0, arr1};
    use uom::si::{
        pressure::megapascal, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::{
        PhaseIndexError, State, WaterPhase,
        capability::HasCp,
        model::{LinearFit, LinearHeatCapacity},
    };

    fn input(t_k: f64, phase_index: i64) -> HeatCapacityInput {
        HeatCapacityInput {
            pressure: Pressure::new::<megapascal>(0.1),
            temperature: ThermodynamicTemperature::new::<kelvin>(t_k),
            phase_index,
        }
    }

    #[test]
    fn scalar_model() -> Result<(), HeatCapacityError> {
        let model = HeatCapacity::default();

        let cp = model.call(&input(273.15, 1))?;
        assert_relative_eq!(
            cp.get::<joule_per_kilogram_kelvin>(),
            6648.35,
            epsilon = 1e-9
        );

        let err = model.call(&input(273.15, 7)).unwrap_err();
        assert_eq!(
            err,
            HeatCapacityError::IndexOutOfRange(PhaseIndexError { index: 7 })
        );
        assert_eq!(
            err.to_string(),
            "no heat capacity fit: phase index 7 is outside the valid range [1, 6]",
        );

        Ok(())
    }

    #[test]
    fn scalar_model_matches_thermo_capability() -> Result<(), Box<dyn std::error::Error>> {
        let model = HeatCapacity::default();
        let thermo = LinearHeatCapacity::default();

        for phase in WaterPhase::ALL {
            let input = input(245.0, i64::try_from(phase.index())?);
            let state = State::new(input.temperature, input.pressure, phase);
            assert_eq!(model.call(&input)?, thermo.cp(&state)?);
        }

        Ok(())
    }

    #[test]
    fn custom_table() -> Result<(), HeatCapacityError> {
        let table = CoefficientTable::new([LinearFit::new(100.0, 2.0); 6]).unwrap();
        let model = HeatCapacity::new(table);

        let cp = model.call(&input(50.0, 5))?;
        assert_relative_eq!(cp.get::<joule_per_kilogram_kelvin>(), 200.0);

        Ok(())
    }

    #[test]
    fn array_model() -> Result<(), HeatCapacityError> {
        let t = |k| ThermodynamicTemperature::new::<kelvin>(k);
        let model = HeatCapacityArray::default();

        let input = HeatCapacityArrayInput {
            pressure: arr1(&[Pressure::new::<megapascal>(0.1); 2]).into_dyn(),
            temperature: arr0(t(250.0)).into_dyn(),
            phase_index: arr1(&[2_i64, 4]).into_dyn(),
        };
        let cp = model.call(&input)?;
        assert_eq!(cp.shape(), &[2]);
        let cp: Vec<f64> = cp
            .iter()
            .map(|cp| cp.get::<joule_per_kilogram_kelvin>())
            .collect();
        assert_relative_eq!(cp[0], 1964.11, epsilon = 1e-9);
        assert_relative_eq!(cp[1], 2570.0, epsilon = 1e-9);

        let mismatched = HeatCapacityArrayInput {
            temperature: arr1(&[t(250.0), t(260.0), t(270.0)]).into_dyn(),
            ..input
        };
        assert!(matches!(
            model.call(&mismatched),
            Err(HeatCapacityError::ShapeMismatch { .. })
        ));

        Ok(())
    }

    #[test]
    fn array_grid() -> Result<(), HeatCapacityError> {
        let pressures = arr1(&[100.0, 200.0, 300.0, 400.0]).mapv(|p| Pressure::new::<megapascal>(p));
        let temperatures =
            arr1(&[250.0, 300.0]).mapv(|t| ThermodynamicTemperature::new::<kelvin>(t));

        let cp = HeatCapacityArray::default().grid(pressures.view(), temperatures.view(), 6)?;
        assert_eq!(cp.dim(), (4, 2));
        for i in 0..4 {
            assert_relative_eq!(cp[[i, 0]].get::<joule_per_kilogram_kelvin>(), 2315.0);
            assert_relative_eq!(cp[[i, 1]].get::<joule_per_kilogram_kelvin>(), 2590.0);
        }

        Ok(())
    }
}
