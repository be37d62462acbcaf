//! Phase-indexed heat capacity evaluation.
//!
//! Selects a [`LinearFit`](crate::support::thermo::model::LinearFit) by
//! 1-based phase index and evaluates it at one or more temperatures.
//! Pressure is accepted everywhere for symmetry with other property
//! functions but never affects the result.

mod broadcast;
mod error;

pub use error::HeatCapacityError;

use ndarray::{Array2, ArrayD, ArrayView1, ArrayViewD, IxDyn, Zip};
use tracing::{debug, trace};
use uom::si::f64::{Pressure, SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::thermo::{WaterPhase, model::CoefficientTable};

use broadcast::broadcast_shape;

/// Evaluates heat capacity for a single phase index and temperature.
///
/// # Errors
///
/// Returns [`HeatCapacityError::IndexOutOfRange`] if `phase_index` is not in `1..=6`.
pub fn evaluate(
    table: &CoefficientTable,
    _pressure: Pressure,
    temperature: ThermodynamicTemperature,
    phase_index: i64,
) -> Result<SpecificHeatCapacity, HeatCapacityError> {
    let phase = phase(phase_index)?;
    Ok(table.fit(phase).cp(temperature))
}

/// Evaluates heat capacity element-wise over broadcast arrays.
///
/// `temperature` and `phase_index` are broadcast against each other and the
/// result takes the broadcast shape. `pressure` is not inspected.
///
/// # Errors
///
/// Returns [`HeatCapacityError::ShapeMismatch`] if the shapes are incompatible,
/// or [`HeatCapacityError::IndexOutOfRange`] for the first element of
/// `phase_index` (in logical order) that is not in `1..=6`, even when the
/// broadcast result is empty.
pub fn evaluate_array(
    table: &CoefficientTable,
    _pressure: ArrayViewD<'_, Pressure>,
    temperature: ArrayViewD<'_, ThermodynamicTemperature>,
    phase_index: ArrayViewD<'_, i64>,
) -> Result<ArrayD<SpecificHeatCapacity>, HeatCapacityError> {
    let mismatch = || {
        debug!(
            temperature = ?temperature.shape(),
            phase_index = ?phase_index.shape(),
            "shapes do not broadcast"
        );
        HeatCapacityError::ShapeMismatch {
            temperature: temperature.shape().to_vec(),
            phase_index: phase_index.shape().to_vec(),
        }
    };

    let shape = broadcast_shape(temperature.shape(), phase_index.shape()).ok_or_else(mismatch)?;
    trace!(shape = ?shape, "evaluating heat capacity array");

    // Every index is checked, including those an empty broadcast would drop.
    let phases = phase_index
        .iter()
        .map(|&index| phase(index))
        .collect::<Result<Vec<_>, _>>()?;
    let phases = ArrayD::from_shape_vec(phase_index.raw_dim(), phases).map_err(|_| mismatch())?;

    let temperatures = temperature.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let phases = phases.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;

    Ok(Zip::from(&temperatures)
        .and(&phases)
        .map_collect(|&t, &phase| table.fit(phase).cp(t)))
}

/// Evaluates heat capacity on a pressure-temperature grid.
///
/// The result has shape `(pressures.len(), temperatures.len())`. Entry
/// `[i, j]` is the heat capacity at `temperatures[j]`, so every row is the
/// same.
///
/// # Errors
///
/// Returns [`HeatCapacityError::IndexOutOfRange`] if `phase_index` is not in `1..=6`.
pub fn evaluate_grid(
    table: &CoefficientTable,
    pressures: ArrayView1<'_, Pressure>,
    temperatures: ArrayView1<'_, ThermodynamicTemperature>,
    phase_index: i64,
) -> Result<Array2<SpecificHeatCapacity>, HeatCapacityError> {
    let fit = table.fit(phase(phase_index)?);
    let row = temperatures.map(|&t| fit.cp(t));

    Ok(Array2::from_shape_fn(
        (pressures.len(), temperatures.len()),
        |(_, j)| row[j],
    ))
}

fn phase(index: i64) -> Result<WaterPhase, HeatCapacityError> {
    WaterPhase::from_index(index).map_err(|err| {
        debug!(index, "rejected phase index");
        err.into()
    })
}
