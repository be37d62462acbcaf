use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// The thermodynamic state of a substance.
///
/// A `State<Substance>` pairs temperature and pressure with a substance
/// value. For the models in this crate the substance is usually a
/// [`WaterPhase`](crate::support::thermo::WaterPhase), which selects the
/// property fit to evaluate.
///
/// # Example
///
/// ```
/// use hydrosphere_models::support::thermo::{State, WaterPhase};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::megapascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let state = State {
///     temperature: ThermodynamicTemperature::new::<kelvin>(250.0),
///     pressure: Pressure::new::<megapascal>(300.0),
///     substance: WaterPhase::IceII,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Substance> {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub substance: Substance,
}

impl<Substance> State<Substance> {
    /// Creates a new state with the given temperature, pressure, and substance.
    #[must_use]
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        substance: Substance,
    ) -> Self {
        Self {
            temperature,
            pressure,
            substance,
        }
    }

    /// Returns a new state with the given temperature, keeping other fields unchanged.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns a new state with the given pressure, keeping other fields unchanged.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }

    /// Returns a new state with the given substance, keeping other fields unchanged.
    #[must_use]
    pub fn with_substance(self, substance: Substance) -> Self {
        Self { substance, ..self }
    }
}
