use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// A thermodynamic [`State`] includes a `Substance` value. For water and ice
/// models the substance is the phase, which decides which property fit is
/// used when the state is queried.
///
/// `StateFrom<Input>` expresses, at compile time, which combinations of
/// inputs a model can use to construct a state.
/// If a model does not implement `StateFrom<Input>`, then that input is simply
/// not supported (no runtime "not implemented" errors).
///
/// Inputs are plain Rust types, usually tuples such as
/// `(Substance, ThermodynamicTemperature, Pressure)`.
///
/// ## Default substance convenience
///
/// If a model implements `StateFrom<(Substance, A, B)>` and `Substance:
/// Default`, then it also implements `StateFrom<(A, B)>`, filling in
/// `Substance::default()`. Prefer the explicit form whenever the substance
/// matters, as it does for phase-dependent properties.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Substance>, Self::Error>;
}

/// Default-substance convenience impl.
impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Substance, A, B)>,
    <M as ThermoModel>::Substance: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Substance, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Substance>, Self::Error> {
        self.state_from((<M as ThermoModel>::Substance::default(), a, b))
    }
}
