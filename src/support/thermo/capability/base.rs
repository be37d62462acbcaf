/// Base trait for thermodynamic property models.
///
/// Names the substance type a model understands. Capability traits such as
/// [`HasCp`](super::HasCp) build on it.
pub trait ThermoModel {
    type Substance;
}
