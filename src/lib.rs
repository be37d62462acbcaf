//! # Hydrosphere Models
//!
//! Thermophysical property models for water and high-pressure ice, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations, such as
//!   [`HeatCapacity`](models::hydrosphere::heat_capacity::HeatCapacity).
//! - [`support`]: Supporting thermodynamic types used by models: phases,
//!   states, capability traits, and coefficient tables.
//!
//! ## Units
//!
//! All public quantities use [`uom`]. Phase indices are plain integers so they
//! can come straight from phase-diagram lookups.
//!
//! ## Example
//!
//! ```
//! use hydrosphere_models::models::hydrosphere::heat_capacity::{
//!     HeatCapacity, HeatCapacityInput,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::megapascal,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! // Ice VI at 300 K.
//! let cp = HeatCapacity::default()
//!     .call(&HeatCapacityInput {
//!         pressure: Pressure::new::<megapascal>(1_200.0),
//!         temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
//!         phase_index: 6,
//!     })
//!     .unwrap();
//!
//! assert_eq!(cp.get::<joule_per_kilogram_kelvin>(), 2590.0);
//! ```

pub mod models;
pub mod support;
