//! Thermodynamic property models.

pub mod linear_heat_capacity;

pub use linear_heat_capacity::{
    CHOUKROUN_GRASSET_2010, CoefficientTable, CoefficientTableError, LinearFit,
    LinearHeatCapacity,
};
