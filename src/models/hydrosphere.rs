//! Models of water and ice in planetary hydrospheres.

pub mod heat_capacity;
