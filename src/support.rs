//! Supporting utilities used by models.
//!
//! These APIs are public because they are useful on their own (for example,
//! to query heat capacity through a thermodynamic [`State`](thermo::State)),
//! but they are not yet stable.

pub mod thermo;
