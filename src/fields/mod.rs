//! Point charges, sampling lattices and the superposed electrostatic field.

mod charge;
mod electrostatic;
mod field;
mod grid;

pub use charge::{Charge, Polarity};
pub use electrostatic::{
    FieldConfig,
    compute_field,
    compute_field_default,
    compute_field_from_arrays,
    field_at,
};
pub use field::{Field, subsample_lattice};
pub use grid::{Grid, GridSpec, build_grid};
