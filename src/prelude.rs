//! Convenience re-exports for building field experiments.

pub use crate::constants::*;
pub use crate::errors::{Axis, FieldError};
pub use crate::fields::{
    Charge,
    Field,
    FieldConfig,
    Grid,
    GridSpec,
    Polarity,
    build_grid,
    compute_field,
    compute_field_default,
    compute_field_from_arrays,
    field_at,
};
pub use crate::io::{write_field_csv, write_vtk_structured_points};
pub use crate::math::{linspace, Lattice, R2, Scalar};
pub use crate::scene::{FieldScene, FieldSolution};
