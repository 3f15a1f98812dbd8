//! I/O helpers for exporting sampled fields to external renderers.

pub mod csv;
pub mod vtk;

pub use csv::*;
pub use vtk::*;

use std::io;

use crate::errors::FieldError;
use crate::fields::{Field, Grid};

fn check_shapes(grid: &Grid, field: &Field) -> io::Result<()> {
    if grid.shape() == field.shape() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            FieldError::ShapeMismatch { x: grid.shape(), y: field.shape() },
        ))
    }
}
