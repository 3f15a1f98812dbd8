use std::ops::Add;

use crate::errors::{FieldError, Result};
use crate::math::{Lattice, R2, Scalar};

/// Floor added to the magnitude before taking its logarithm.
const LOG_FLOOR: Scalar = 1e-16;

/// Sampled planar vector field; `ex` and `ey` share the shape of the grid they were computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    ex: Lattice,
    ey: Lattice,
}

impl Field {
    /// All-zero field of the given shape.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { ex: Lattice::zeros(rows, cols), ey: Lattice::zeros(rows, cols) }
    }

    /// Wraps component arrays, which must share a shape.
    pub fn from_components(ex: Lattice, ey: Lattice) -> Result<Self> {
        if ex.shape() != ey.shape() {
            return Err(FieldError::ShapeMismatch { x: ex.shape(), y: ey.shape() });
        }
        Ok(Self { ex, ey })
    }

    /// X component at every sample.
    #[must_use]
    pub fn ex(&self) -> &Lattice {
        &self.ex
    }

    /// Y component at every sample.
    #[must_use]
    pub fn ey(&self) -> &Lattice {
        &self.ey
    }

    pub(crate) fn components_mut(&mut self) -> (&mut Lattice, &mut Lattice) {
        (&mut self.ex, &mut self.ey)
    }

    /// Shape as (rows, columns).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.ex.shape()
    }

    /// Field vector at row `i`, column `j`.
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> R2 {
        R2::new(self.ex[(i, j)], self.ey[(i, j)])
    }

    /// Euclidean magnitude |E| at every sample.
    #[must_use]
    pub fn magnitude(&self) -> Lattice {
        self.ex.zip_map(&self.ey, |x, y| (x * x + y * y).sqrt())
    }

    /// `ln(|E| + 1e-16)` at every sample; finite wherever |E| is finite.
    #[must_use]
    pub fn log_magnitude(&self) -> Lattice {
        self.magnitude().map(|m| (m + LOG_FLOOR).ln())
    }

    /// Keeps every `stride`-th row and column, starting from the first.
    pub fn subsample(&self, stride: usize) -> Result<Self> {
        Ok(Self { ex: subsample_lattice(&self.ex, stride)?, ey: subsample_lattice(&self.ey, stride)? })
    }

    /// Consumes the field, returning `(Ex, Ey)`.
    #[must_use]
    pub fn into_parts(self) -> (Lattice, Lattice) {
        (self.ex, self.ey)
    }
}

/// Strided view of a lattice, used to thin arrow plots.
pub fn subsample_lattice(values: &Lattice, stride: usize) -> Result<Lattice> {
    if stride == 0 {
        return Err(FieldError::InvalidResolution(stride));
    }
    let (rows, cols) = values.shape();
    let out_rows = rows.div_ceil(stride);
    let out_cols = cols.div_ceil(stride);
    Ok(Lattice::from_fn(out_rows, out_cols, |i, j| values[(i * stride, j * stride)]))
}

impl Add for Field {
    type Output = Result<Self>;

    /// Superposes two fields sampled on the same shape.
    fn add(self, rhs: Self) -> Self::Output {
        if self.shape() != rhs.shape() {
            return Err(FieldError::ShapeMismatch { x: self.shape(), y: rhs.shape() });
        }
        Ok(Self { ex: self.ex + rhs.ex, ey: self.ey + rhs.ey })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn magnitude_and_log_scale() {
        let ex = Lattice::from_row_slice(1, 2, &[3.0, 0.0]);
        let ey = Lattice::from_row_slice(1, 2, &[4.0, 0.0]);
        let field = Field::from_components(ex, ey).unwrap();
        let mag = field.magnitude();
        assert_relative_eq!(mag[(0, 0)], 5.0, epsilon = 1.0e-12);
        assert_eq!(mag[(0, 1)], 0.0);

        let log = field.log_magnitude();
        assert_relative_eq!(log[(0, 0)], 5.0_f64.ln(), epsilon = 1.0e-12);
        assert!(log[(0, 1)].is_finite());
        assert_relative_eq!(log[(0, 1)], (1e-16_f64).ln(), epsilon = 1.0e-9);
    }

    #[test]
    fn subsample_keeps_first_and_every_stride() {
        let ex = Lattice::from_fn(13, 13, |i, j| (i * 100 + j) as Scalar);
        let field = Field::from_components(ex.clone(), ex).unwrap();
        let thin = field.subsample(6).unwrap();
        assert_eq!(thin.shape(), (3, 3));
        assert_eq!(thin.ex()[(0, 0)], 0.0);
        assert_eq!(thin.ex()[(1, 2)], 612.0);
        assert_eq!(thin.ey()[(2, 2)], 1212.0);
        assert_eq!(field.subsample(0), Err(FieldError::InvalidResolution(0)));
        assert_eq!(field.subsample(1).unwrap(), field);
    }

    #[test]
    fn addition_requires_matching_shapes() {
        let a = Field::zeros(2, 2);
        let b = Field::zeros(3, 2);
        assert!(matches!(a + b, Err(FieldError::ShapeMismatch { .. })));
    }

    #[test]
    fn into_parts_returns_components() {
        let ex = Lattice::from_row_slice(1, 2, &[1.0, 2.0]);
        let ey = Lattice::from_row_slice(1, 2, &[3.0, 4.0]);
        let field = Field::from_components(ex.clone(), ey.clone()).unwrap();
        assert_eq!(field.into_parts(), (ex, ey));
    }

    #[test]
    fn mismatched_components_are_rejected() {
        let err = Field::from_components(Lattice::zeros(1, 2), Lattice::zeros(2, 1)).unwrap_err();
        assert_eq!(err, FieldError::ShapeMismatch { x: (1, 2), y: (2, 1) });
    }
}
