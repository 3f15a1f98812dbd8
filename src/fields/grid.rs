use crate::errors::{Axis, FieldError, Result};
use crate::math::{linspace, Lattice, Scalar};

/// Rectangular sampling domain and points per axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Lower x bound in meters.
    pub x_min: Scalar,
    /// Upper x bound in meters.
    pub x_max: Scalar,
    /// Lower y bound in meters.
    pub y_min: Scalar,
    /// Upper y bound in meters.
    pub y_max: Scalar,
    /// Samples per axis.
    pub resolution: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { x_min: -5.0, x_max: 5.0, y_min: -5.0, y_max: 5.0, resolution: 200 }
    }
}

impl GridSpec {
    /// Square domain `[-half_width, half_width]²` sampled with `resolution` points per axis.
    #[must_use]
    pub fn square(half_width: Scalar, resolution: usize) -> Self {
        Self { x_min: -half_width, x_max: half_width, y_min: -half_width, y_max: half_width, resolution }
    }

    /// Checks bound ordering, span and resolution.
    pub fn validate(&self) -> Result<()> {
        check_axis(Axis::X, self.x_min, self.x_max)?;
        check_axis(Axis::Y, self.y_min, self.y_max)?;
        if self.resolution == 0 {
            return Err(FieldError::InvalidResolution(self.resolution));
        }
        Ok(())
    }

    /// Builds the lattice described by this spec.
    pub fn build(&self) -> Result<Grid> {
        build_grid(self.x_min, self.x_max, self.y_min, self.y_max, self.resolution)
    }
}

fn check_axis(axis: Axis, min: Scalar, max: Scalar) -> Result<()> {
    // The span itself must be representable, or linspace overflows.
    if min.is_finite() && max.is_finite() && min < max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(FieldError::InvalidBounds { axis, min, max })
    }
}

/// Pair of equal-shape coordinate arrays; entry `(i, j)` of `x` and `y` locates one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Lattice,
    y: Lattice,
}

impl Grid {
    /// Wraps arbitrary coordinate arrays, which must share a shape.
    pub fn from_coordinates(x: Lattice, y: Lattice) -> Result<Self> {
        if x.shape() != y.shape() {
            return Err(FieldError::ShapeMismatch { x: x.shape(), y: y.shape() });
        }
        Ok(Self { x, y })
    }

    /// X coordinate of every sample.
    #[must_use]
    pub fn x(&self) -> &Lattice {
        &self.x
    }

    /// Y coordinate of every sample.
    #[must_use]
    pub fn y(&self) -> &Lattice {
        &self.y
    }

    /// Shape as (rows, columns).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Total number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the grid has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sample spacing `(dx, dy)` of a meshgrid; zero along an axis with fewer than two samples.
    #[must_use]
    pub fn spacing(&self) -> (Scalar, Scalar) {
        let (rows, cols) = self.shape();
        let dx = if rows > 0 && cols > 1 { self.x[(0, 1)] - self.x[(0, 0)] } else { 0.0 };
        let dy = if cols > 0 && rows > 1 { self.y[(1, 0)] - self.y[(0, 0)] } else { 0.0 };
        (dx, dy)
    }

    /// Consumes the grid, returning `(X, Y)`.
    #[must_use]
    pub fn into_parts(self) -> (Lattice, Lattice) {
        (self.x, self.y)
    }
}

/// Builds an `n × n` meshgrid over `[x_min, x_max] × [y_min, y_max]`, endpoints included.
///
/// Columns follow x and rows follow y, so `X[(i, j)] = x_j` and `Y[(i, j)] = y_i`.
pub fn build_grid(x_min: Scalar, x_max: Scalar, y_min: Scalar, y_max: Scalar, resolution: usize) -> Result<Grid> {
    let spec = GridSpec { x_min, x_max, y_min, y_max, resolution };
    spec.validate()?;

    let xs = linspace(x_min, x_max, resolution);
    let ys = linspace(y_min, y_max, resolution);
    let x = Lattice::from_fn(resolution, resolution, |_, j| xs[j]);
    let y = Lattice::from_fn(resolution, resolution, |i, _| ys[i]);
    tracing::debug!(resolution, x_min, x_max, y_min, y_max, "built sampling grid");
    Ok(Grid { x, y })
}
