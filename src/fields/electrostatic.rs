use crate::constants::{COULOMB_CONSTANT, DEFAULT_REGULARIZATION};
use crate::errors::{FieldError, Result};
use crate::math::{Lattice, R2, Scalar};

use super::charge::Charge;
use super::field::Field;
use super::grid::Grid;

/// Physical scaling and regularization used by the Coulomb kernel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Proportionality constant _k_ in N·m²/C²; defaults to [`COULOMB_CONSTANT`].
    pub coulomb_constant: Scalar,
    /// Added once to the distance and once to the cubed distance; defaults to [`DEFAULT_REGULARIZATION`].
    pub regularization: Scalar,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self { coulomb_constant: COULOMB_CONSTANT, regularization: DEFAULT_REGULARIZATION }
    }
}

impl FieldConfig {
    /// Overrides the proportionality constant.
    #[must_use]
    pub fn with_coulomb_constant(mut self, coulomb_constant: Scalar) -> Self {
        self.coulomb_constant = coulomb_constant;
        self
    }

    /// Overrides the regularization constant.
    #[must_use]
    pub fn with_regularization(mut self, regularization: Scalar) -> Self {
        self.regularization = regularization;
        self
    }

    /// Requires a finite `k` and a finite, non-negative regularization.
    pub fn validate(&self) -> Result<()> {
        if !self.coulomb_constant.is_finite() {
            return Err(FieldError::InvalidConfig(format!(
                "coulomb constant must be finite, got {}",
                self.coulomb_constant
            )));
        }
        if !(self.regularization.is_finite() && self.regularization >= 0.0) {
            return Err(FieldError::InvalidConfig(format!(
                "regularization must be finite and non-negative, got {}",
                self.regularization
            )));
        }
        Ok(())
    }
}

/// Contribution `k q r / (|r|³)` of one charge at displacement `(rx, ry)`, with both
/// regularization terms applied: `R = sqrt(R²) + eps`, `R³ = R²·R + eps`.
#[inline]
fn coulomb_contribution(kq: Scalar, rx: Scalar, ry: Scalar, eps: Scalar) -> (Scalar, Scalar) {
    let r2 = rx * rx + ry * ry;
    let r = r2.sqrt() + eps;
    let r3 = r2 * r + eps;
    (kq * rx / r3, kq * ry / r3)
}

/// Superposed electric field of `charges` at every point of `grid`.
///
/// Charges are accumulated in slice order; an empty slice yields the zero field.
pub fn compute_field(charges: &[Charge], grid: &Grid, config: &FieldConfig) -> Result<Field> {
    config.validate()?;
    let (rows, cols) = grid.shape();
    tracing::debug!(charges = charges.len(), rows, cols, "evaluating coulomb field");

    let mut field = Field::zeros(rows, cols);
    let (ex, ey) = field.components_mut();
    accumulate(charges, grid.x(), grid.y(), ex, ey, config);
    Ok(field)
}

/// [`compute_field`] with the SI Coulomb constant and default regularization.
pub fn compute_field_default(charges: &[Charge], grid: &Grid) -> Result<Field> {
    compute_field(charges, grid, &FieldConfig::default())
}

/// Evaluates the field on raw coordinate arrays, returning `(Ex, Ey)` shaped like `x`.
pub fn compute_field_from_arrays(
    charges: &[Charge],
    x: &Lattice,
    y: &Lattice,
    config: &FieldConfig,
) -> Result<(Lattice, Lattice)> {
    if x.shape() != y.shape() {
        return Err(FieldError::ShapeMismatch { x: x.shape(), y: y.shape() });
    }
    config.validate()?;
    let (rows, cols) = x.shape();
    let mut ex = Lattice::zeros(rows, cols);
    let mut ey = Lattice::zeros(rows, cols);
    accumulate(charges, x, y, &mut ex, &mut ey, config);
    Ok((ex, ey))
}

/// Field vector at a single point.
pub fn field_at(charges: &[Charge], point: R2, config: &FieldConfig) -> Result<R2> {
    config.validate()?;
    let mut e = R2::zeros();
    for c in charges {
        let r_vec = point - c.position;
        let (dx, dy) = coulomb_contribution(config.coulomb_constant * c.magnitude, r_vec.x, r_vec.y, config.regularization);
        e.x += dx;
        e.y += dy;
    }
    Ok(e)
}

fn accumulate(charges: &[Charge], x: &Lattice, y: &Lattice, ex: &mut Lattice, ey: &mut Lattice, config: &FieldConfig) {
    let eps = config.regularization;
    for c in charges {
        tracing::trace!(q = c.magnitude, x0 = c.x(), y0 = c.y(), "accumulating charge");
        let kq = config.coulomb_constant * c.magnitude;
        let (x0, y0) = (c.x(), c.y());
        for ((px, py), (fx, fy)) in x.iter().zip(y.iter()).zip(ex.iter_mut().zip(ey.iter_mut())) {
            let (dx, dy) = coulomb_contribution(kq, px - x0, py - y0, eps);
            *fx += dx;
            *fy += dy;
        }
    }
}
