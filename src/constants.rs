//! Baseline physical constants and numerical defaults.
//!
//! ## Accuracy
//!
//! The Coulomb constant is given to 11 significant figures, which is what the
//! field evaluator uses by default. Vacuum permittivity follows CODATA 2018;
//! for higher precision or latest values, consult NIST directly.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Mohr, P. J., Newell, D. B., Taylor, B. N., & Tiesinga, E. (2019). CODATA Recommended Values of the Fundamental Physical Constants: 2018.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Coulomb constant _k_ = 1 / (4π ε₀) in N·m²/C².
/// Approximate value: 8.9875517923 × 10⁹ N·m²/C² (11 significant figures).
pub const COULOMB_CONSTANT: Scalar = 8.987_551_792_3e9;
/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;
/// Default regularization added to distances near a charge, in meters.
pub const DEFAULT_REGULARIZATION: Scalar = 1.0e-9;

/// Returns the Coulomb proportionality constant 1 / (4π ε) for a medium of permittivity `permittivity`.
#[inline]
#[must_use]
pub fn coulomb_constant_from_permittivity(permittivity: Scalar) -> Scalar {
    1.0 / (4.0 * PI * permittivity)
}
