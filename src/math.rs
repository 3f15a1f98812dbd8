//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors.
pub type R2 = Vector2<Scalar>;
/// Dense row-by-column array of samples; rows follow y, columns follow x.
pub type Lattice = DMatrix<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            // Pin the last sample so the upper bound is reproduced exactly.
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as Scalar })
                .collect()
        }
    }
}
