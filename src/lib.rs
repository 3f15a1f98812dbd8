#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants and numerical defaults.
pub mod constants;
/// Shared mathematical utilities (vectors, lattices, sampling).
pub mod math;
/// Point charges, sampling grids and electrostatic field evaluation.
pub mod fields;
/// Named charge configurations evaluated end to end.
pub mod scene;
/// CSV and VTK export of sampled fields.
pub mod io;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
