//! Bundled charge configurations evaluated over a sampling domain.

use crate::errors::Result;
use crate::fields::{Charge, Field, FieldConfig, Grid, GridSpec, compute_field};

/// Resolution used by the bundled presets.
pub const PRESET_RESOLUTION: usize = 300;

/// Named charge layout, sampling domain and evaluator settings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldScene {
    /// Human-readable identifier.
    pub name: String,
    /// Sampling domain.
    pub grid: GridSpec,
    /// Charges in accumulation order.
    pub charges: Vec<Charge>,
    /// Kernel constants.
    pub config: FieldConfig,
}

/// Grid and field produced by [`FieldScene::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSolution {
    /// Sample coordinates.
    pub grid: Grid,
    /// Field at each sample.
    pub field: Field,
}

impl FieldScene {
    /// Creates a scene with default evaluator settings.
    #[must_use]
    pub fn new(name: impl Into<String>, grid: GridSpec, charges: impl IntoIterator<Item = Charge>) -> Self {
        Self { name: name.into(), grid, charges: charges.into_iter().collect(), config: FieldConfig::default() }
    }

    /// Replaces the evaluator settings.
    #[must_use]
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// A single +1 C charge at the origin.
    #[must_use]
    pub fn single_charge() -> Self {
        Self::new("single", GridSpec::square(5.0, PRESET_RESOLUTION), [Charge::new(1.0, 0.0, 0.0)])
    }

    /// +1 C at (-1, 0) and -1 C at (1, 0).
    #[must_use]
    pub fn dipole() -> Self {
        Self::new(
            "dipole",
            GridSpec::square(5.0, PRESET_RESOLUTION),
            [Charge::new(1.0, -1.0, 0.0), Charge::new(-1.0, 1.0, 0.0)],
        )
    }

    /// Alternating ±1 C charges on the axes at unit distance.
    #[must_use]
    pub fn quadrupole() -> Self {
        Self::new(
            "quadrupole",
            GridSpec::square(5.0, PRESET_RESOLUTION),
            [
                Charge::new(1.0, 1.0, 0.0),
                Charge::new(-1.0, -1.0, 0.0),
                Charge::new(1.0, 0.0, 1.0),
                Charge::new(-1.0, 0.0, -1.0),
            ],
        )
    }

    /// All bundled presets.
    #[must_use]
    pub fn presets() -> Vec<Self> {
        vec![Self::single_charge(), Self::dipole(), Self::quadrupole()]
    }

    /// Builds the grid and evaluates the field over it.
    pub fn evaluate(&self) -> Result<FieldSolution> {
        let _span = tracing::debug_span!("scene", name = %self.name).entered();
        let grid = self.grid.build()?;
        let field = compute_field(&self.charges, &grid, &self.config)?;
        Ok(FieldSolution { grid, field })
    }
}
