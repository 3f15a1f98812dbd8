use crate::math::{R2, Scalar};

/// Stationary point charge in the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    /// Signed charge in coulombs.
    pub magnitude: Scalar,
    /// Position in meters.
    pub position: R2,
}

/// Sign of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Field points away from the charge.
    Positive,
    /// Field points toward the charge.
    Negative,
    /// Zero magnitude; contributes no field.
    Neutral,
}

impl Charge {
    /// Creates a charge of `magnitude` coulombs at `(x, y)`.
    #[must_use]
    pub fn new(magnitude: Scalar, x: Scalar, y: Scalar) -> Self {
        Self { magnitude, position: R2::new(x, y) }
    }

    /// Horizontal coordinate.
    #[inline]
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.position.x
    }

    /// Vertical coordinate.
    #[inline]
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.position.y
    }

    /// Classifies the charge by sign.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        if self.magnitude > 0.0 {
            Polarity::Positive
        } else if self.magnitude < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    /// Marker area for scatter annotations, growing logarithmically with |q|.
    #[must_use]
    pub fn marker_size(&self) -> Scalar {
        80.0 * self.magnitude.abs().ln_1p()
    }

    /// Legend label such as `+1 C` or `-2.5 C`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.polarity() {
            Polarity::Positive => format!("+{} C", self.magnitude),
            _ => format!("{} C", self.magnitude),
        }
    }
}

impl From<(Scalar, Scalar, Scalar)> for Charge {
    /// Builds a charge from a `(q, x, y)` triple.
    fn from((magnitude, x, y): (Scalar, Scalar, Scalar)) -> Self {
        Self::new(magnitude, x, y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn triple_conversion_keeps_order() {
        let c = Charge::from((-1.0, 1.0, 0.5));
        assert_eq!(c.magnitude, -1.0);
        assert_eq!(c.x(), 1.0);
        assert_eq!(c.y(), 0.5);
        assert_eq!(c.polarity(), Polarity::Negative);
    }

    #[test]
    fn annotation_helpers() {
        let pos = Charge::new(1.0, 0.0, 0.0);
        assert_eq!(pos.label(), "+1 C");
        assert_relative_eq!(pos.marker_size(), 80.0 * 2.0_f64.ln(), epsilon = 1.0e-12);

        let neg = Charge::new(-2.5, 0.0, 0.0);
        assert_eq!(neg.label(), "-2.5 C");
        assert_eq!(Charge::new(0.0, 0.0, 0.0).polarity(), Polarity::Neutral);
    }
}
