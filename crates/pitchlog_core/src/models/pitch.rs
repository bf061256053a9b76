use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A point on the pitch, in whatever coordinate system the owner declares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed interval along one pitch axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dimension {
    pub min: f64,
    pub max: f64,
}

impl Dimension {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Value -> fraction of the span (0 at `min`, 1 at `max`).
    pub fn to_unit(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    pub fn from_unit(&self, unit: f64) -> f64 {
        self.min + unit * self.span()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PitchDimensions {
    pub x_dim: Dimension,
    pub y_dim: Dimension,
    /// Real-world pitch length in meters, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Real-world pitch width in meters, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_unit_mapping() {
        let dim = Dimension::new(-52.5, 52.5);
        assert_eq!(dim.span(), 105.0);
        assert_eq!(dim.to_unit(0.0), 0.5);
        assert_eq!(dim.from_unit(1.0), 52.5);
    }
}
