use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A labelled vertex of a survey plot boundary.
///
/// The label is meant to be unique within one polygon, but nothing enforces
/// it. Coordinates are planar and unit-agnostic (meters in practice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl SurveyPoint {
    /// Creates a new point with the given label and coordinates.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Creates a point at the origin.
    #[must_use]
    pub fn at_origin(id: impl Into<String>) -> Self {
        Self::new(id, 0.0, 0.0)
    }

    /// Returns the coordinates as a point.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Returns `true` if both coordinates are neither NaN nor infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Extracts the coordinates of a point sequence, preserving order.
#[must_use]
pub fn positions(points: &[SurveyPoint]) -> Vec<Point2> {
    points.iter().map(SurveyPoint::position).collect()
}
