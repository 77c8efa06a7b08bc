use serde::Serialize;

use crate::geometry::{positions, SurveyPoint};
use crate::math::polygon_2d::{signed_double_area, winding_of, Winding};

/// Result of an [`Area`] query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaMeasure {
    /// Shoelace sum before halving; the sign gives the winding.
    pub signed_double_area: f64,
    /// Absolute value of the shoelace sum.
    pub double_area: f64,
    /// Enclosed area, `double_area / 2`.
    pub area: f64,
    pub winding: Winding,
}

/// Computes the enclosed area of a closed polygon of survey points.
///
/// Fewer than 3 points yield an area of `0.0` rather than an error.
pub struct Area<'a> {
    points: &'a [SurveyPoint],
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(points: &'a [SurveyPoint]) -> Self {
        Self { points }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> AreaMeasure {
        let signed = signed_double_area(&positions(self.points));
        let double_area = signed.abs();
        AreaMeasure {
            signed_double_area: signed,
            double_area,
            area: double_area * 0.5,
            winding: winding_of(signed),
        }
    }
}
