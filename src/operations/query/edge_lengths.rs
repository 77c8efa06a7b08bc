use crate::geometry::{positions, SurveyPoint};
use crate::math::distance_2d::edge_lengths;

/// Computes the length of every boundary edge of a closed polygon.
///
/// The result is aligned by index with the points: entry `i` is the edge
/// from point `i` to its successor, the last entry being the closing edge.
pub struct EdgeLengths<'a> {
    points: &'a [SurveyPoint],
}

impl<'a> EdgeLengths<'a> {
    /// Creates a new `EdgeLengths` query.
    #[must_use]
    pub fn new(points: &'a [SurveyPoint]) -> Self {
        Self { points }
    }

    /// Executes the query. Empty for fewer than 2 points.
    #[must_use]
    pub fn execute(&self) -> Vec<f64> {
        edge_lengths(&positions(self.points))
    }
}
