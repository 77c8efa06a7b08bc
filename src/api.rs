//! Function-style entry points for callers that only need the numbers.

use crate::geometry::SurveyPoint;
use crate::operations::{Area, AreaReport, EdgeLengths, Reconcile};

/// Enclosed area of the closed polygon through `points`; `0.0` below 3 points.
#[must_use]
pub fn compute_area(points: &[SurveyPoint]) -> f64 {
    Area::new(points).execute().area
}

/// Edge lengths aligned by index with `points`; empty below 2 points.
#[must_use]
pub fn compute_edge_lengths(points: &[SurveyPoint]) -> Vec<f64> {
    EdgeLengths::new(points).execute()
}

/// Compares `computed_area` with `reference_area` using the default threshold.
#[must_use]
pub fn reconcile(computed_area: f64, reference_area: Option<f64>) -> AreaReport {
    Reconcile::new(computed_area)
        .with_reference(reference_area)
        .execute()
}
