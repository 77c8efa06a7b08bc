use serde::Serialize;

use super::query::{Area, AreaMeasure, EdgeLengths};
use super::reconcile::{AreaReport, Reconcile};
use crate::config::Policy;
use crate::geometry::SurveyPoint;

/// Everything derived from one snapshot of a plot boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSummary {
    pub measure: AreaMeasure,
    pub edge_lengths: Vec<f64>,
    pub perimeter: f64,
    pub report: AreaReport,
}

/// Recomputes area, edge lengths and reconciliation for a plot.
///
/// Callers run this after every mutation of their point store; nothing is
/// recomputed implicitly.
pub struct AnalyzePlot<'a> {
    points: &'a [SurveyPoint],
    reference_area: Option<f64>,
    policy: Policy,
}

impl<'a> AnalyzePlot<'a> {
    /// Creates a new `AnalyzePlot` operation with the default policy.
    #[must_use]
    pub fn new(points: &'a [SurveyPoint]) -> Self {
        Self {
            points,
            reference_area: None,
            policy: Policy::default(),
        }
    }

    /// Sets the registered area to reconcile against.
    #[must_use]
    pub fn with_reference(mut self, reference_area: Option<f64>) -> Self {
        self.reference_area = reference_area;
        self
    }

    /// Sets the policy supplying the match threshold.
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Executes the analysis.
    #[must_use]
    pub fn execute(&self) -> PlotSummary {
        let measure = Area::new(self.points).execute();
        let edge_lengths = EdgeLengths::new(self.points).execute();
        let perimeter = edge_lengths.iter().sum();
        let report = Reconcile::new(measure.area)
            .with_reference(self.reference_area)
            .with_threshold(self.policy.match_threshold_percent)
            .execute();
        PlotSummary {
            measure,
            edge_lengths,
            perimeter,
            report,
        }
    }
}
