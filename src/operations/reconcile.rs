use serde::Serialize;
use tracing::debug;

use crate::config::MATCH_THRESHOLD_PERCENT;

/// Outcome of comparing a computed area with a registered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reconciliation {
    /// Deviation within the threshold (inclusive).
    Match,
    /// Deviation above the threshold, or not computable (NaN).
    Mismatch,
    /// No positive reference area to compare against.
    NoReference,
}

/// Comparison of a computed area against a reference area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaReport {
    pub computed_area: f64,
    /// Twice the computed area, the unhalved shoelace magnitude.
    pub double_area: f64,
    pub reference_area: Option<f64>,
    /// `|computed - reference|`, present whenever a reference was given.
    pub absolute_difference: Option<f64>,
    /// Difference relative to the reference in percent, present only for a
    /// positive reference.
    pub percentage_difference: Option<f64>,
    pub classification: Reconciliation,
}

/// Reconciles a computed area with an externally registered area.
pub struct Reconcile {
    computed_area: f64,
    reference_area: Option<f64>,
    threshold_percent: f64,
}

impl Reconcile {
    /// Creates a new `Reconcile` operation with no reference area and the
    /// default match threshold.
    #[must_use]
    pub fn new(computed_area: f64) -> Self {
        Self {
            computed_area,
            reference_area: None,
            threshold_percent: MATCH_THRESHOLD_PERCENT,
        }
    }

    /// Sets the reference area. `None`, zero or negative values classify as
    /// [`Reconciliation::NoReference`].
    #[must_use]
    pub fn with_reference(mut self, reference_area: Option<f64>) -> Self {
        self.reference_area = reference_area;
        self
    }

    /// Sets the inclusive match threshold in percent.
    #[must_use]
    pub fn with_threshold(mut self, threshold_percent: f64) -> Self {
        self.threshold_percent = threshold_percent;
        self
    }

    /// Executes the comparison. Never divides by zero.
    #[must_use]
    pub fn execute(&self) -> AreaReport {
        let computed = self.computed_area;
        let absolute_difference = self.reference_area.map(|r| (computed - r).abs());

        let (percentage_difference, classification) =
            match (self.reference_area, absolute_difference) {
                (Some(reference), Some(diff)) if reference > 0.0 => {
                    let pct = diff / reference * 100.0;
                    let class = if pct <= self.threshold_percent {
                        Reconciliation::Match
                    } else {
                        Reconciliation::Mismatch
                    };
                    (Some(pct), class)
                }
                _ => (None, Reconciliation::NoReference),
            };

        debug!(
            computed,
            reference = ?self.reference_area,
            percentage = ?percentage_difference,
            ?classification,
            "reconciled area"
        );

        AreaReport {
            computed_area: computed,
            double_area: computed * 2.0,
            reference_area: self.reference_area,
            absolute_difference,
            percentage_difference,
            classification,
        }
    }
}
