//! Caller-owned container for the ordered boundary points of one plot.

use tracing::{debug, warn};

use crate::config::Policy;
use crate::error::StoreError;
use crate::geometry::SurveyPoint;

/// Ordered sequence of survey points forming a closed polygon.
///
/// Insertion order is the boundary traversal order. The store only holds
/// data; recomputing areas after a mutation is up to the caller (see
/// [`AnalyzePlot`](crate::operations::AnalyzePlot)).
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<SurveyPoint>,
    policy: Policy,
}

impl PointStore {
    /// Creates a new, empty store with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store governed by `policy`.
    #[must_use]
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            points: Vec::new(),
            policy,
        }
    }

    /// Creates a store from an existing point sequence, e.g. an upstream
    /// extraction result.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NonFiniteCoordinate` if the policy rejects
    /// non-finite coordinates and one of the points has them.
    pub fn from_points(points: Vec<SurveyPoint>, policy: Policy) -> Result<Self, StoreError> {
        let mut store = Self::with_policy(policy);
        store.set_points(points)?;
        Ok(store)
    }

    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    #[must_use]
    pub fn points(&self) -> &[SurveyPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SurveyPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SurveyPoint> {
        self.points.iter()
    }

    /// Consumes the store, returning the point sequence.
    #[must_use]
    pub fn into_points(self) -> Vec<SurveyPoint> {
        self.points
    }

    /// Appends a point at the origin labelled with its 1-based position.
    ///
    /// Labels are not checked for uniqueness, so appending after a removal
    /// can repeat an existing label. Returns the index of the new point.
    pub fn append(&mut self) -> usize {
        let index = self.points.len();
        self.points.push(SurveyPoint::at_origin((index + 1).to_string()));
        debug!(index, len = self.points.len(), "appended default point");
        index
    }

    /// Appends a fully specified point and returns its index.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NonFiniteCoordinate` if the policy rejects it.
    pub fn push(&mut self, point: SurveyPoint) -> Result<usize, StoreError> {
        self.check_finite(&point)?;
        let index = self.points.len();
        debug!(index, id = %point.id, "appended point");
        self.points.push(point);
        Ok(index)
    }

    /// Removes and returns the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if `index >= len`, or
    /// `StoreError::BelowMinimum` if the store would drop under the policy's
    /// minimum point count.
    pub fn remove(&mut self, index: usize) -> Result<SurveyPoint, StoreError> {
        self.check_index(index)?;
        let remaining = self.points.len() - 1;
        if remaining < self.policy.min_points {
            warn!(
                index,
                remaining,
                min = self.policy.min_points,
                "refused removal below minimum point count"
            );
            return Err(StoreError::BelowMinimum {
                min: self.policy.min_points,
                len: remaining,
            });
        }
        let removed = self.points.remove(index);
        debug!(index, id = %removed.id, len = remaining, "removed point");
        Ok(removed)
    }

    /// Overwrites the point at `index`, returning the previous point.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if `index >= len`, or
    /// `StoreError::NonFiniteCoordinate` if the policy rejects the point.
    pub fn replace(&mut self, index: usize, point: SurveyPoint) -> Result<SurveyPoint, StoreError> {
        self.check_index(index)?;
        self.check_finite(&point)?;
        debug!(index, id = %point.id, "replaced point");
        Ok(std::mem::replace(&mut self.points[index], point))
    }

    /// Replaces the whole sequence.
    ///
    /// The minimum point count only guards removals, so any length is
    /// accepted here.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NonFiniteCoordinate` if the policy rejects one
    /// of the points. The store is unchanged in that case.
    pub fn set_points(&mut self, points: Vec<SurveyPoint>) -> Result<(), StoreError> {
        for point in &points {
            self.check_finite(point)?;
        }
        debug!(len = points.len(), "replaced point sequence");
        self.points = points;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index >= self.points.len() {
            warn!(index, len = self.points.len(), "point index out of range");
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }

    fn check_finite(&self, point: &SurveyPoint) -> Result<(), StoreError> {
        if self.policy.reject_non_finite && !point.is_finite() {
            warn!(id = %point.id, "rejected non-finite coordinate");
            return Err(StoreError::NonFiniteCoordinate {
                id: point.id.clone(),
                x: point.x,
                y: point.y,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a SurveyPoint;
    type IntoIter = std::slice::Iter<'a, SurveyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
