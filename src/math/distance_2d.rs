use super::Point2;

/// Returns the Euclidean length of every edge of a closed polygon.
///
/// `lengths[i]` is the distance from `points[i]` to `points[(i + 1) % n]`,
/// so the result is aligned by index with the input. The sequence is always
/// treated as closed, even for two points (which yields the same edge twice).
/// Fewer than 2 points define no edges and yield an empty vector.
#[must_use]
pub fn edge_lengths(points: &[Point2]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| nalgebra::distance(&points[i], &points[(i + 1) % n]))
        .collect()
}

/// Returns the perimeter of a closed polygon, `0.0` for fewer than 2 points.
#[must_use]
pub fn perimeter(points: &[Point2]) -> f64 {
    edge_lengths(points).iter().sum()
}
