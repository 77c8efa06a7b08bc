use serde::Serialize;

use super::Point2;

/// Traversal direction of a closed polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Fewer than 3 points, a zero signed area, or a non-finite sum.
    Degenerate,
}

/// Computes the shoelace sum of a closed polygon before halving.
///
/// The last point implicitly connects back to the first. Positive for
/// counter-clockwise, negative for clockwise. Returns `0.0` for fewer than
/// 3 points.
#[must_use]
pub fn signed_double_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum
}

/// Computes the signed area of a polygon (shoelace formula).
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    signed_double_area(points) * 0.5
}

/// Computes the unsigned enclosed area of a polygon.
///
/// Self-intersecting boundaries are not rejected; the result is simply the
/// absolute shoelace sum, which has no geometric meaning for them.
#[must_use]
pub fn area(points: &[Point2]) -> f64 {
    signed_double_area(points).abs() * 0.5
}

/// Classifies the winding of a polygon from its signed double area.
#[must_use]
pub fn winding_of(signed_double_area: f64) -> Winding {
    if signed_double_area > 0.0 {
        Winding::CounterClockwise
    } else if signed_double_area < 0.0 {
        Winding::Clockwise
    } else {
        Winding::Degenerate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::distance_2d::edge_lengths;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn square_area_is_exact() {
        assert_eq!(area(&square()), 100.0);
        assert_relative_eq!(signed_double_area(&square()), 200.0);
    }

    #[test]
    fn triangle_area() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        ];
        assert_relative_eq!(area(&pts), 6.0);
    }

    #[test]
    fn clockwise_square_is_negative() {
        let mut pts = square();
        pts.reverse();
        assert_relative_eq!(signed_area(&pts), -100.0);
        assert_relative_eq!(area(&pts), 100.0);
        assert_eq!(winding_of(signed_double_area(&pts)), Winding::Clockwise);
    }

    #[test]
    fn degenerate_inputs_have_zero_area() {
        assert_relative_eq!(area(&[]), 0.0);
        assert_relative_eq!(area(&[Point2::new(3.0, 4.0)]), 0.0);
        assert_relative_eq!(area(&[Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)]), 0.0);
        assert_eq!(winding_of(signed_double_area(&[])), Winding::Degenerate);
    }

    #[test]
    fn collinear_points_have_zero_area() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        assert_relative_eq!(area(&pts), 0.0);
        assert_eq!(winding_of(signed_double_area(&pts)), Winding::Degenerate);
    }

    #[test]
    fn duplicate_consecutive_points_are_harmless() {
        let mut pts = square();
        let dup = pts[1];
        pts.insert(2, dup);
        assert_relative_eq!(area(&pts), 100.0);
    }

    #[test]
    fn nan_coordinates_propagate() {
        let mut pts = square();
        pts[2] = Point2::new(f64::NAN, 10.0);
        assert!(area(&pts).is_nan());
        assert_eq!(winding_of(signed_double_area(&pts)), Winding::Degenerate);
    }

    fn polygon_strategy() -> impl Strategy<Value = Vec<Point2>> {
        // Integer coordinates keep every product and partial sum exact.
        prop::collection::vec((-1000i32..1000, -1000i32..1000), 0..24).prop_map(|coords| {
            coords
                .into_iter()
                .map(|(x, y)| Point2::new(f64::from(x), f64::from(y)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn area_is_invariant_under_rotation(pts in polygon_strategy(), shift in 0usize..24) {
            let mut rotated = pts.clone();
            if !rotated.is_empty() {
                let k = shift % rotated.len();
                rotated.rotate_left(k);
            }
            prop_assert_eq!(area(&rotated), area(&pts));
        }

        #[test]
        fn reversal_flips_sign_only(pts in polygon_strategy()) {
            let mut reversed = pts.clone();
            reversed.reverse();
            prop_assert_eq!(signed_double_area(&reversed), -signed_double_area(&pts));
            prop_assert_eq!(area(&reversed), area(&pts));
        }

        #[test]
        fn short_sequences_have_zero_area(
            pts in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..3),
        ) {
            let pts: Vec<Point2> = pts.into_iter().map(|(x, y)| Point2::new(x, y)).collect();
            prop_assert_eq!(area(&pts), 0.0);
        }

        #[test]
        fn every_point_starts_one_non_negative_edge(pts in polygon_strategy()) {
            let lengths = edge_lengths(&pts);
            if pts.len() < 2 {
                prop_assert!(lengths.is_empty());
            } else {
                prop_assert_eq!(lengths.len(), pts.len());
                prop_assert!(lengths.iter().all(|&l| l >= 0.0));
            }
        }
    }
}
