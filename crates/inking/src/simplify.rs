//! Polyline simplification using the Ramer-Douglas-Peucker algorithm.
//!
//! Used in two places: as a pre-smoothing pass over dense spline samples
//! before they enter the resampler, and as an optional compaction pass
//! over a finished outline before storage or transmission.

use glam::Vec2;

/// Reduce an ordered point sequence to a subset whose every removed point
/// lies within `tolerance` (perpendicular distance) of the chord that
/// replaced it.
///
/// The result is always a subsequence of the input, endpoints included.
/// A non-positive tolerance is a no-op.
pub fn simplify(points: &[Vec2], tolerance: f32) -> Vec<Vec2> {
    if tolerance <= 0.0 || points.len() <= 2 {
        return points.to_vec();
    }

    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[points.len() - 1] = true;
    rdp_recurse(points, 0, points.len() - 1, tolerance, &mut kept);

    points
        .iter()
        .zip(&kept)
        .filter(|&(_, &k)| k)
        .map(|(&p, _)| p)
        .collect()
}

/// Recursive step: find the point in `(start, end)` farthest from the
/// chord. If it exceeds the tolerance, keep it and split there.
fn rdp_recurse(points: &[Vec2], start: usize, end: usize, tolerance: f32, kept: &mut [bool]) {
    if end <= start + 1 {
        return;
    }

    let mut max_dist = 0.0;
    let mut max_idx = start;
    for i in start + 1..end {
        let d = perpendicular_distance(points[i], points[start], points[end]);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist > tolerance {
        kept[max_idx] = true;
        rdp_recurse(points, start, max_idx, tolerance, kept);
        rdp_recurse(points, max_idx, end, tolerance, kept);
    }
}

/// Perpendicular distance from `point` to the line through `a` and `b`,
/// falling back to point distance when the chord is degenerate.
fn perpendicular_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let chord = b - a;
    let len_sq = chord.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    chord.perp_dot(point - a).abs() / len_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noisy_line() -> Vec<Vec2> {
        (0..20)
            .map(|i| Vec2::new(i as f32, if i % 2 == 0 { 0.1 } else { -0.1 }))
            .collect()
    }

    #[test]
    fn test_zero_tolerance_is_identity() {
        let points = noisy_line();
        assert_eq!(simplify(&points, 0.0), points);
        assert_eq!(simplify(&points, -1.0), points);
    }

    #[test]
    fn test_collinear_collapses_to_endpoints() {
        let points: Vec<Vec2> = (0..10).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let out = simplify(&points, 0.01);
        assert_eq!(out, vec![Vec2::new(0.0, 0.0), Vec2::new(9.0, 0.0)]);
    }

    #[test]
    fn test_keeps_significant_corner() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 2.4),
            Vec2::new(10.0, 5.0),
            Vec2::new(15.0, 2.4),
            Vec2::new(20.0, 0.0),
        ];
        let out = simplify(&points, 1.0);
        // The peak survives; the near-chord shoulder points do not.
        assert!(out.contains(&Vec2::new(10.0, 5.0)));
        assert!(!out.contains(&Vec2::new(5.0, 2.4)));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let points = noisy_line();
        let out = simplify(&points, 0.05);
        let mut cursor = 0;
        for p in &out {
            let found = points[cursor..].iter().position(|q| q == p);
            assert!(found.is_some(), "{p:?} not in input after index {cursor}");
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn test_removed_points_within_tolerance() {
        let tolerance = 0.2;
        let points = noisy_line();
        let out = simplify(&points, tolerance);
        // Every input point must be within tolerance of some chord of the
        // simplified polyline.
        for p in &points {
            let near = out
                .windows(2)
                .map(|w| perpendicular_distance(*p, w[0], w[1]))
                .fold(f32::INFINITY, f32::min);
            assert!(near <= tolerance + 1e-5, "{p:?} is {near} away");
        }
    }

    #[test]
    fn test_idempotent() {
        let points = noisy_line();
        for tolerance in [0.05, 0.2, 1.0] {
            let once = simplify(&points, tolerance);
            let twice = simplify(&once, tolerance);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_short_inputs_untouched() {
        let two = vec![Vec2::ZERO, Vec2::ONE];
        assert_eq!(simplify(&two, 10.0), two);
        assert!(simplify(&[], 1.0).is_empty());
    }
}
