//! Small 2D helpers the outline math needs beyond what glam provides.

use glam::Vec2;

/// Clockwise perpendicular of a vector: `(y, -x)`.
///
/// glam's `Vec2::perp` rotates counter-clockwise; the outline math offsets
/// the left boundary by subtracting this clockwise perpendicular.
pub fn perp_cw(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Rotate `point` around `center` by `angle` radians.
pub fn rotate_around(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    let d = point - center;
    center + Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c)
}

/// Project `point` a distance `d` along `direction`.
pub fn project(point: Vec2, direction: Vec2, d: f32) -> Vec2 {
    point + direction * d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perp_cw() {
        let v = perp_cw(Vec2::new(1.0, 0.0));
        assert!((v - Vec2::new(0.0, -1.0)).length() < 1e-6);
        // Perpendicularity holds for arbitrary vectors
        let w = Vec2::new(3.0, -2.0);
        assert!(w.dot(perp_cw(w)).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_around_quarter_turn() {
        let p = rotate_around(
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            std::f32::consts::FRAC_PI_2,
        );
        assert!((p - Vec2::new(1.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_rotate_around_preserves_distance() {
        let center = Vec2::new(5.0, -3.0);
        let p = Vec2::new(9.0, 0.0);
        let r = p.distance(center);
        for i in 0..8 {
            let q = rotate_around(p, center, i as f32 * 0.7);
            assert!((q.distance(center) - r).abs() < 1e-4);
        }
    }

    #[test]
    fn test_project() {
        let p = project(Vec2::ZERO, Vec2::new(0.0, 1.0), 2.5);
        assert!((p - Vec2::new(0.0, 2.5)).length() < 1e-6);
        let q = project(Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0), -2.0);
        assert!((q - Vec2::new(-1.0, 1.0)).length() < 1e-6);
    }
}
