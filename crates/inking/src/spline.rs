//! Catmull-Rom flattening for curves drawn through coarse control points.
//!
//! Curve tools collect a handful of control points and need the dense,
//! regularly spaced samples the resampler expects. A uniform Catmull-Rom
//! spline passes through every control point; flattening it at a fixed
//! per-segment step and pre-smoothing the result with
//! [`crate::simplify::simplify`] produces a clean input polyline.

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SplineError {
    #[error("spline needs at least two control points, got {0}")]
    TooFewControlPoints(usize),
    #[error("samples per segment must be non-zero")]
    ZeroSampleRate,
}

/// Evaluate one uniform Catmull-Rom segment at `t` in `0..=1`.
///
/// P(t) = 0.5 * ((2 P1) + (-P0 + P2) t + (2 P0 - 5 P1 + 4 P2 - P3) t^2
///        + (-P0 + 3 P1 - 3 P2 + P3) t^3)
fn catmull_rom_segment(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;

    let c0 = p1 * 2.0;
    let c1 = p2 - p0;
    let c2 = p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3;
    let c3 = p1 * 3.0 - p0 - p2 * 3.0 + p3;

    (c0 + c1 * t + c2 * t2 + c3 * t3) * 0.5
}

/// Flatten a Catmull-Rom spline through `control` into dense samples,
/// `samples_per_segment` per control-point span. Endpoints are clamped by
/// phantom duplication, so the result passes through every control point
/// and starts and ends exactly on the first and last.
pub fn flatten(control: &[Vec2], samples_per_segment: usize) -> Result<Vec<Vec2>, SplineError> {
    if control.len() < 2 {
        return Err(SplineError::TooFewControlPoints(control.len()));
    }
    if samples_per_segment == 0 {
        return Err(SplineError::ZeroSampleRate);
    }

    let last = control.len() - 1;
    let mut out = Vec::with_capacity(last * samples_per_segment + 1);
    out.push(control[0]);

    for seg in 0..last {
        let p0 = control[seg.saturating_sub(1)];
        let p1 = control[seg];
        let p2 = control[seg + 1];
        let p3 = control[(seg + 2).min(last)];
        for step in 1..=samples_per_segment {
            let t = step as f32 / samples_per_segment as f32;
            out.push(catmull_rom_segment(p0, p1, p2, p3, t));
        }
    }

    Ok(out)
}
