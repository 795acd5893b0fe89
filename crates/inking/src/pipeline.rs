//! End-to-end conveniences over the pipeline stages.
//!
//! The expected caller pattern is to recompute the full outline on every
//! pointer-move event while a stroke is active, then once more with
//! `options.last` set when the pointer lifts. Each call here is a pure,
//! synchronous computation; nothing is shared between calls.

use glam::Vec2;
use tracing::debug;

use crate::options::StrokeOptions;
use crate::outline::build_outline;
use crate::resample::resample;
use crate::simplify::simplify;
use crate::spline::{SplineError, flatten};
use crate::types::{InputSample, Outline};

/// Full pipeline for raw pointer samples: resample, then build the closed
/// outline polygon.
pub fn stroke_outline(samples: &[InputSample], options: &StrokeOptions) -> Outline {
    let stroke_points = resample(samples, options);
    debug!(
        samples = samples.len(),
        stroke_points = stroke_points.len(),
        "stroke resampled"
    );
    build_outline(&stroke_points, options)
}

/// Outline a curve drawn through coarse control points: evaluate a
/// Catmull-Rom spline at `samples_per_segment` steps per span, pre-smooth
/// the dense result within `smooth_tolerance`, then run the regular
/// pipeline with a constant `pressure`.
pub fn spline_stroke_outline(
    control: &[Vec2],
    pressure: f32,
    samples_per_segment: usize,
    smooth_tolerance: f32,
    options: &StrokeOptions,
) -> Result<Outline, SplineError> {
    let dense = flatten(control, samples_per_segment)?;
    let smoothed = simplify(&dense, smooth_tolerance);
    debug!(
        control = control.len(),
        dense = dense.len(),
        smoothed = smoothed.len(),
        "spline flattened"
    );
    let samples: Vec<InputSample> = smoothed
        .iter()
        .map(|&p| InputSample::with_pressure(p.x, p.y, pressure))
        .collect();
    Ok(stroke_outline(&samples, options))
}

/// Compact a finished outline for storage or transmission.
pub fn compact_outline(outline: Outline, tolerance: f32) -> Outline {
    let compacted = simplify(outline.points(), tolerance);
    Outline::from_points(compacted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CapOptions;

    #[test]
    fn test_stroke_outline_end_to_end() {
        let options = StrokeOptions {
            size: 10.0,
            streamline: 0.0,
            last: true,
            start: CapOptions {
                cap: false,
                ..Default::default()
            },
            end: CapOptions {
                cap: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let samples: Vec<InputSample> = (0..5)
            .map(|i| InputSample::with_pressure(i as f32 * 10.0, 0.0, 1.0))
            .collect();
        let outline = stroke_outline(&samples, &options);
        let (min, max) = outline.bounds().unwrap();
        assert!((min.x - 0.0).abs() < 0.01 && (max.x - 40.0).abs() < 0.01);
        assert!(min.y >= -5.11 && max.y <= 5.11);
    }

    #[test]
    fn test_tap_yields_dot() {
        let options = StrokeOptions {
            size: 4.0,
            ..Default::default()
        };
        let outline = stroke_outline(&[InputSample::new(5.0, 5.0)], &options);
        assert_eq!(outline.len(), 13);
    }

    #[test]
    fn test_empty_input_yields_empty_outline() {
        assert!(stroke_outline(&[], &StrokeOptions::default()).is_empty());
    }

    #[test]
    fn test_spline_stroke_outline() {
        let control = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 30.0),
            Vec2::new(80.0, 0.0),
            Vec2::new(120.0, 30.0),
        ];
        let options = StrokeOptions {
            size: 6.0,
            last: true,
            ..Default::default()
        };
        let outline = spline_stroke_outline(&control, 0.5, 16, 0.25, &options).unwrap();
        assert!(!outline.is_empty());
        // The outline hugs the curve: it spans the control polygon's
        // extent plus at most a cap radius.
        let (min, max) = outline.bounds().unwrap();
        assert!(min.x > -4.0 && max.x < 124.0);
    }

    #[test]
    fn test_spline_stroke_outline_rejects_degenerate_control() {
        let err = spline_stroke_outline(&[Vec2::ZERO], 0.5, 16, 0.25, &StrokeOptions::default());
        assert!(err.is_err());
    }

    #[test]
    fn test_compact_outline_reduces_points() {
        let options = StrokeOptions {
            size: 10.0,
            streamline: 0.0,
            smoothing: 0.05,
            last: true,
            ..Default::default()
        };
        let samples: Vec<InputSample> = (0..40)
            .map(|i| InputSample::new(i as f32 * 4.0, 0.0))
            .collect();
        let outline = stroke_outline(&samples, &options);
        let before = outline.len();
        let compacted = compact_outline(outline, 0.1);
        assert!(compacted.len() < before);
        assert!(compacted.len() >= 4);
    }
}
