//! Resampling: raw pointer samples to evenly characterized stroke points.

use glam::Vec2;
use tracing::trace;

use crate::options::StrokeOptions;
use crate::types::{InputSample, StrokePoint};

/// Resample raw input samples into stroke points carrying direction,
/// spacing, and cumulative length.
///
/// The output always begins with the raw first sample. Later points are
/// pulled toward the previous accepted point by the streamline factor,
/// except the final point of a completed stroke, which is taken verbatim
/// so the stroke ends exactly where the pointer was released. Points
/// within one stroke diameter of the start are discarded as jitter until
/// the stroke has covered that minimum length; that suppression never
/// applies to the final point of a completed stroke.
pub fn resample(samples: &[InputSample], options: &StrokeOptions) -> Vec<StrokePoint> {
    if samples.is_empty() {
        return Vec::new();
    }

    // Interpolation strength: higher streamline pulls accepted points
    // harder toward the previous one.
    let t = 0.15 + (1.0 - options.streamline) * 0.85;

    let mut pts: Vec<InputSample> = samples.to_vec();

    // A bare two-point segment reads as a dashed fragment once strong
    // tapering applies, so densify it into a five-point chain first.
    if pts.len() == 2 {
        let first = pts[0];
        let last = pts[1];
        pts.truncate(1);
        for i in 1..5 {
            let f = i as f32 / 4.0;
            pts.push(InputSample {
                position: first.position.lerp(last.position, f),
                pressure: Some(
                    first.effective_pressure()
                        + (last.effective_pressure() - first.effective_pressure()) * f,
                ),
            });
        }
    }

    // A single point gets a twin at a diagonal offset so that a direction
    // vector exists and the rest of the pipeline stays count-agnostic.
    if pts.len() == 1 {
        let twin = InputSample {
            position: pts[0].position + Vec2::ONE,
            pressure: pts[0].pressure,
        };
        pts.push(twin);
    }

    // The first stroke point is the raw first sample; its vector is
    // retargeted after the pass.
    let mut prev = StrokePoint {
        point: pts[0].position,
        pressure: pts[0].effective_pressure(),
        vector: Vec2::ONE,
        distance: 0.0,
        running_length: 0.0,
    };
    let mut out: Vec<StrokePoint> = Vec::with_capacity(pts.len());
    out.push(prev);

    let max = pts.len() - 1;
    let is_complete = options.last;
    let mut running_length = 0.0;
    let mut has_reached_minimum_length = false;

    for (i, sample) in pts.iter().enumerate().skip(1) {
        let point = if is_complete && i == max {
            sample.position
        } else {
            prev.point.lerp(sample.position, t)
        };

        // Duplicates contribute nothing.
        if point == prev.point {
            continue;
        }

        let distance = point.distance(prev.point);

        // Only accepted points commit their distance; a skipped point's
        // span is re-measured from the unchanged anchor next iteration.
        if !(is_complete && i == max) && !has_reached_minimum_length {
            if running_length + distance < options.size {
                continue;
            }
            has_reached_minimum_length = true;
        }
        running_length += distance;

        prev = StrokePoint {
            point,
            pressure: sample.effective_pressure(),
            vector: (prev.point - point).normalize_or_zero(),
            distance,
            running_length,
        };
        out.push(prev);
    }

    // The first point has no incoming direction; give it the second's.
    out[0].vector = out.get(1).map_or(Vec2::ZERO, |p| p.vector);

    trace!(raw = samples.len(), resampled = out.len(), "resampled stroke");
    out
}
