//! Outline construction: resampled stroke points to the closed boundary
//! polygon of a variable-width stroke.
//!
//! The boundary is built as two offset point lists, one per side of the
//! stroke's spine, then assembled as left side, end cap, reversed right
//! side, start cap. That winding is what closes the polygon into a single
//! non-self-intersecting loop.

use glam::Vec2;
use tracing::debug;

use crate::constants::{
    CAP_SEGMENTS, END_CAP_STEPS, END_NOISE_DISTANCE, FIXED_PI, MIN_RADIUS, PRESSURE_WINDOW,
    RATE_OF_PRESSURE_CHANGE,
};
use crate::geom::{perp_cw, project, rotate_around};
use crate::options::{Easing, StrokeOptions};
use crate::types::{Outline, StrokePoint};

/// Radius for a given pressure: the base size scaled by the eased,
/// thinning-weighted pressure.
fn stroke_radius(size: f32, thinning: f32, pressure: f32, easing: Easing) -> f32 {
    size * easing(0.5 - thinning * (0.5 - pressure))
}

/// One simulated-pressure step: nudge the previous pressure toward a
/// target derived from how far the pointer travelled relative to the
/// stroke size. Fast movement thins the stroke, slow movement fattens it.
fn simulate_pressure_step(prev: f32, distance: f32, size: f32) -> f32 {
    let sp = (distance / size).min(1.0);
    let rp = (1.0 - sp).min(1.0);
    (prev + (rp - prev) * (sp * RATE_OF_PRESSURE_CHANGE)).min(1.0)
}

/// Build the closed outline polygon of a variable-width stroke.
///
/// Degenerate input (no points, non-positive size) yields an empty
/// polygon. A single-point stroke becomes a circular dot. All other
/// geometric edge cases are absorbed by clamping rather than signaled.
pub fn build_outline(points: &[StrokePoint], options: &StrokeOptions) -> Outline {
    if points.is_empty() || options.size <= 0.0 {
        return Outline::default();
    }

    let size = options.size;
    let last_index = points.len() - 1;
    let total_length = points[last_index].running_length;

    let taper_start = options.start.taper.distance(size, total_length);
    let taper_end = options.end.taper.distance(size, total_length);

    // Squared minimum spacing between emitted offset points on one side.
    let min_distance_sq = (size * options.smoothing).powi(2);

    // Seed the running pressure from the first few points so a heavy
    // first sample doesn't fatten the stroke start.
    let mut prev_pressure = points
        .iter()
        .take(PRESSURE_WINDOW)
        .fold(points[0].pressure, |acc, curr| {
            let pressure = if options.simulate_pressure {
                simulate_pressure_step(acc, curr.distance, size)
            } else {
                curr.pressure
            };
            (acc + pressure) / 2.0
        });

    // Running radius, seeded from the final point's pressure.
    let mut radius = stroke_radius(
        size,
        options.thinning,
        points[last_index].pressure,
        options.easing,
    );
    let mut first_radius: Option<f32> = None;

    let mut left_pts: Vec<Vec2> = Vec::new();
    let mut right_pts: Vec<Vec2> = Vec::new();

    // Previous accepted offset point on each side, for density control.
    let mut pl = points[0].point;
    let mut pr = pl;
    let mut prev_vector = points[0].vector;
    // Set when a corner fan was just drawn, so two consecutive sharp
    // points don't both get a fan.
    let mut is_prev_point_sharp_corner = false;

    for i in 0..points.len() {
        let StrokePoint {
            point,
            vector,
            distance,
            running_length,
            ..
        } = points[i];
        let mut pressure = points[i].pressure;

        // Interior points crowding the very end of the line are noise.
        if i < last_index && total_length - running_length < END_NOISE_DISTANCE {
            continue;
        }

        // Radius from real or simulated pressure, or a flat half-size.
        if options.thinning != 0.0 {
            if options.simulate_pressure {
                pressure = simulate_pressure_step(prev_pressure, distance, size);
            }
            radius = stroke_radius(size, options.thinning, pressure, options.easing);
        } else {
            radius = size / 2.0;
        }

        if first_radius.is_none() {
            first_radius = Some(radius);
        }

        // Taper factors near either end, eased; the tighter one wins.
        let ts = if running_length < taper_start {
            (options.start.easing)(running_length / taper_start)
        } else {
            1.0
        };
        let te = if total_length - running_length < taper_end {
            (options.end.easing)((total_length - running_length) / taper_end)
        } else {
            1.0
        };
        radius = (radius * ts.min(te)).max(MIN_RADIUS);

        let next_vector = if i < last_index {
            points[i + 1].vector
        } else {
            vector
        };
        let next_dot = if i < last_index {
            vector.dot(next_vector)
        } else {
            1.0
        };
        let prev_dot = vector.dot(prev_vector);

        // A dot product below zero on either side means the path turns
        // through more than a right angle here. Projected offsets would
        // cross, so sweep a rounded fan around the corner instead.
        let is_point_sharp_corner = prev_dot < 0.0 && !is_prev_point_sharp_corner;
        let is_next_point_sharp_corner = next_dot < 0.0;

        if is_point_sharp_corner || is_next_point_sharp_corner {
            let offset = perp_cw(prev_vector) * radius;
            for step in 0..=CAP_SEGMENTS {
                let t = step as f32 / CAP_SEGMENTS as f32;
                let tl = rotate_around(point - offset, point, FIXED_PI * t);
                left_pts.push(tl);
                let tr = rotate_around(point + offset, point, -FIXED_PI * t);
                right_pts.push(tr);
                if step == CAP_SEGMENTS {
                    pl = tl;
                    pr = tr;
                }
            }
            if is_next_point_sharp_corner {
                is_prev_point_sharp_corner = true;
            }
            continue;
        }

        is_prev_point_sharp_corner = false;

        // The last point closes both sides with a plain perpendicular.
        if i == last_index {
            let offset = perp_cw(vector) * radius;
            left_pts.push(point - offset);
            right_pts.push(point + offset);
            continue;
        }

        // Regular point: offset along the direction blended toward the
        // next vector, keeping only points far enough from the previous
        // accepted point on their side.
        let offset = perp_cw(next_vector.lerp(vector, next_dot)) * radius;

        let tl = point - offset;
        if i <= 1 || pl.distance_squared(tl) > min_distance_sq {
            left_pts.push(tl);
            pl = tl;
        }

        let tr = point + offset;
        if i <= 1 || pr.distance_squared(tr) > min_distance_sq {
            right_pts.push(tr);
            pr = tr;
        }

        prev_pressure = pressure;
        prev_vector = vector;
    }

    let first_point = points[0].point;
    let last_point = if points.len() > 1 {
        points[last_index].point
    } else {
        first_point + Vec2::ONE
    };

    let mut start_cap: Vec<Vec2> = Vec::new();
    let mut end_cap: Vec<Vec2> = Vec::new();

    if points.len() == 1 {
        // A tap. Unless it is the in-progress start of a tapered stroke
        // (which draws nothing yet), emit a circular dot around the point.
        if !(taper_start > 0.0 || taper_end > 0.0) || options.last {
            let dot_radius = first_radius.unwrap_or(radius);
            let start = project(
                first_point,
                perp_cw(first_point - last_point).normalize_or_zero(),
                -dot_radius,
            );
            let mut dot_pts = Vec::with_capacity(CAP_SEGMENTS as usize);
            for step in 1..=CAP_SEGMENTS {
                let t = step as f32 / CAP_SEGMENTS as f32;
                dot_pts.push(rotate_around(start, first_point, FIXED_PI * 2.0 * t));
            }
            return Outline::from_points(dot_pts);
        }
    } else {
        // Start cap. A tapered start comes to a point on its own.
        if taper_start > 0.0 {
            // noop
        } else if options.start.cap {
            // Round: sweep the first right point around the start point
            // over to the first left point.
            for step in 1..=CAP_SEGMENTS {
                let t = step as f32 / CAP_SEGMENTS as f32;
                start_cap.push(rotate_around(right_pts[0], first_point, FIXED_PI * t));
            }
        } else {
            // Flat: a shallow rectangle across the stroke start.
            let corners_vector = left_pts[0] - right_pts[0];
            let offset_a = corners_vector * 0.5;
            let offset_b = corners_vector * 0.51;
            start_cap.extend([
                first_point - offset_a,
                first_point - offset_b,
                first_point + offset_b,
                first_point + offset_a,
            ]);
        }

        // End cap.
        let direction = perp_cw(-points[last_index].vector);
        if taper_end > 0.0 {
            // Tapered end: collapse to the spine's last point.
            end_cap.push(last_point);
        } else if options.end.cap {
            // Round: a denser 3*pi sweep, which stays clean even when the
            // stroke ends in a sharp turn.
            let start = project(last_point, direction, radius);
            for step in 1..END_CAP_STEPS {
                let t = step as f32 / END_CAP_STEPS as f32;
                end_cap.push(rotate_around(start, last_point, FIXED_PI * 3.0 * t));
            }
        } else {
            end_cap.extend([
                last_point + direction * radius,
                last_point + direction * (radius * 0.99),
                last_point - direction * (radius * 0.99),
                last_point - direction * radius,
            ]);
        }
    }

    let mut polygon = left_pts;
    polygon.extend(end_cap);
    polygon.extend(right_pts.into_iter().rev());
    polygon.extend(start_cap);

    debug!(
        stroke_points = points.len(),
        outline_points = polygon.len(),
        "built stroke outline"
    );
    Outline::from_points(polygon)
}
