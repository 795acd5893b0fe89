use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A raw pointer sample as delivered by the host input layer.
///
/// Samples arrive in pointer order and are owned by the caller for the
/// duration of one pipeline call. Positions must be finite; the pipeline
/// does not guard against NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    /// Position in canvas coordinates.
    pub position: Vec2,
    /// Pen pressure in `0..=1`, or `None` when the device reports none.
    pub pressure: Option<f32>,
}

impl InputSample {
    /// A sample with no pressure information.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            pressure: None,
        }
    }

    /// A sample with an explicit pressure reading.
    pub fn with_pressure(x: f32, y: f32, pressure: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            pressure: Some(pressure),
        }
    }

    /// Pressure with absent or negative readings normalized to 0.5.
    pub(crate) fn effective_pressure(&self) -> f32 {
        match self.pressure {
            Some(p) if p >= 0.0 => p,
            _ => 0.5,
        }
    }
}

/// A resampled stroke point with derived motion data.
#[derive(Debug, Clone, Copy)]
pub struct StrokePoint {
    /// Adjusted position in canvas coordinates.
    pub point: Vec2,
    /// Pressure in `0..=1` (0.5 when the input carried none).
    pub pressure: f32,
    /// Unit direction from this point back toward the previous accepted
    /// point. The first point inherits the second point's vector; a
    /// single-point stroke gets a zero vector.
    pub vector: Vec2,
    /// Distance from the previous accepted point.
    pub distance: f32,
    /// Cumulative distance from the stroke start. Non-decreasing.
    pub running_length: f32,
}

/// A closed outline polygon, wound left boundary forward, end cap, right
/// boundary reversed, start cap. The last point implicitly connects back
/// to the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<Vec2>,
}

impl Outline {
    pub(crate) fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// The polygon's points in winding order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Consume the outline, yielding its points.
    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }

    /// Number of points in the polygon.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = *self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some((min, max))
    }

    /// Raw vertex bytes for GPU upload: two little-endian f32 per point.
    pub fn as_vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
}
