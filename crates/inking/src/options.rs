use serde::{Deserialize, Serialize};

/// A scalar easing function mapping a normalized `0..=1` value onto an
/// eased `0..=1` value. Must be monotonic.
pub type Easing = fn(f32) -> f32;

/// Identity easing.
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-out, `t(2 - t)`. Default taper easing at the stroke start.
pub fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Cubic ease-out, `(t - 1)^3 + 1`. Default taper easing at the stroke end.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t + 1.0
}

fn default_easing() -> Easing {
    linear
}

fn default_taper_easing() -> Easing {
    ease_out_quad
}

/// Taper behavior for one end of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Taper {
    /// No taper.
    #[default]
    None,
    /// Taper over the larger of the stroke size and the total length.
    Auto,
    /// Taper over an explicit distance in canvas units.
    Distance(f32),
}

impl Taper {
    /// The taper distance for a stroke of the given size and total length.
    pub(crate) fn distance(self, size: f32, total_length: f32) -> f32 {
        match self {
            Taper::None => 0.0,
            Taper::Auto => size.max(total_length),
            Taper::Distance(d) => d,
        }
    }
}

/// Cap and taper configuration for one end of a stroke.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapOptions {
    /// Round cap when true, flat when false. Ignored while tapering.
    pub cap: bool,
    /// Progressive narrowing of the radius toward this end.
    pub taper: Taper,
    /// Easing applied to the normalized taper factor.
    ///
    /// Function pointers are not persisted; deserialized presets fall back
    /// to [`ease_out_quad`].
    #[serde(skip, default = "default_taper_easing")]
    pub easing: Easing,
}

impl Default for CapOptions {
    fn default() -> Self {
        Self {
            cap: true,
            taper: Taper::None,
            easing: ease_out_quad,
        }
    }
}

/// Configuration for one stroke-to-outline pass. Immutable per call; the
/// caller reuses one value across pointer-move events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// Base stroke diameter in canvas units. Must be positive; the outline
    /// builder returns an empty polygon otherwise.
    pub size: f32,
    /// How strongly pressure affects the radius, typically `-1..=1`.
    /// Zero disables pressure entirely (flat `size / 2` radius).
    pub thinning: f32,
    /// Minimum-spacing factor for outline point decimation: consecutive
    /// boundary points closer than `size * smoothing` are merged.
    pub smoothing: f32,
    /// Resampling interpolation strength in `0..=1`. Higher values pull
    /// new points harder toward previously accepted points.
    pub streamline: f32,
    /// Easing applied to normalized pressure when computing the radius.
    ///
    /// Function pointers are not persisted; deserialized presets fall back
    /// to [`linear`].
    #[serde(skip, default = "default_easing")]
    pub easing: Easing,
    /// Derive pressure from pointer velocity instead of trusting input.
    pub simulate_pressure: bool,
    /// Cap and taper at the stroke start.
    pub start: CapOptions,
    /// Cap and taper at the stroke end.
    pub end: CapOptions,
    /// Whether this is the final, completed stroke rather than an
    /// in-progress preview. Completed strokes end exactly where the
    /// pointer was released.
    pub last: bool,
    /// RGBA color carried through untouched for the downstream renderer.
    pub color: [f32; 4],
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: 16.0,
            thinning: 0.0,
            smoothing: 0.5,
            streamline: 0.5,
            easing: linear,
            simulate_pressure: false,
            start: CapOptions::default(),
            end: CapOptions {
                cap: true,
                taper: Taper::None,
                easing: ease_out_cubic,
            },
            last: false,
            color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
