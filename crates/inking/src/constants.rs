/// Pi plus a hair. Swept caps and corner fans rotate through this so the
/// final fan point lands just past the opposite offset point and the loop
/// closes without a visible seam.
pub const FIXED_PI: f32 = std::f32::consts::PI + 0.0001;

/// How quickly simulated pressure responds to changes in pointer speed.
/// Empirically tuned default, not an invariant.
pub const RATE_OF_PRESSURE_CHANGE: f32 = 0.275;

/// Segments in a rounded corner fan, a round start cap, and a dot polygon.
pub const CAP_SEGMENTS: u32 = 13;

/// Steps in the round end cap sweep. The end cap rotates through 3*pi,
/// denser than the start cap so sharp end turns don't leave artifacts.
pub const END_CAP_STEPS: u32 = 29;

/// Radius floor applied after tapering, to avoid zero or negative radii.
pub const MIN_RADIUS: f32 = 0.01;

/// Number of leading stroke points averaged to seed the running pressure,
/// so a heavy first sample doesn't fatten the stroke start.
pub const PRESSURE_WINDOW: usize = 10;

/// Interior stroke points closer than this to the stroke's total length
/// are dropped as end-of-line noise.
pub const END_NOISE_DISTANCE: f32 = 3.0;
