//! Stroke-to-outline pipeline for the sketching canvas.
//!
//! Turns a raw, possibly noisy, pressure-tagged sequence of pointer
//! samples into the smooth, closed polygon of a variable-width stroke,
//! ready for the renderer to triangulate and fill:
//! - [`resample::resample`] - raw samples to evenly characterized stroke points
//! - [`outline::build_outline`] - stroke points to the closed boundary polygon
//! - [`simplify::simplify`] - Ramer-Douglas-Peucker polyline reduction
//! - [`spline`] - Catmull-Rom flattening for curves drawn through control points
//! - [`pipeline`] - end-to-end conveniences called per pointer-move
//!
//! Every routine is a pure function over its inputs; nothing persists
//! between calls except the [`options::StrokeOptions`] the caller reuses.

pub mod constants;
pub mod geom;
pub mod options;
pub mod outline;
pub mod pipeline;
pub mod resample;
pub mod simplify;
pub mod spline;
pub mod types;

pub use constants::*;
pub use geom::*;
pub use options::*;
pub use outline::*;
pub use pipeline::*;
pub use resample::*;
pub use simplify::*;
pub use spline::*;
pub use types::*;
