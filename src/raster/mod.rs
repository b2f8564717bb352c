//! Software rasterisation
//!
//! This module contains:
//! - Anti-aliased vector primitives rendered with `vello_cpu`
//! - The painter that replays a composition in layer order
//! - The grain finishing pass

/// Drawing surface and readback into `RgbaImage`
pub mod canvas;
/// Per-pixel grain finish
pub mod grain;
/// Layered painting of a composition
pub mod painter;

pub use canvas::Canvas;
pub use grain::GrainSource;
pub use painter::Painter;
