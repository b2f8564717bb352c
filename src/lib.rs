//! Seeded generator for constructivist-style geometric compositions
//!
//! A string seed drives a small deterministic sequence generator that decides the palette,
//! the layout grid, every shape and every connecting line. The resulting display list is
//! painted onto an RGBA buffer at any resolution and finished with a grain pass.

#![forbid(unsafe_code)]

/// Display-list generation: palette, elements, connectors and the top-level pipeline
pub mod composition;
/// Input/output operations, configuration and error handling
pub mod io;
/// Deterministic pseudo-random sequence
pub mod math;
/// Software rasterisation of compositions and the grain finish
pub mod raster;
/// Grid geometry and symmetry mirroring
pub mod spatial;

pub use composition::config::{ArtConfig, AspectRatio};
pub use composition::pipeline::{RenderOptions, compose, render, render_into};
pub use io::error::{ArtError, Result};
