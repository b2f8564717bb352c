//! Spatial data structures for composition layout
//!
//! This module contains:
//! - The square-cell layout grid every element snaps to
//! - Symmetry axes and mirrored origin enumeration

/// Layout grid sizing
pub mod grid;
/// Mirroring across canvas midlines
pub mod symmetry;

pub use grid::{LayoutGrid, Point};
pub use symmetry::{Mirror, SymmetryAxes};
