//! Composition generation
//!
//! Every random decision of a render is made here, in one fixed order, and recorded into a
//! [`pipeline::Composition`] display list that the rasteriser paints afterwards.

/// Composition parameters and canvas dimension resolution
pub mod config;
/// Per-element style and variant decisions
pub mod element;
/// Technical grid lines and the connective line network
pub mod network;
/// Palette derivation
pub mod palette;
/// Top-level orchestration of draws, painting and grain
pub mod pipeline;
/// Shape placement with symmetry mirroring
pub mod placement;
