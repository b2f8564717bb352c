//! Top-level orchestration of one render
//!
//! Draw order contract, all from one sequence seeded by `config.seed`:
//! 1. palette: base grey, tone shift
//! 2. grid: divisor of the shorter side
//! 3. grid lines: one draw per vertical line, then per horizontal line
//! 4. shapes: per placement, position and variant draws, then style draws per mirror copy
//! 5. connectors: start, length and orientation per line
//!
//! Reordering any of these changes the composition for every seed.

use crate::composition::config::ArtConfig;
use crate::composition::element::{DrawContext, Element, Variant};
use crate::composition::network::{Connector, Segment, place_connectors, plan_grid_lines};
use crate::composition::palette::Palette;
use crate::composition::placement::{place_shapes, shape_count};
use crate::io::configuration::GRAIN_AMPLITUDE;
use crate::io::error::Result;
use crate::math::sequence::SequenceGenerator;
use crate::raster::grain::{self, GrainSource};
use crate::raster::painter::Painter;
use crate::spatial::grid::check_canvas;
use crate::spatial::{LayoutGrid, SymmetryAxes};
use image::RgbaImage;
use tracing::debug;

/// Options that affect painting but not the composition itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Entropy of the grain pass
    pub grain: GrainSource,
    /// Maximum grain offset per channel value
    pub grain_amplitude: f64,
    /// Mark connector endpoints with dots
    pub endpoint_dots: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            grain: GrainSource::default(),
            grain_amplitude: GRAIN_AMPLITUDE,
            endpoint_dots: false,
        }
    }
}

/// Everything one render paints, in painting order
///
/// A pure function of the configuration and canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Colour roles
    pub palette: Palette,
    /// Layout grid
    pub grid: LayoutGrid,
    /// Active mirror axes
    pub axes: SymmetryAxes,
    /// Placed elements before mirroring
    pub shape_count: usize,
    /// Technical grid lines that survived their density draw
    pub grid_lines: Vec<Segment>,
    /// Element drawings, mirror copies included
    pub elements: Vec<Element>,
    /// Connective lines
    pub connectors: Vec<Connector>,
}

impl Composition {
    /// Number of element drawings of a variant
    pub fn count_variant(&self, variant: Variant) -> usize {
        self.elements
            .iter()
            .filter(|element| element.variant() == variant)
            .count()
    }
}

/// Make every random decision of a composition
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the canvas is degenerate
#[tracing::instrument(level = "debug", skip(config), fields(seed = %config.seed))]
pub fn compose(config: &ArtConfig, width: u32, height: u32) -> Result<Composition> {
    config.validate()?;
    check_canvas(width, height)?;

    let mut rng = SequenceGenerator::new(&config.seed);
    let palette = Palette::derive(&mut rng, config.contrast_mode);
    let grid = LayoutGrid::build(width, height, &mut rng)?;
    let grid_lines = plan_grid_lines(&mut rng, &grid, width, height, config.line_density);
    let axes = SymmetryAxes::from_symmetry(config.symmetry);

    let context = DrawContext {
        palette: &palette,
        grid,
        complexity: config.complexity,
        line_density: config.line_density,
    };
    let elements = place_shapes(
        &mut rng,
        &context,
        width,
        height,
        config.circle_emphasis,
        axes,
    );
    let connectors = place_connectors(&mut rng, &grid, width, height, config.complexity, axes);

    debug!(
        dark = palette.is_dark(),
        cell_size = grid.cell_size,
        grid_lines = grid_lines.len(),
        elements = elements.len(),
        connectors = connectors.len(),
        "composed"
    );

    Ok(Composition {
        width,
        height,
        palette,
        grid,
        axes,
        shape_count: shape_count(config.complexity),
        grid_lines,
        elements,
        connectors,
    })
}

/// Compose and paint into a caller-supplied buffer, then apply grain
///
/// The buffer's dimensions are the canvas dimensions. Returns the painted composition.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the buffer is degenerate
pub fn render_into(
    image: &mut RgbaImage,
    config: &ArtConfig,
    options: &RenderOptions,
) -> Result<Composition> {
    let composition = compose(config, image.width(), image.height())?;

    Painter::new(image)
        .with_endpoint_dots(options.endpoint_dots)
        .paint(&composition)?;
    grain::finish(image, options.grain, &config.seed, options.grain_amplitude);

    Ok(composition)
}

/// Render a new image of the given size
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the canvas is degenerate
pub fn render(
    config: &ArtConfig,
    width: u32,
    height: u32,
    options: &RenderOptions,
) -> Result<RgbaImage> {
    check_canvas(width, height)?;
    let mut image = RgbaImage::new(width, height);
    render_into(&mut image, config, options)?;
    Ok(image)
}
