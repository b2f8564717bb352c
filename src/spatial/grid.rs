//! Square-cell layout grid covering the canvas
//!
//! The cell size is the base unit of the whole composition: positions snap to it, element
//! sizes are multiples of it and stroke widths may be relative to it. It is derived from
//! the shorter canvas side, so doubling both dimensions doubles every length.

use crate::io::configuration::{GRID_DIVISOR_MAX, GRID_DIVISOR_MIN, MAX_CANVAS_DIMENSION};
use crate::io::error::{Result, degenerate_canvas};
use crate::math::sequence::SequenceGenerator;

/// Point in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing to the right
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset by a vector
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Check that a canvas can hold a composition
///
/// # Errors
///
/// Returns `DegenerateCanvas` when a side is zero or exceeds `MAX_CANVAS_DIMENSION`
pub const fn check_canvas(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION
    {
        return Err(degenerate_canvas(width, height));
    }
    Ok(())
}

/// Grid geometry for one canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGrid {
    /// Side of one square cell in pixels, at least 1
    pub cell_size: u32,
    /// Columns needed to cover the canvas width
    pub cols: u32,
    /// Rows needed to cover the canvas height
    pub rows: u32,
}

impl LayoutGrid {
    /// Size the grid with one draw from the sequence
    ///
    /// The divisor is drawn from `[8, 16)` even when the canvas is too small for it to
    /// matter, so the draw order stays the same for every canvas size.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCanvas` for zero or oversized dimensions
    pub fn build(width: u32, height: u32, rng: &mut SequenceGenerator) -> Result<Self> {
        check_canvas(width, height)?;
        let divisor = rng.range_int(GRID_DIVISOR_MIN, GRID_DIVISOR_MAX);
        Ok(Self::with_divisor(width, height, divisor as u32))
    }

    /// Grid for an explicit divisor of the shorter side
    pub fn with_divisor(width: u32, height: u32, divisor: u32) -> Self {
        let cell_size = (width.min(height) / divisor.max(1)).max(1);
        Self {
            cell_size,
            cols: width.div_ceil(cell_size),
            rows: height.div_ceil(cell_size),
        }
    }

    /// Cell size as a float length
    pub fn unit(&self) -> f64 {
        f64::from(self.cell_size)
    }

    /// Positions of grid lines along one axis, from 0 up to and including `extent`
    pub fn line_positions(&self, extent: u32) -> impl Iterator<Item = f64> {
        (0..=extent)
            .step_by(self.cell_size as usize)
            .map(f64::from)
    }
}
