//! Grid-snapped shape placement with centre bias and symmetry mirroring

use crate::composition::element::{DrawContext, Element, Variant, draw_element};
use crate::io::configuration::{BASE_SHAPE_COUNT, SHAPES_PER_COMPLEXITY};
use crate::math::sequence::SequenceGenerator;
use crate::spatial::{LayoutGrid, Point, SymmetryAxes};

/// Probability that a candidate position is pulled towards the canvas centre
pub const CENTER_BIAS_PROBABILITY: f64 = 0.6;
/// Probability that a non-circle element is a rectangle rather than a node
pub const RECTANGLE_PROBABILITY: f64 = 0.7;
/// Element sizes in cells
pub const SIZE_MULTIPLIERS: [u32; 5] = [1, 2, 3, 4, 6];

/// Number of placed elements, before mirroring
// Unfused so the floor lands on the same side as the plain product and sum
#[allow(clippy::suboptimal_flops)]
pub fn shape_count(complexity: f64) -> usize {
    (BASE_SHAPE_COUNT + complexity * SHAPES_PER_COMPLEXITY).floor() as usize
}

/// Geometry shared by an element and all of its mirror copies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Centre of the original drawing
    pub origin: Point,
    /// Edge length in pixels
    pub size: f64,
    /// Shape family
    pub variant: Variant,
}

/// Draw one placement: position, optional centre bias, size, variant
///
/// The uniform grid position is always drawn first, even when the centre bias replaces it.
pub fn place_shape(
    rng: &mut SequenceGenerator,
    grid: &LayoutGrid,
    width: u32,
    height: u32,
    circle_emphasis: f64,
) -> Placement {
    let unit = grid.unit();
    let cols = f64::from(grid.cols);
    let rows = f64::from(grid.rows);

    let mut x = rng.range_int(0, i64::from(grid.cols)) as f64 * unit;
    let mut y = rng.range_int(0, i64::from(grid.rows)) as f64 * unit;

    if rng.boolean(CENTER_BIAS_PROBABILITY) {
        let center_x = f64::from(width) / 2.0;
        let center_y = f64::from(height) / 2.0;
        x = (rng.range_floor(-cols / 4.0, cols / 4.0) as f64).mul_add(unit, center_x);
        y = (rng.range_floor(-rows / 4.0, rows / 4.0) as f64).mul_add(unit, center_y);
    }

    let size = unit * f64::from(rng.pick_from(&SIZE_MULTIPLIERS));

    let variant = if rng.next() < circle_emphasis {
        Variant::Circle
    } else if rng.boolean(RECTANGLE_PROBABILITY) {
        Variant::Rectangle
    } else {
        Variant::ComplexNode
    };

    Placement {
        origin: Point::new(x, y),
        size,
        variant,
    }
}

/// Place every shape and draw it once per mirror copy
///
/// Each copy makes its own style draws right after the previous copy, so the output order
/// is placement by placement, copies in [`SymmetryAxes::copies`] order.
pub fn place_shapes(
    rng: &mut SequenceGenerator,
    context: &DrawContext<'_>,
    width: u32,
    height: u32,
    circle_emphasis: f64,
    axes: SymmetryAxes,
) -> Vec<Element> {
    let count = shape_count(context.complexity);
    let copies = axes.copies();
    let mut elements = Vec::with_capacity(count * copies.len());

    for _ in 0..count {
        let placement = place_shape(rng, &context.grid, width, height, circle_emphasis);
        for &mirror in &copies {
            let origin = mirror.apply(placement.origin, f64::from(width), f64::from(height));
            elements.push(draw_element(
                rng,
                context,
                origin,
                placement.size,
                placement.variant,
                mirror,
            ));
        }
    }

    elements
}
