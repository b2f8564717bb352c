//! Straight-line layers: the technical grid and the connective network

use crate::io::configuration::LINES_PER_COMPLEXITY;
use crate::math::sequence::SequenceGenerator;
use crate::spatial::{LayoutGrid, Mirror, Point, SymmetryAxes};

/// Straight stroke between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point
    pub from: Point,
    /// End point
    pub to: Point,
}

impl Segment {
    /// Create a segment
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }

    /// Whether the segment runs parallel to the y axis
    #[allow(clippy::float_cmp)]
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    /// Whether the segment runs parallel to the x axis
    #[allow(clippy::float_cmp)]
    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }
}

/// One connector and its mirror across the vertical midline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Segment as placed
    pub segment: Segment,
    /// Reflected copy when vertical symmetry is active
    pub mirrored: Option<Segment>,
}

impl Connector {
    /// Stroked segments of this connector
    pub fn segments(&self) -> impl Iterator<Item = Segment> {
        std::iter::once(self.segment).chain(self.mirrored)
    }
}

/// Decide which grid lines are drawn
///
/// One Bernoulli draw per vertical line from left to right, then one per horizontal line
/// from top to bottom. Lines span the full canvas.
pub fn plan_grid_lines(
    rng: &mut SequenceGenerator,
    grid: &LayoutGrid,
    width: u32,
    height: u32,
    line_density: f64,
) -> Vec<Segment> {
    let w = f64::from(width);
    let h = f64::from(height);
    let mut lines = Vec::new();

    for x in grid.line_positions(width) {
        if rng.boolean(line_density) {
            lines.push(Segment::new(Point::new(x, 0.0), Point::new(x, h)));
        }
    }
    for y in grid.line_positions(height) {
        if rng.boolean(line_density) {
            lines.push(Segment::new(Point::new(0.0, y), Point::new(w, y)));
        }
    }

    lines
}

/// Number of connector lines
pub fn connector_count(complexity: f64) -> usize {
    (complexity * LINES_PER_COMPLEXITY).floor() as usize
}

/// Place the circuit-style connectors
///
/// Per line: start column, start row, length in cells from `[2, 8)`, orientation.
/// Connectors mirror across the vertical midline only.
pub fn place_connectors(
    rng: &mut SequenceGenerator,
    grid: &LayoutGrid,
    width: u32,
    height: u32,
    complexity: f64,
    axes: SymmetryAxes,
) -> Vec<Connector> {
    let unit = grid.unit();
    let w = f64::from(width);
    let h = f64::from(height);

    (0..connector_count(complexity))
        .map(|_| {
            let x1 = rng.range_int(0, i64::from(grid.cols)) as f64 * unit;
            let y1 = rng.range_int(0, i64::from(grid.rows)) as f64 * unit;
            let length = unit * rng.range_int(2, 8) as f64;
            let from = Point::new(x1, y1);
            let to = if rng.coin() {
                from.offset(0.0, length)
            } else {
                from.offset(length, 0.0)
            };

            let segment = Segment::new(from, to);
            let mirrored = axes.vertical.then(|| {
                Segment::new(
                    Mirror::Vertical.apply(from, w, h),
                    Mirror::Vertical.apply(to, w, h),
                )
            });
            Connector { segment, mirrored }
        })
        .collect()
}
