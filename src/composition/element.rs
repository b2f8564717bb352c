//! Drawable elements and the per-drawing style decisions
//!
//! A placed element is drawn once per active mirror copy. Each drawing re-rolls its own
//! style (hollow, stroke width, fill) and variant details, so mirrored copies share
//! geometry but not appearance.

use crate::composition::palette::Palette;
use crate::math::sequence::SequenceGenerator;
use crate::spatial::{LayoutGrid, Mirror, Point};
use image::Rgba;

/// Probability that a drawing is stroked only
pub const HOLLOW_PROBABILITY: f64 = 0.6;
/// Probability that a circle is drawn as a partial arc
pub const ARC_PROBABILITY: f64 = 0.4;

const ARC_STARTS: [u32; 4] = [0, 90, 180, 270];
const ARC_SWEEPS: [u32; 3] = [90, 180, 270];

/// Shape family of a placed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Full circle or partial arc, optionally with concentric rings
    Circle,
    /// Centred square, optionally hatched
    Rectangle,
    /// Small disk with a single stem
    ComplexNode,
}

/// Partial circle, angles in degrees clockwise from the positive x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcSpan {
    /// Start angle, a multiple of 90
    pub start_degrees: u32,
    /// Angular extent: 90, 180 or 270
    pub sweep_degrees: u32,
}

impl ArcSpan {
    /// Start angle in radians
    pub fn start(self) -> f64 {
        f64::from(self.start_degrees).to_radians()
    }

    /// Angular extent in radians
    pub fn sweep(self) -> f64 {
        f64::from(self.sweep_degrees).to_radians()
    }
}

/// Axis direction of a node stem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Positive x
    Right,
    /// Negative x
    Left,
    /// Positive y
    Down,
    /// Negative y
    Up,
}

impl Direction {
    /// Directions in draw order
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    /// Unit vector in canvas coordinates
    pub const fn vector(self) -> (f64, f64) {
        match self {
            Self::Right => (1.0, 0.0),
            Self::Left => (-1.0, 0.0),
            Self::Down => (0.0, 1.0),
            Self::Up => (0.0, -1.0),
        }
    }
}

/// Geometry and variant details of one drawing, relative to its origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Circle centred on the origin
    Circle {
        /// Outer radius
        radius: f64,
        /// Partial arc, or `None` for a full circle
        arc: Option<ArcSpan>,
        /// Ring subdivision; rings sit at `radius * (1 - i / steps)` for `i` in `1..steps`
        ring_steps: Option<u32>,
    },
    /// Axis-aligned rectangle centred on the origin
    Rectangle {
        /// Full width
        width: f64,
        /// Full height
        height: f64,
        /// Spacing of vertical hatching lines in pixels
        hatch_step: Option<u32>,
    },
    /// Disk on the origin with one stem
    ComplexNode {
        /// Stem reach along x
        width: f64,
        /// Stem reach along y
        height: f64,
        /// Radius of the filled disk
        node_radius: f64,
        /// Stem direction
        direction: Direction,
    },
}

impl Shape {
    /// Shape family
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Circle { .. } => Variant::Circle,
            Self::Rectangle { .. } => Variant::Rectangle,
            Self::ComplexNode { .. } => Variant::ComplexNode,
        }
    }

    /// Radii of the concentric rings inside a circle, outermost first
    pub fn ring_radii(&self) -> Vec<f64> {
        match *self {
            Self::Circle {
                radius,
                ring_steps: Some(steps),
                ..
            } => (1..steps)
                .map(|i| radius * (1.0 - f64::from(i) / f64::from(steps)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Horizontal offsets of hatching lines, from the left edge towards the right
    pub fn hatch_offsets(&self) -> Vec<f64> {
        let Self::Rectangle {
            width,
            hatch_step: Some(step),
            ..
        } = *self
        else {
            return Vec::new();
        };

        let step = f64::from(step.max(1));
        let half = width / 2.0;
        std::iter::successors(Some(-half), |offset| Some(offset + step))
            .take_while(|offset| *offset < half)
            .collect()
    }
}

/// Appearance of one drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Stroke only, no fill
    pub hollow: bool,
    /// Outline stroke width in pixels
    pub stroke_width: f64,
    /// Fill colour when not hollow
    pub fill: Rgba<u8>,
}

/// One drawing of a placed element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Centre of the drawing in canvas pixels
    pub origin: Point,
    /// Which mirror copy this drawing is
    pub mirror: Mirror,
    /// Edge length shared by every copy, a multiple of the cell size
    pub size: f64,
    /// Appearance
    pub style: Style,
    /// Geometry and variant details
    pub shape: Shape,
}

impl Element {
    /// Shape family of this drawing
    pub const fn variant(&self) -> Variant {
        self.shape.variant()
    }
}

/// Inputs shared by every drawing of one composition
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    /// Composition palette
    pub palette: &'a Palette,
    /// Layout grid
    pub grid: LayoutGrid,
    /// Probability of concentric rings in circles
    pub complexity: f64,
    /// Probability of hatching in rectangles
    pub line_density: f64,
}

/// Make the style and variant draws for one drawing of an element
///
/// Draw order: hollow, stroke width, fill colour, then the variant details.
pub fn draw_element(
    rng: &mut SequenceGenerator,
    context: &DrawContext<'_>,
    origin: Point,
    size: f64,
    variant: Variant,
    mirror: Mirror,
) -> Element {
    let unit = context.grid.unit();
    let hollow = rng.boolean(HOLLOW_PROBABILITY);
    let stroke_width = rng.pick_from(&[1.0, 2.0, 4.0, unit / 8.0]);
    let fill = if rng.coin() {
        context.palette.secondary
    } else {
        context.palette.accent
    };

    let shape = match variant {
        Variant::Circle => {
            let arc = rng.boolean(ARC_PROBABILITY).then(|| ArcSpan {
                start_degrees: rng.pick_from(&ARC_STARTS),
                sweep_degrees: rng.pick_from(&ARC_SWEEPS),
            });
            let ring_steps = rng
                .boolean(context.complexity)
                .then(|| rng.range_int(2, 5) as u32);
            Shape::Circle {
                radius: size / 2.0,
                arc,
                ring_steps,
            }
        }
        Variant::Rectangle => {
            let hatch_step = rng
                .boolean(context.line_density)
                .then(|| rng.range_int(4, 10) as u32);
            Shape::Rectangle {
                width: size,
                height: size,
                hatch_step,
            }
        }
        Variant::ComplexNode => Shape::ComplexNode {
            width: size,
            height: size,
            node_radius: unit / 4.0,
            direction: rng.pick_from(&Direction::ALL),
        },
    };

    Element {
        origin,
        mirror,
        size,
        style: Style {
            hollow,
            stroke_width,
            fill,
        },
        shape,
    }
}
