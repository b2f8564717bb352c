//! Mirroring of element origins across the canvas midlines

use crate::io::configuration::{HORIZONTAL_SYMMETRY_THRESHOLD, VERTICAL_SYMMETRY_THRESHOLD};
use crate::spatial::grid::Point;

/// Which copy of a placed element a drawing belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirror {
    /// The placed element itself
    Original,
    /// Reflected across the vertical midline (`x -> width - x`)
    Vertical,
    /// Reflected across the horizontal midline (`y -> height - y`)
    Horizontal,
    /// Reflected across both midlines
    Both,
}

impl Mirror {
    /// Reflect a point on a canvas of the given size
    pub fn apply(self, point: Point, width: f64, height: f64) -> Point {
        match self {
            Self::Original => point,
            Self::Vertical => Point::new(width - point.x, point.y),
            Self::Horizontal => Point::new(point.x, height - point.y),
            Self::Both => Point::new(width - point.x, height - point.y),
        }
    }
}

/// Active mirror axes for one composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymmetryAxes {
    /// Mirror across the vertical midline
    pub vertical: bool,
    /// Mirror across the horizontal midline
    pub horizontal: bool,
}

impl SymmetryAxes {
    /// Gate both axes on the symmetry parameter
    pub fn from_symmetry(symmetry: f64) -> Self {
        Self {
            vertical: symmetry > VERTICAL_SYMMETRY_THRESHOLD,
            horizontal: symmetry > HORIZONTAL_SYMMETRY_THRESHOLD,
        }
    }

    /// Copies drawn per placed element, in drawing order
    ///
    /// The diagonal copy only exists when both axes are active.
    pub fn copies(self) -> Vec<Mirror> {
        let mut copies = vec![Mirror::Original];
        if self.vertical {
            copies.push(Mirror::Vertical);
        }
        if self.horizontal {
            copies.push(Mirror::Horizontal);
            if self.vertical {
                copies.push(Mirror::Both);
            }
        }
        copies
    }

    /// Number of drawings per placed element
    pub fn multiplier(self) -> usize {
        self.copies().len()
    }
}
