//! Paints a composition display list in its fixed layer order
//!
//! Layers, each over the previous: background, technical grid, elements in placement
//! order, connectors, then the optional connector endpoint dots. Element geometry is
//! resolved against the element origin here; no transform state is carried between
//! drawings.

use crate::composition::element::{Element, Shape};
use crate::composition::network::Segment;
use crate::composition::palette::Palette;
use crate::composition::pipeline::Composition;
use crate::io::configuration::{ENDPOINT_DOT_RADIUS, FILL_OPACITY};
use crate::io::error::Result;
use crate::raster::canvas::Canvas;
use crate::spatial::Point;
use image::RgbaImage;

/// Replays compositions onto a borrowed pixel buffer
pub struct Painter<'a> {
    image: &'a mut RgbaImage,
    endpoint_dots: bool,
}

impl<'a> Painter<'a> {
    /// Borrow a pixel buffer for painting
    pub const fn new(image: &'a mut RgbaImage) -> Self {
        Self {
            image,
            endpoint_dots: false,
        }
    }

    /// Also mark both ends of every connector with a small dot
    #[must_use]
    pub const fn with_endpoint_dots(mut self, enabled: bool) -> Self {
        self.endpoint_dots = enabled;
        self
    }

    /// Paint every layer of the composition, replacing the buffer contents
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCanvas` when the buffer is empty or too large to render
    pub fn paint(&mut self, composition: &Composition) -> Result<()> {
        let palette = &composition.palette;
        let mut canvas = Canvas::new(self.image.width(), self.image.height())?;

        canvas.fill(palette.background);
        canvas.stroke_segments(&composition.grid_lines, 1.0, palette.grid);

        for element in &composition.elements {
            paint_element(&mut canvas, element, palette);
        }

        let connectors: Vec<Segment> = composition
            .connectors
            .iter()
            .flat_map(|connector| connector.segments())
            .collect();
        canvas.stroke_segments(&connectors, 1.0, palette.primary);

        if self.endpoint_dots {
            paint_endpoint_dots(&mut canvas, &connectors, palette);
        }

        canvas.render_into(self.image);
        Ok(())
    }
}

/// Paint one element drawing at its origin
fn paint_element(canvas: &mut Canvas, element: &Element, palette: &Palette) {
    let origin = element.origin;
    let style = element.style;

    match element.shape {
        Shape::Circle { radius, arc, .. } => {
            if !style.hollow {
                match arc {
                    Some(arc) => canvas.fill_arc(origin, radius, arc, style.fill, FILL_OPACITY),
                    None => canvas.fill_disk(origin, radius, style.fill, FILL_OPACITY),
                }
            }
            canvas.stroke_arc(origin, radius, arc, style.stroke_width, palette.primary);

            for ring in element.shape.ring_radii() {
                canvas.stroke_arc(origin, ring, None, 1.0, palette.primary);
            }
        }
        Shape::Rectangle { width, height, .. } => {
            let left = origin.x - width / 2.0;
            let top = origin.y - height / 2.0;
            if !style.hollow {
                canvas.fill_rect(left, top, width, height, style.fill, 1.0);
            }
            canvas.stroke_rect(
                left,
                top,
                width,
                height,
                style.stroke_width,
                palette.primary,
            );

            let hatching: Vec<Segment> = element
                .shape
                .hatch_offsets()
                .into_iter()
                .map(|offset| {
                    Segment::new(
                        Point::new(origin.x + offset, top),
                        Point::new(origin.x + offset, top + height),
                    )
                })
                .collect();
            canvas.stroke_segments(&hatching, 1.0, palette.primary);
        }
        Shape::ComplexNode {
            width,
            height,
            node_radius,
            direction,
        } => {
            canvas.fill_disk(origin, node_radius, palette.primary, 1.0);
            let (dx, dy) = direction.vector();
            let stem = Segment::new(origin, origin.offset(dx * width, dy * height));
            canvas.stroke_segments(&[stem], style.stroke_width, palette.primary);
        }
    }
}

fn paint_endpoint_dots(canvas: &mut Canvas, segments: &[Segment], palette: &Palette) {
    for segment in segments {
        for point in [segment.from, segment.to] {
            canvas.fill_disk(point, ENDPOINT_DOT_RADIUS, palette.primary, 1.0);
        }
    }
}
