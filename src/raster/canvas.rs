//! Vector drawing surface backed by the `vello_cpu` software renderer
//!
//! Primitives are built as `kurbo` shapes and queued on one render context. Nothing touches
//! pixels until [`Canvas::render_into`] flushes the queue and copies the result, converted
//! back to straight alpha, into an `RgbaImage`.

use crate::composition::element::ArcSpan;
use crate::composition::network::Segment;
use crate::io::error::{Result, degenerate_canvas};
use crate::spatial::Point;
use crate::spatial::grid::check_canvas;
use image::{Rgba, RgbaImage};
use num_traits::Float;
use vello_cpu::kurbo::{self, Arc, BezPath, Cap, Circle, Join, Line, Rect, Shape as _, Stroke};
use vello_cpu::peniko::Color;
use vello_cpu::{Pixmap, RenderContext};

// Flattening tolerance for curves, in pixels
const TOLERANCE: f64 = 0.1;

/// Convert a rounded colour value to a channel level, saturating outside `[0, 255]`
pub(crate) fn to_channel<F: Float>(value: F) -> u8 {
    value
        .to_u8()
        .unwrap_or_else(|| if value > F::zero() { u8::MAX } else { 0 })
}

const fn paint(color: Rgba<u8>) -> Color {
    let [r, g, b, a] = color.0;
    Color::from_rgba8(r, g, b, a)
}

const fn point_to_cpu(point: Point) -> kurbo::Point {
    kurbo::Point::new(point.x, point.y)
}

fn arc_path(center: Point, radius: f64, arc: ArcSpan) -> BezPath {
    Arc::new(
        point_to_cpu(center),
        (radius, radius),
        arc.start(),
        arc.sweep(),
        0.0,
    )
    .into_path(TOLERANCE)
}

// Premultiplied pixmap texel to a straight-alpha pixel
fn unpremultiply(texel: &[u8]) -> Rgba<u8> {
    let &[r, g, b, a] = texel else {
        return Rgba([0, 0, 0, 0]);
    };
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let straight = |channel: u8| to_channel((f32::from(channel) * 255.0 / f32::from(a)).round());
    Rgba([straight(r), straight(g), straight(b), a])
}

/// Drawing surface for one render
pub struct Canvas {
    context: RenderContext,
    width: u16,
    height: u16,
}

impl Canvas {
    /// Create a transparent surface of the given size
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCanvas` when a side is zero or too large to render
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_canvas(width, height)?;
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(degenerate_canvas(width, height));
        };
        Ok(Self {
            context: RenderContext::new(w, h),
            width: w,
            height: h,
        })
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> u32 {
        self.width as u32
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> u32 {
        self.height as u32
    }

    fn with_opacity(&mut self, opacity: f32, draw: impl FnOnce(&mut RenderContext)) {
        let layered = opacity < 1.0;
        if layered {
            self.context.push_opacity_layer(opacity.clamp(0.0, 1.0));
        }
        draw(&mut self.context);
        if layered {
            self.context.pop_layer();
        }
    }

    fn stroke(&mut self, path: &BezPath, line_width: f64, join: Join, color: Rgba<u8>) {
        self.context.set_stroke(
            Stroke::new(line_width)
                .with_caps(Cap::Butt)
                .with_join(join),
        );
        self.context.set_paint(paint(color));
        self.context.stroke_path(path);
    }

    /// Cover the whole canvas with a solid colour
    pub fn fill(&mut self, color: Rgba<u8>) {
        let area = Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        self.context.set_paint(paint(color));
        self.context.fill_rect(&area);
    }

    /// Fill the rectangle with top-left corner `(x, y)`
    pub fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba<u8>,
        opacity: f32,
    ) {
        let rect = Rect::new(x, y, x + width, y + height);
        self.with_opacity(opacity, |context| {
            context.set_paint(paint(color));
            context.fill_rect(&rect);
        });
    }

    /// Stroke a rectangle outline centred on its edges, with square corners
    pub fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        line_width: f64,
        color: Rgba<u8>,
    ) {
        let outline = Rect::new(x, y, x + width, y + height).into_path(TOLERANCE);
        self.stroke(&outline, line_width, Join::Miter, color);
    }

    /// Fill a full disk
    pub fn fill_disk(&mut self, center: Point, radius: f64, color: Rgba<u8>, opacity: f32) {
        let disk = Circle::new(point_to_cpu(center), radius).into_path(TOLERANCE);
        self.with_opacity(opacity, |context| {
            context.set_paint(paint(color));
            context.fill_path(&disk);
        });
    }

    /// Fill the region enclosed by an arc and its chord
    pub fn fill_arc(
        &mut self,
        center: Point,
        radius: f64,
        arc: ArcSpan,
        color: Rgba<u8>,
        opacity: f32,
    ) {
        let mut region = arc_path(center, radius, arc);
        region.close_path();
        self.with_opacity(opacity, |context| {
            context.set_paint(paint(color));
            context.fill_path(&region);
        });
    }

    /// Stroke a circle, or only the arc of it when `arc` is given
    pub fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        arc: Option<ArcSpan>,
        line_width: f64,
        color: Rgba<u8>,
    ) {
        let path = match arc {
            Some(arc) => arc_path(center, radius, arc),
            None => Circle::new(point_to_cpu(center), radius).into_path(TOLERANCE),
        };
        self.stroke(&path, line_width, Join::Round, color);
    }

    /// Stroke several segments as one path with butt caps
    ///
    /// The segments are stroked together, so translucent colours do not darken where they
    /// cross.
    pub fn stroke_segments(&mut self, segments: &[Segment], line_width: f64, color: Rgba<u8>) {
        if segments.is_empty() {
            return;
        }
        let mut network = BezPath::new();
        for segment in segments {
            network.extend(
                Line::new(point_to_cpu(segment.from), point_to_cpu(segment.to))
                    .path_elements(TOLERANCE),
            );
        }
        self.stroke(&network, line_width, Join::Miter, color);
    }

    /// Rasterise everything drawn so far and copy it into `image`
    ///
    /// Pixels are written in row-major order up to the smaller of the two buffers.
    pub fn render_into(mut self, image: &mut RgbaImage) {
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.context.flush();
        self.context.render_to_pixmap(&mut pixmap);

        for (pixel, texel) in image
            .pixels_mut()
            .zip(pixmap.data_as_u8_slice().chunks_exact(4))
        {
            *pixel = unpremultiply(texel);
        }
    }
}
