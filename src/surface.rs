//! Abstract drawing surface used by the clock renderer.
//!
//! The renderer only needs three primitives: fill a rectangle, stroke a line
//! and stroke an open polyline. Geometry stays in `f32` device units until it
//! reaches a concrete surface, so the grid math never rounds cell by cell.
//!
//! [`DrawTargetSurface`] adapts any embedded-graphics
//! `DrawTarget<Color = Rgb565>` (the simulator window, a mock display or a
//! real panel framebuffer) by rounding to whole pixels.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, Polyline, PrimitiveStyle, Rectangle};
use heapless::Vec;

/// Most points a single polyline is converted in one go; longer ones are
/// drawn as individual lines.
const MAX_POLYLINE_POINTS: usize = 16;

/// A point in device units.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Nearest pixel.
    #[inline]
    pub fn to_pixel(self) -> Point { Point::new(self.x.round() as i32, self.y.round() as i32) }
}

/// An axis-aligned rectangle in device units.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct RectF {
    pub origin: PointF,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: PointF::new(x, y),
            width,
            height,
        }
    }

    /// A square with its top-left corner at `(x, y)`.
    pub const fn square(x: f32, y: f32, side: f32) -> Self { Self::new(x, y, side, side) }

    #[inline]
    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }
}

/// Color plus stroke width. Fills ignore the width.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PaintStyle {
    pub color: Rgb565,
    pub stroke_width: u32,
}

impl PaintStyle {
    pub const fn new(color: Rgb565, stroke_width: u32) -> Self { Self { color, stroke_width } }

    /// Hairline style (1px stroke).
    pub const fn solid(color: Rgb565) -> Self { Self::new(color, 1) }

    #[inline]
    const fn stroke(self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_stroke(self.color, self.stroke_width) }

    #[inline]
    const fn fill(self) -> PrimitiveStyle<Rgb565> { PrimitiveStyle::with_fill(self.color) }
}

/// Drawing capability handed to the renderer.
pub trait Surface {
    /// Full drawable area of the surface.
    fn bounds(&self) -> RectF;

    fn fill_rect(
        &mut self,
        rect: RectF,
        style: PaintStyle,
    );

    fn stroke_line(
        &mut self,
        from: PointF,
        to: PointF,
        style: PaintStyle,
    );

    /// Stroke an open polyline (first point is not joined to the last).
    fn stroke_polyline(
        &mut self,
        points: &[PointF],
        style: PaintStyle,
    );
}

/// [`Surface`] over an embedded-graphics draw target.
pub struct DrawTargetSurface<'a, D> {
    target: &'a mut D,
}

impl<'a, D> DrawTargetSurface<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self { Self { target } }
}

impl<D> Surface for DrawTargetSurface<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn bounds(&self) -> RectF {
        let area = self.target.bounding_box();
        RectF::new(
            area.top_left.x as f32,
            area.top_left.y as f32,
            area.size.width as f32,
            area.size.height as f32,
        )
    }

    fn fill_rect(
        &mut self,
        rect: RectF,
        style: PaintStyle,
    ) {
        if rect.is_empty() {
            return;
        }
        let top_left = rect.origin.to_pixel();
        let bottom_right = PointF::new(rect.origin.x + rect.width, rect.origin.y + rect.height).to_pixel();
        let size = Size::new(
            (bottom_right.x - top_left.x).max(0) as u32,
            (bottom_right.y - top_left.y).max(0) as u32,
        );
        Rectangle::new(top_left, size)
            .into_styled(style.fill())
            .draw(self.target)
            .ok();
    }

    fn stroke_line(
        &mut self,
        from: PointF,
        to: PointF,
        style: PaintStyle,
    ) {
        Line::new(from.to_pixel(), to.to_pixel())
            .into_styled(style.stroke())
            .draw(self.target)
            .ok();
    }

    fn stroke_polyline(
        &mut self,
        points: &[PointF],
        style: PaintStyle,
    ) {
        if points.len() > MAX_POLYLINE_POINTS {
            for pair in points.windows(2) {
                self.stroke_line(pair[0], pair[1], style);
            }
            return;
        }

        let pixels: Vec<Point, MAX_POLYLINE_POINTS> = points.iter().map(|p| p.to_pixel()).collect();
        Polyline::new(&pixels)
            .into_styled(style.stroke())
            .draw(self.target)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
