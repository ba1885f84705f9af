//! Paint pass for the clock.
//!
//! Draw order, back to front:
//! 1. Background over the whole surface
//! 2. Bounding square (optional)
//! 3. Grid lines (optional)
//! 4. All 14 segments, active or inactive style
//!
//! Grid lines are stepped by accumulating `cell_size` and stop while the
//! position is still below the far edge, so the last boundary line of the
//! canvas is never drawn. This matches how the clock has always looked.

use crate::layout::GridLayout;
use crate::segments::SegmentPath;
use crate::surface::{PaintStyle, PointF, RectF, Surface};

/// Resolved styles for every element of the clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PaintStyles {
    pub background: PaintStyle,
    pub bounding_square: PaintStyle,
    pub grid_lines: PaintStyle,
    pub active_segment: PaintStyle,
    pub inactive_segment: PaintStyle,
}

/// Optional decorations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RenderFlags {
    pub show_grid: bool,
    pub show_bounding_square: bool,
}

/// Paint the clock onto `surface`.
pub fn render<S>(
    surface: &mut S,
    layout: &GridLayout,
    paths: &[SegmentPath],
    styles: &PaintStyles,
    flags: RenderFlags,
) where
    S: Surface + ?Sized,
{
    let bounds = surface.bounds();
    surface.fill_rect(bounds, styles.background);

    if flags.show_bounding_square {
        surface.fill_rect(
            RectF::square(layout.horizontal_offset, layout.vertical_offset, layout.canvas_size),
            styles.bounding_square,
        );
    }

    if flags.show_grid {
        draw_grid(surface, layout, styles.grid_lines);
    }

    for path in paths {
        let style = if path.active { styles.active_segment } else { styles.inactive_segment };
        surface.stroke_polyline(path.points(), style);
    }
}

/// Vertical then horizontal grid lines across the canvas.
fn draw_grid<S>(
    surface: &mut S,
    layout: &GridLayout,
    style: PaintStyle,
) where
    S: Surface + ?Sized,
{
    // A zero step would never reach the edge
    if layout.cell_size <= 0.0 {
        return;
    }

    let left = layout.horizontal_offset;
    let top = layout.vertical_offset;
    let right = left + layout.canvas_size;
    let bottom = top + layout.canvas_size;

    let mut x = left;
    while x < right {
        surface.stroke_line(PointF::new(x, top), PointF::new(x, bottom), style);
        x += layout.cell_size;
    }

    let mut y = top;
    while y < bottom {
        surface.stroke_line(PointF::new(left, y), PointF::new(right, y), style);
        y += layout.cell_size;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
