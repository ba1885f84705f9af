//! Grid layout: turns the space a host view offers into a square canvas
//! subdivided into equal cells.
//!
//! # Grid
//!
//! The canvas is split into `columns_count × columns_count` square cells.
//! Two digit slots of 10 cells each fit in 18 base columns (the second slot's
//! trailing gap column falls outside the canvas), and `cell_padding` extra
//! cells are added on every side:
//!
//! ```text
//! columns_count = 18 + 2 * cell_padding
//! cell_size     = canvas_size / columns_count
//! ```
//!
//! A layout is recomputed from scratch on every resize. A zero canvas is a
//! valid layout; everything drawn from it collapses to a point.

use log::debug;

/// Columns needed for two digits without extra padding.
pub const BASE_COLUMNS: u32 = 18;

/// Insets between the view bounds and its content, in device units.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    /// No insets.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The same inset on all four sides.
    pub const fn uniform(inset: f32) -> Self {
        Self {
            left: inset,
            top: inset,
            right: inset,
            bottom: inset,
        }
    }

    #[inline]
    pub const fn horizontal(&self) -> f32 { self.left + self.right }

    #[inline]
    pub const fn vertical(&self) -> f32 { self.top + self.bottom }
}

/// Where the square canvas sits inside the view.
///
/// Chosen once per display instance.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OffsetMode {
    /// Square centered inside the padded content box.
    ///
    /// With unequal left/right (or top/bottom) padding this is not the center
    /// of the full view: the offset is `left + (width - left - right - canvas) / 2`.
    #[default]
    Centered,
    /// Square top-left corner pinned to the padding origin.
    PaddingAnchored,
}

/// Derived grid metrics for one view size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GridLayout {
    /// Side of the square canvas (never negative).
    pub canvas_size: f32,
    /// Side of one grid cell.
    pub cell_size: f32,
    /// Cells per row and per column.
    pub columns_count: u32,
    /// X of the canvas' left edge in view coordinates.
    pub horizontal_offset: f32,
    /// Y of the canvas' top edge in view coordinates.
    pub vertical_offset: f32,
}

impl GridLayout {
    /// Layout for a view that has not been measured yet.
    pub const fn empty(cell_padding: u32) -> Self {
        Self {
            canvas_size: 0.0,
            cell_size: 0.0,
            columns_count: columns_for(cell_padding),
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
        }
    }

    /// Compute the grid for `available_width × available_height` minus `padding`.
    ///
    /// Padding larger than the available space clamps the canvas to zero.
    pub fn compute(
        available_width: f32,
        available_height: f32,
        padding: Padding,
        cell_padding: u32,
        mode: OffsetMode,
    ) -> Self {
        let content_width = available_width - padding.horizontal();
        let content_height = available_height - padding.vertical();
        let canvas_size = content_width.min(content_height).max(0.0);

        let columns_count = columns_for(cell_padding);
        let cell_size = canvas_size / columns_count as f32;

        let (horizontal_offset, vertical_offset) = match mode {
            OffsetMode::Centered => (
                padding.left + (content_width - canvas_size) / 2.0,
                padding.top + (content_height - canvas_size) / 2.0,
            ),
            OffsetMode::PaddingAnchored => (padding.left, padding.top),
        };

        debug!(
            "grid layout: {available_width}x{available_height} -> canvas {canvas_size}, cell {cell_size}, offset ({horizontal_offset}, {vertical_offset})"
        );

        Self {
            canvas_size,
            cell_size,
            columns_count,
            horizontal_offset,
            vertical_offset,
        }
    }

    /// Whether anything drawn from this layout would be visible.
    #[inline]
    pub fn is_degenerate(&self) -> bool { self.canvas_size <= 0.0 }
}

#[inline]
const fn columns_for(cell_padding: u32) -> u32 { BASE_COLUMNS.saturating_add(cell_padding.saturating_mul(2)) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    // -------------------------------------------------------------------------
    // Canvas and Cell Size Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_square_view_without_padding() {
        let layout = GridLayout::compute(100.0, 100.0, Padding::ZERO, 0, OffsetMode::Centered);

        assert_eq!(layout.canvas_size, 100.0, "Canvas should fill the square view");
        assert_eq!(layout.columns_count, 18, "Two digits need 18 base columns");
        assert!((layout.cell_size - 5.556).abs() < EPSILON, "cell_size was {}", layout.cell_size);
    }

    #[test]
    fn test_canvas_uses_smaller_side() {
        let layout = GridLayout::compute(300.0, 180.0, Padding::ZERO, 0, OffsetMode::PaddingAnchored);
        assert_eq!(layout.canvas_size, 180.0);
        assert_eq!(layout.cell_size, 10.0);
    }

    #[test]
    fn test_padding_shrinks_canvas() {
        let padding = Padding {
            left: 10.0,
            top: 5.0,
            right: 30.0,
            bottom: 15.0,
        };
        let layout = GridLayout::compute(200.0, 200.0, padding, 0, OffsetMode::PaddingAnchored);

        // width 200 - 40 = 160, height 200 - 20 = 180
        assert_eq!(layout.canvas_size, 160.0, "Canvas should be limited by padded width");
    }

    #[test]
    fn test_cell_padding_adds_columns() {
        let layout = GridLayout::compute(200.0, 200.0, Padding::ZERO, 1, OffsetMode::Centered);
        assert_eq!(layout.columns_count, 20, "One padding cell on each side");
        assert_eq!(layout.cell_size, 10.0);

        let layout = GridLayout::compute(200.0, 200.0, Padding::ZERO, 3, OffsetMode::Centered);
        assert_eq!(layout.columns_count, 24);
    }

    // -------------------------------------------------------------------------
    // Degenerate Layout Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_padding_larger_than_view_clamps_to_zero() {
        let layout = GridLayout::compute(20.0, 20.0, Padding::uniform(50.0), 0, OffsetMode::Centered);

        assert_eq!(layout.canvas_size, 0.0, "Negative effective size must clamp to zero");
        assert_eq!(layout.cell_size, 0.0);
        assert!(layout.is_degenerate());
    }

    #[test]
    fn test_zero_size_view() {
        let layout = GridLayout::compute(0.0, 0.0, Padding::ZERO, 2, OffsetMode::PaddingAnchored);
        assert_eq!(layout.canvas_size, 0.0);
        assert_eq!(layout.cell_size, 0.0);
        assert_eq!(layout.columns_count, 22);
    }

    #[test]
    fn test_empty_layout_matches_zero_compute() {
        let empty = GridLayout::empty(1);
        let computed = GridLayout::compute(0.0, 0.0, Padding::ZERO, 1, OffsetMode::PaddingAnchored);
        assert_eq!(empty, computed);
    }

    // -------------------------------------------------------------------------
    // Offset Mode Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_centered_offsets() {
        let layout = GridLayout::compute(200.0, 100.0, Padding::ZERO, 0, OffsetMode::Centered);
        assert_eq!(layout.horizontal_offset, 50.0, "Square should be centered horizontally");
        assert_eq!(layout.vertical_offset, 0.0);

        let layout = GridLayout::compute(100.0, 300.0, Padding::uniform(10.0), 0, OffsetMode::Centered);
        assert_eq!(layout.canvas_size, 80.0);
        assert_eq!(layout.horizontal_offset, 10.0);
        assert_eq!(layout.vertical_offset, 110.0, "10 padding + (280 - 80) / 2");
    }

    #[test]
    fn test_padding_anchored_offsets() {
        let padding = Padding {
            left: 12.0,
            top: 7.0,
            right: 0.0,
            bottom: 0.0,
        };
        let layout = GridLayout::compute(200.0, 100.0, padding, 0, OffsetMode::PaddingAnchored);
        assert_eq!(layout.horizontal_offset, 12.0, "Anchored to left padding");
        assert_eq!(layout.vertical_offset, 7.0, "Anchored to top padding");
    }

    #[test]
    fn test_centered_with_unequal_padding() {
        let padding = Padding {
            left: 20.0,
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
        };
        let layout = GridLayout::compute(220.0, 180.0, padding, 0, OffsetMode::Centered);

        assert_eq!(layout.canvas_size, 180.0);
        // Content box is 200 wide starting at x = 20, so the square sits at
        // 20 + (200 - 180) / 2 rather than (220 - 180) / 2.
        assert_eq!(layout.horizontal_offset, 30.0, "Centered in the padded box");
        assert_eq!(layout.vertical_offset, 0.0);

        let padding = Padding {
            left: 0.0,
            top: 4.0,
            right: 0.0,
            bottom: 36.0,
        };
        let layout = GridLayout::compute(100.0, 200.0, padding, 0, OffsetMode::Centered);
        assert_eq!(layout.vertical_offset, 34.0, "4 + (160 - 100) / 2");
    }

    #[test]
    fn test_oversized_cell_padding_saturates() {
        let layout = GridLayout::compute(100.0, 100.0, Padding::ZERO, u32::MAX, OffsetMode::Centered);
        assert_eq!(layout.columns_count, u32::MAX, "Column count saturates instead of overflowing");
        assert!(layout.cell_size >= 0.0);
    }
}
