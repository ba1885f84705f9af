//! Seven-segment glyph geometry.
//!
//! Every digit is drawn from seven open polylines laid out on the grid from
//! [`layout`](crate::layout). Glyph coordinates are in grid cells (x right,
//! y down); one glyph spans `x ∈ [0, 8]`, `y ∈ [3, 15]`:
//!
//! ```text
//!      0       8
//!   3  +---A---+
//!      |       |
//!      B       C
//!   9  +---D---+
//!      E       F
//!      |       |
//!  15  +---G---+
//! ```
//!
//! Digit column 0 (tens) sits on the left, column 1 (units) on the right; each
//! column owns a slot 10 cells wide.

use bitflags::bitflags;
use heapless::Vec;

use crate::layout::GridLayout;
use crate::surface::PointF;

/// Number of digit columns on the clock.
pub const DIGIT_COUNT: usize = 2;

/// Segments making up one digit.
pub const SEGMENTS_PER_DIGIT: usize = 7;

/// Total segment paths on the clock.
pub const SEGMENT_COUNT: usize = DIGIT_COUNT * SEGMENTS_PER_DIGIT;

/// Width of one digit slot in grid cells.
pub const DIGIT_SLOT_CELLS: u32 = 10;

/// Most vertices any segment has (segment D).
pub const MAX_SEGMENT_POINTS: usize = 6;

/// Named segment of a seven-segment glyph.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Segment {
    /// Top bar.
    A = 0,
    /// Upper left.
    B = 1,
    /// Upper right.
    C = 2,
    /// Middle bar.
    D = 3,
    /// Lower left.
    E = 4,
    /// Lower right.
    F = 5,
    /// Bottom bar.
    G = 6,
}

impl Segment {
    /// All segments in path order.
    pub const ALL: [Self; SEGMENTS_PER_DIGIT] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G];

    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Single-segment set.
    #[inline]
    pub const fn flag(self) -> SegmentSet { SegmentSet::from_bits_retain(1 << self as u8) }

    /// Glyph vertices in grid cells.
    pub const fn grid_points(self) -> &'static [GridPoint] {
        match self {
            Self::A => &A_POINTS,
            Self::B => &B_POINTS,
            Self::C => &C_POINTS,
            Self::D => &D_POINTS,
            Self::E => &E_POINTS,
            Self::F => &F_POINTS,
            Self::G => &G_POINTS,
        }
    }
}

// =============================================================================
// Glyph Font
// =============================================================================

const A_POINTS: [GridPoint; 4] = [GridPoint::new(0, 3), GridPoint::new(8, 3), GridPoint::new(6, 5), GridPoint::new(2, 5)];
const B_POINTS: [GridPoint; 4] = [GridPoint::new(0, 3), GridPoint::new(0, 9), GridPoint::new(2, 8), GridPoint::new(2, 5)];
const C_POINTS: [GridPoint; 4] = [GridPoint::new(8, 3), GridPoint::new(8, 9), GridPoint::new(6, 8), GridPoint::new(6, 5)];
/// Middle bar is a hexagon, hence the extra two vertices.
const D_POINTS: [GridPoint; MAX_SEGMENT_POINTS] = [
    GridPoint::new(0, 9),
    GridPoint::new(2, 8),
    GridPoint::new(6, 8),
    GridPoint::new(8, 9),
    GridPoint::new(6, 10),
    GridPoint::new(2, 10),
];
const E_POINTS: [GridPoint; 4] = [GridPoint::new(0, 9), GridPoint::new(0, 15), GridPoint::new(2, 13), GridPoint::new(2, 10)];
const F_POINTS: [GridPoint; 4] = [GridPoint::new(8, 9), GridPoint::new(8, 15), GridPoint::new(6, 13), GridPoint::new(6, 10)];
const G_POINTS: [GridPoint; 4] = [GridPoint::new(8, 15), GridPoint::new(0, 15), GridPoint::new(2, 13), GridPoint::new(6, 13)];

bitflags! {
    /// Set of lit segments for one digit.
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
    pub struct SegmentSet: u8 {
        const A = 1 << 0;
        const B = 1 << 1;
        const C = 1 << 2;
        const D = 1 << 3;
        const E = 1 << 4;
        const F = 1 << 5;
        const G = 1 << 6;
    }
}

impl SegmentSet {
    /// Whether `segment` is part of this set.
    #[inline]
    pub const fn has(self, segment: Segment) -> bool { self.contains(segment.flag()) }
}

/// Vertex of the glyph font, in grid cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridPoint {
    pub x: u8,
    pub y: u8,
}

impl GridPoint {
    pub const fn new(x: u8, y: u8) -> Self { Self { x, y } }
}

/// One segment of one digit column, in device coordinates.
#[derive(Clone, PartialEq, Debug)]
pub struct SegmentPath {
    pub segment: Segment,
    /// Digit column, 0 = tens (left).
    pub column: usize,
    points: Vec<PointF, MAX_SEGMENT_POINTS>,
    /// Whether the segment is lit for the displayed value.
    pub active: bool,
}

impl SegmentPath {
    /// Place `segment` of digit `column` on `layout`. Starts inactive.
    pub fn new(
        segment: Segment,
        column: usize,
        layout: &GridLayout,
        cell_padding: u32,
    ) -> Self {
        let cell = layout.cell_size;
        let column_offset = column as f32 * DIGIT_SLOT_CELLS as f32 * cell;
        let padding = cell_padding as f32;

        let points = segment
            .grid_points()
            .iter()
            .map(|p| {
                PointF::new(
                    column_offset + (f32::from(p.x) + padding) * cell + layout.horizontal_offset,
                    (f32::from(p.y) + padding) * cell + layout.vertical_offset,
                )
            })
            .collect();

        Self {
            segment,
            column,
            points,
            active: false,
        }
    }

    /// Device-space vertices, in drawing order.
    #[inline]
    pub fn points(&self) -> &[PointF] { &self.points }
}

/// The seven segments of digit `column`, in A..G order.
pub fn build_digit_segments(
    column: usize,
    layout: &GridLayout,
    cell_padding: u32,
) -> [SegmentPath; SEGMENTS_PER_DIGIT] {
    Segment::ALL.map(|segment| SegmentPath::new(segment, column, layout, cell_padding))
}

/// All 14 segment paths: tens A..G followed by units A..G.
pub fn build_segment_paths(
    layout: &GridLayout,
    cell_padding: u32,
) -> Vec<SegmentPath, SEGMENT_COUNT> {
    (0..DIGIT_COUNT)
        .flat_map(|column| build_digit_segments(column, layout, cell_padding))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{OffsetMode, Padding};

    /// 180px square, no padding: exactly 10px per cell.
    fn ten_pixel_layout() -> GridLayout { GridLayout::compute(180.0, 180.0, Padding::ZERO, 0, OffsetMode::PaddingAnchored) }

    fn pts(path: &SegmentPath) -> std::vec::Vec<(f32, f32)> { path.points().iter().map(|p| (p.x, p.y)).collect() }

    // -------------------------------------------------------------------------
    // Font Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_segment_order_and_flags() {
        for (i, segment) in Segment::ALL.iter().enumerate() {
            assert_eq!(segment.index(), i, "Segment {segment:?} out of order");
            assert_eq!(segment.flag().bits(), 1 << i);
        }
        assert_eq!(Segment::D.flag(), SegmentSet::D);
    }

    #[test]
    fn test_glyph_fits_font_box() {
        for segment in Segment::ALL {
            let points = segment.grid_points();
            assert!(points.len() >= 4 && points.len() <= MAX_SEGMENT_POINTS, "{segment:?}");
            for p in points {
                assert!(p.x <= 8, "{segment:?} x out of glyph box");
                assert!((3..=15).contains(&p.y), "{segment:?} y out of glyph box");
            }
        }
        assert_eq!(Segment::D.grid_points().len(), 6, "Middle bar is a hexagon outline");
    }

    /// The font tables are usable at compile time and outlive any caller.
    #[test]
    fn test_grid_points_are_static() {
        const TOP_BAR: &[GridPoint] = Segment::A.grid_points();
        assert_eq!(TOP_BAR[0], GridPoint::new(0, 3), "Segment A starts at the top-left corner");

        let counts: std::vec::Vec<usize> = Segment::ALL.iter().map(|s| s.grid_points().len()).collect();
        assert_eq!(counts, [4, 4, 4, 6, 4, 4, 4], "Only the middle bar has six vertices");

        let bottom: &'static [GridPoint] = Segment::G.grid_points();
        assert_eq!(bottom.last(), Some(&GridPoint::new(6, 13)));
    }

    // -------------------------------------------------------------------------
    // Device Transform Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tens_digit_segment_a() {
        let layout = ten_pixel_layout();
        let path = SegmentPath::new(Segment::A, 0, &layout, 0);

        assert_eq!(pts(&path), vec![(0.0, 30.0), (80.0, 30.0), (60.0, 50.0), (20.0, 50.0)]);
        assert!(!path.active, "Freshly built paths are inactive");
    }

    #[test]
    fn test_units_digit_shifted_by_slot() {
        let layout = ten_pixel_layout();
        let tens = SegmentPath::new(Segment::G, 0, &layout, 0);
        let units = SegmentPath::new(Segment::G, 1, &layout, 0);

        for (t, u) in tens.points().iter().zip(units.points()) {
            assert_eq!(u.x - t.x, 100.0, "Units column sits one 10-cell slot to the right");
            assert_eq!(u.y, t.y);
        }
    }

    #[test]
    fn test_cell_padding_and_offsets() {
        let layout = GridLayout {
            canvas_size: 200.0,
            cell_size: 10.0,
            columns_count: 20,
            horizontal_offset: 7.0,
            vertical_offset: 3.0,
        };
        let path = SegmentPath::new(Segment::B, 1, &layout, 1);

        // x = 100 + (px + 1) * 10 + 7, y = (py + 1) * 10 + 3
        assert_eq!(pts(&path), vec![(117.0, 43.0), (117.0, 103.0), (137.0, 93.0), (137.0, 63.0)]);
    }

    #[test]
    fn test_zero_layout_collapses_to_offset() {
        let layout = GridLayout::compute(0.0, 0.0, Padding::uniform(4.0), 0, OffsetMode::PaddingAnchored);
        let path = SegmentPath::new(Segment::D, 1, &layout, 0);

        assert!(path.points().iter().all(|p| p.x == 4.0 && p.y == 4.0), "Degenerate grid puts every vertex at the origin");
    }

    // -------------------------------------------------------------------------
    // Path Set Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_build_digit_segments_order() {
        let layout = ten_pixel_layout();
        let digit = build_digit_segments(1, &layout, 0);

        assert_eq!(digit.len(), SEGMENTS_PER_DIGIT);
        for (path, segment) in digit.iter().zip(Segment::ALL) {
            assert_eq!(path.segment, segment);
            assert_eq!(path.column, 1);
        }
    }

    #[test]
    fn test_build_segment_paths_tens_then_units() {
        let layout = ten_pixel_layout();
        let paths = build_segment_paths(&layout, 0);

        assert_eq!(paths.len(), SEGMENT_COUNT, "Two digits × seven segments");
        assert!(paths[..7].iter().all(|p| p.column == 0), "First seven paths belong to the tens digit");
        assert!(paths[7..].iter().all(|p| p.column == 1), "Last seven paths belong to the units digit");
        assert_eq!(paths[7].segment, Segment::A);
    }
}
