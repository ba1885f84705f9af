//! The segment display engine.
//!
//! [`SegmentDisplay`] owns everything needed to paint the clock for one view:
//! the current [`GridLayout`], the 14 segment paths built on it, the decoded
//! value that drives their active flags, and the resolved paint styles.
//!
//! # Lifecycle
//!
//! | Event | Effect |
//! |-------|--------|
//! | [`resize`](SegmentDisplay::resize) | Layout recomputed, paths rebuilt, last value re-applied |
//! | [`show`](SegmentDisplay::show) | Active flags recomputed (out-of-range values ignored) |
//! | [`render`](SegmentDisplay::render) | Paint pass onto any [`Surface`] |

use heapless::Vec;
use log::{debug, warn};

use crate::config::ClockConfig;
use crate::decoder::DecodedValue;
use crate::layout::{GridLayout, OffsetMode, Padding};
use crate::renderer::{self, PaintStyles, RenderFlags};
use crate::segments::{SEGMENT_COUNT, SegmentPath, build_segment_paths};
use crate::surface::Surface;
use crate::value::ClockValue;

/// Two-digit seven-segment display for one view.
pub struct SegmentDisplay {
    layout: GridLayout,
    paths: Vec<SegmentPath, SEGMENT_COUNT>,
    shown: DecodedValue,
    value: ClockValue,
    cell_padding: u32,
    offset_mode: OffsetMode,
    styles: PaintStyles,
    flags: RenderFlags,
}

impl SegmentDisplay {
    /// Create an unmeasured display showing the configured initial value.
    pub fn new(config: &ClockConfig) -> Self {
        let layout = GridLayout::empty(config.cell_padding);
        let mut display = Self {
            layout,
            paths: build_segment_paths(&layout, config.cell_padding),
            shown: DecodedValue::from_value(config.initial_value),
            value: config.initial_value,
            cell_padding: config.cell_padding,
            offset_mode: config.offset_mode,
            styles: config.paint_styles(),
            flags: config.render_flags(),
        };
        display.shown.apply(&mut display.paths);
        display
    }

    /// Re-establish the grid for a new view size.
    pub fn resize(
        &mut self,
        width: f32,
        height: f32,
        padding: Padding,
    ) {
        self.layout = GridLayout::compute(width, height, padding, self.cell_padding, self.offset_mode);
        self.paths = build_segment_paths(&self.layout, self.cell_padding);
        self.shown.apply(&mut self.paths);
        debug!("display resized to {width}x{height}, cell size {}", self.layout.cell_size);
    }

    /// Display `value`. Returns `false` (and changes nothing) when the value is
    /// outside `0..=24`.
    pub fn show(
        &mut self,
        value: i64,
    ) -> bool {
        match ClockValue::new(value) {
            Some(value) => {
                self.set(value);
                true
            }
            None => {
                warn!("ignoring out-of-range clock value {value}");
                false
            }
        }
    }

    /// Display an already validated value.
    pub fn set(
        &mut self,
        value: ClockValue,
    ) {
        self.shown = DecodedValue::from_value(value);
        self.shown.apply(&mut self.paths);
        self.value = value;
    }

    /// Paint the display onto `surface`.
    pub fn render<S>(
        &self,
        surface: &mut S,
    ) where
        S: Surface + ?Sized,
    {
        renderer::render(surface, &self.layout, &self.paths, &self.styles, self.flags);
    }

    /// Last value accepted by [`show`](Self::show).
    #[inline]
    pub const fn value(&self) -> ClockValue { self.value }

    #[inline]
    pub const fn layout(&self) -> &GridLayout { &self.layout }

    /// All 14 segment paths, tens A..G then units A..G.
    #[inline]
    pub fn paths(&self) -> &[SegmentPath] { &self.paths }
}

// =============================================================================
// Unit Tests
// =============================================================================
