//! Header bar: title, view padding readout and timer state.
//!
//! All fixed positions are `const Point`/`const Size` and the fill style is a
//! const `PrimitiveStyle`, so drawing the header does no layout arithmetic.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{GREEN, ORANGE, RED},
    config::{HEADER_HEIGHT, SCREEN_WIDTH},
    styles::{CENTERED, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
    timer::TimerState,
};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Position of the "SHOT CLOCK" title (centered horizontally).
const HEADER_TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 19);

/// Position of the padding readout (left-aligned, 5px from edge).
const HEADER_PADDING_POS: Point = Point::new(5, 17);

/// Position of the timer state label (right-aligned, 5px from edge).
const HEADER_STATE_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 17);

const HEADER_RECT_POS: Point = Point::new(0, 0);

const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

const IDLE_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ORANGE);
const RUNNING_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GREEN);
const EXPIRED_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// Header background for a timer state.
const fn header_fill(state: TimerState) -> PrimitiveStyle<Rgb565> {
    match state {
        TimerState::Idle => IDLE_FILL_STYLE,
        TimerState::Running => RUNNING_FILL_STYLE,
        TimerState::Expired => EXPIRED_FILL_STYLE,
    }
}

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header bar.
///
/// The bar color follows the timer state so the clock status is readable at a
/// glance: orange while idle, green while running, red once expired.
pub fn draw_header<D>(
    display: &mut D,
    state: TimerState,
    padding: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(header_fill(state))
        .draw(display)
        .ok();

    Text::with_text_style("SHOT CLOCK", HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let mut padding_str: String<16> = String::new();
    let _ = write!(padding_str, "PAD {padding}");
    Text::with_text_style(&padding_str, HEADER_PADDING_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style(state.label(), HEADER_STATE_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
