//! Non-modal popup overlays.
//!
//! Popups appear centered on screen with a white 3px border. Only one popup
//! displays at a time (most recent wins) and key input keeps working while it
//! is visible. Geometry and fill styles are `const`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{ORANGE, RED, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, POPUP_STYLE_BLACK, POPUP_STYLE_WHITE};

// =============================================================================
// Popup Layout Constants
// =============================================================================

const POPUP_WIDTH: u32 = 180;
const POPUP_HEIGHT: u32 = 60;
/// X position (centered on screen).
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
/// Y position (centered on screen).
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

/// Baseline for a single ProFont line, vertically centered.
const POPUP_TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y + 8);

const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);

const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);
const ORANGE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ORANGE);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Border plus background box shared by every popup.
fn draw_frame<D>(
    display: &mut D,
    background: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(background)
        .draw(display)
        .ok();
}

/// Draw the "BUZZER" popup shown when the countdown reaches zero.
pub fn draw_buzzer_popup<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_frame(display, RED_FILL);
    Text::with_text_style("BUZZER", POPUP_TEXT_POS, POPUP_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the "RESET" popup shown after a manual reset.
pub fn draw_reset_popup<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_frame(display, ORANGE_FILL);
    Text::with_text_style("RESET", POPUP_TEXT_POS, POPUP_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLACK;
    use crate::widgets::tests::ScreenBuffer;

    #[test]
    fn test_popup_centered_with_border() {
        let mut screen = ScreenBuffer::new();
        draw_buzzer_popup(&mut screen);

        let touched = screen.bounding_box().expect("popup draws pixels");
        assert_eq!(touched.top_left, Point::new(POPUP_X - 3, POPUP_Y - 3));
        assert_eq!(touched.size, BORDER_SIZE, "Border is the outermost element");
        assert_eq!(screen.pixel(BORDER_POS.x, BORDER_POS.y), Some(WHITE));
        assert_eq!(screen.pixel(BG_POS.x, BG_POS.y), Some(RED));
    }

    #[test]
    fn test_buzzer_text_is_white() {
        let mut screen = ScreenBuffer::new();
        draw_buzzer_popup(&mut screen);
        let border_pixels = BORDER_SIZE.width * BORDER_SIZE.height - BG_SIZE.width * BG_SIZE.height;
        assert!(screen.count(WHITE) > border_pixels as usize, "Text adds white pixels inside the box");
    }

    #[test]
    fn test_reset_popup_colors() {
        let mut screen = ScreenBuffer::new();
        draw_reset_popup(&mut screen);
        assert_eq!(screen.pixel(BG_POS.x, BG_POS.y), Some(ORANGE));
        assert!(screen.count(BLACK) > 0, "Reset text is black on orange");
    }
}
