//! Color constants for the shot clock display.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Configuration strings use the usual `#RRGGBB` notation and are converted
//! through [`Rgb888`] by [`parse_hex_color`].

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Simulator screen clear color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Popup borders and header text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Expired header bar and buzzer popup background.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Default bounding square backdrop.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Default grid line color.
pub const BLUE: Rgb565 = Rgb565::BLUE;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Indigo (#3F51B5). Default view background.
/// RGB565: (7, 20, 22).
pub const INDIGO: Rgb565 = Rgb565::new(7, 20, 22);

/// Pink accent (#FF4081). Default color for lit segments.
/// RGB565: (31, 16, 16).
pub const ACCENT: Rgb565 = Rgb565::new(31, 16, 16);

/// Dim gray for unlit segments. Visible against the indigo background
/// without competing with lit segments.
/// RGB565: (8, 16, 8).
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Orange. Idle header bar and reset popup background.
/// RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

// =============================================================================
// Parsing
// =============================================================================

/// Parse a `#RRGGBB` (or bare `RRGGBB`) hex string into an [`Rgb565`] color.
///
/// Returns `None` for anything that is not exactly six hex digits.
pub fn parse_hex_color(text: &str) -> Option<Rgb565> {
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: core::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let rgb = Rgb888::new(channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some(Rgb565::from(rgb))
}

// =============================================================================
// Unit Tests
// =============================================================================
