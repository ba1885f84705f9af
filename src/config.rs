//! Application configuration.
//!
//! Two kinds of configuration live here:
//!
//! - **Compile-time constants** for the simulator screen and timing, computed
//!   once as `const` like the rest of the fixed UI geometry.
//! - **[`ClockConfig`]**, the per-instance clock configuration built from
//!   host-provided key/value pairs (view attributes, a settings file, CLI
//!   overrides). Invalid input is rejected here, never during rendering.
//!
//! # Recognised Keys
//!
//! | Key | Value | Default |
//! |-----|-------|---------|
//! | `backgroundColor` | `#RRGGBB` | indigo |
//! | `activeColor` | `#RRGGBB` | pink accent |
//! | `inactiveColor` | `#RRGGBB` | dim gray |
//! | `gridColor` | `#RRGGBB` | blue |
//! | `boundingSquareColor` | `#RRGGBB` | green |
//! | `showGrid` | bool | `false` |
//! | `showBoundingSquare` | bool | `false` |
//! | `cellPadding` | integer ≥ 0 | `0` |
//! | `initialValue` | integer 0..=24 | `24` |
//! | `offsetMode` | `centered` / `padding` | `centered` |
//! | `strokeWidth` | integer ≥ 1 | `2` |
//! | `autoStart` | bool | `true` |
//!
//! Keys match case-insensitively and ignore `_`/`-`, so `show_grid`,
//! `showGrid` and `show-grid` are the same key.

use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use log::warn;

use crate::colors::{ACCENT, BLUE, GRAY, GREEN, INDIGO, parse_hex_color};
use crate::error::ConfigError;
use crate::layout::OffsetMode;
use crate::renderer::{PaintStyles, RenderFlags};
use crate::surface::PaintStyle;
use crate::value::ClockValue;

// =============================================================================
// Display Configuration
// =============================================================================

/// Simulator screen width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Simulator screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Height left for the clock view below the header.
pub const CLOCK_AREA_HEIGHT: u32 = SCREEN_HEIGHT - HEADER_HEIGHT;

/// Screen center X coordinate. Used for centering popups and text.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Used for centering popups and text.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Default inset around the clock view, in pixels.
pub const DEFAULT_VIEW_PADDING: u32 = 8;

/// Largest inset the simulator lets the user dial in.
pub const MAX_VIEW_PADDING: u32 = 96;

/// Inset change per Up/Down key press.
pub const VIEW_PADDING_STEP: u32 = 4;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Countdown step. Ticks are not corrected for drift.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Target frame time (~50 FPS). The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long the buzzer popup stays on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

// =============================================================================
// Clock Defaults
// =============================================================================

/// Default segment stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// Largest accepted `cellPadding`. At this size the glyphs already fill under
/// a tenth of the canvas.
pub const MAX_CELL_PADDING: u32 = 64;

/// Per-instance clock configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockConfig {
    pub background_color: Rgb565,
    pub active_color: Rgb565,
    pub inactive_color: Rgb565,
    pub grid_color: Rgb565,
    pub bounding_square_color: Rgb565,
    pub show_grid: bool,
    pub show_bounding_square: bool,
    /// Extra grid cells around the glyphs on every side.
    pub cell_padding: u32,
    pub initial_value: ClockValue,
    pub offset_mode: OffsetMode,
    pub stroke_width: u32,
    /// Start counting down as soon as the clock is created.
    pub auto_start: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            background_color: INDIGO,
            active_color: ACCENT,
            inactive_color: GRAY,
            grid_color: BLUE,
            bounding_square_color: GREEN,
            show_grid: false,
            show_bounding_square: false,
            cell_padding: 0,
            initial_value: ClockValue::FULL,
            offset_mode: OffsetMode::Centered,
            stroke_width: DEFAULT_STROKE_WIDTH,
            auto_start: true,
        }
    }
}

impl ClockConfig {
    /// Build a configuration from key/value pairs on top of the defaults.
    ///
    /// Later pairs override earlier ones. Unknown keys are logged and skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        config.apply_pairs(pairs)?;
        Ok(config)
    }

    /// Apply key/value overrides to this configuration.
    ///
    /// Stops at the first invalid pair; pairs before it stay applied.
    pub fn apply_pairs<I, K, V>(
        &mut self,
        pairs: I,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.set(key.as_ref(), value.as_ref())?;
        }
        Ok(())
    }

    /// Apply a single key/value override.
    pub fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        match normalize_key(key).as_str() {
            "backgroundcolor" => self.background_color = parse_color(key, value)?,
            "activecolor" => self.active_color = parse_color(key, value)?,
            "inactivecolor" => self.inactive_color = parse_color(key, value)?,
            "gridcolor" => self.grid_color = parse_color(key, value)?,
            "boundingsquarecolor" => self.bounding_square_color = parse_color(key, value)?,
            "showgrid" => self.show_grid = parse_bool(key, value)?,
            "showboundingsquare" => self.show_bounding_square = parse_bool(key, value)?,
            "autostart" => self.auto_start = parse_bool(key, value)?,
            "cellpadding" => {
                let padding = parse_integer(key, value)?;
                let cells = u32::try_from(padding).map_err(|_| ConfigError::NegativeCellPadding(padding))?;
                if cells > MAX_CELL_PADDING {
                    return Err(ConfigError::CellPaddingTooLarge(padding));
                }
                self.cell_padding = cells;
            }
            "initialvalue" => {
                let initial = parse_integer(key, value)?;
                self.initial_value = ClockValue::new(initial).ok_or(ConfigError::InitialValueOutOfRange(initial))?;
            }
            "strokewidth" => {
                let width = parse_integer(key, value)?;
                self.stroke_width = u32::try_from(width)
                    .ok()
                    .filter(|w| *w >= 1)
                    .ok_or(ConfigError::InvalidStrokeWidth(width))?;
            }
            "offsetmode" => self.offset_mode = parse_offset_mode(value)?,
            _ => warn!("ignoring unknown clock setting `{key}`"),
        }
        Ok(())
    }

    /// Paint styles resolved from the configured colors.
    pub const fn paint_styles(&self) -> PaintStyles {
        PaintStyles {
            background: PaintStyle::solid(self.background_color),
            bounding_square: PaintStyle::solid(self.bounding_square_color),
            grid_lines: PaintStyle::solid(self.grid_color),
            active_segment: PaintStyle::new(self.active_color, self.stroke_width),
            inactive_segment: PaintStyle::new(self.inactive_color, self.stroke_width),
        }
    }

    pub const fn render_flags(&self) -> RenderFlags {
        RenderFlags {
            show_grid: self.show_grid,
            show_bounding_square: self.show_bounding_square,
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn parse_color(
    key: &str,
    value: &str,
) -> Result<Rgb565, ConfigError> {
    parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_bool(
    key: &str,
    value: &str,
) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

fn parse_integer(
    key: &str,
    value: &str,
) -> Result<i64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidInteger {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_offset_mode(value: &str) -> Result<OffsetMode, ConfigError> {
    match normalize_key(value.trim()).as_str() {
        "centered" | "center" => Ok(OffsetMode::Centered),
        "padding" | "paddinganchored" | "anchored" => Ok(OffsetMode::PaddingAnchored),
        _ => Err(ConfigError::InvalidOffsetMode(value.to_owned())),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
