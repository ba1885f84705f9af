// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in layout calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->u32 where we know sign is positive
#![allow(clippy::module_name_repetitions)] // ClockConfig in config, ClockValue in value

//! 24-second basketball shot clock.
//!
//! A two-digit seven-segment display laid out on an 18×18 square grid, plus a
//! one-second countdown timer that drives it. The crate is split into a
//! platform-independent engine and a small amount of simulator chrome:
//!
//! # Engine
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Square canvas, cell size and offsets for a view size |
//! | [`segments`] | Segment polylines in grid space, mapped to pixels |
//! | [`decoder`] | Which segments light up for a digit or value |
//! | [`renderer`] | Paint pass onto an abstract [`surface::Surface`] |
//! | [`display`] | Layout, paths, value and styles for one view |
//! | [`timer`] | Countdown state machine talking to a [`timer::ClockHost`] |
//! | [`clock`] | The [`clock::ShotClock`] a host embeds |
//!
//! # Host Support
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] / [`settings`] | Key/value and TOML configuration |
//! | [`scheduler`] | Single-slot tick deadlines for frame loops |
//! | [`render`] | Redraw coalescing and popup tracking |
//! | [`widgets`] / [`styles`] | Header bar and popups drawn with embedded-graphics |
//!
//! # Drawing
//!
//! The engine works in `f32` view coordinates and only rounds to pixels in
//! [`surface::DrawTargetSurface`], the adapter for any embedded-graphics
//! `DrawTarget<Color = Rgb565>`. Nothing in the engine allocates on the heap:
//! segment points and path lists live in `heapless::Vec`.
//!
//! # Example
//!
//! ```ignore
//! let config = ClockConfig::from_pairs([("initialValue", "14"), ("showGrid", "true")])?;
//! let mut clock = ShotClock::new(&config);
//! clock.resize(320.0, 214.0, Padding::uniform(8.0));
//! clock.attach(&mut host);
//! clock.render(&mut DrawTargetSurface::new(&mut display));
//! ```

pub mod clock;
pub mod colors;
pub mod config;
pub mod decoder;
pub mod display;
pub mod error;
pub mod layout;
pub mod render;
pub mod renderer;
pub mod scheduler;
pub mod segments;
pub mod settings;
pub mod styles;
pub mod surface;
pub mod timer;
pub mod value;
pub mod widgets;

pub use clock::ShotClock;
pub use config::ClockConfig;
pub use error::ConfigError;
pub use layout::{OffsetMode, Padding};
pub use surface::{DrawTargetSurface, Surface};
pub use timer::{ClockHost, TickToken, TimerState};
pub use value::ClockValue;
