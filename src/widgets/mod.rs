//! Simulator chrome drawn around the clock.
//!
//! - [`header`]: Header bar with title, view padding and timer state
//! - [`popups`]: Overlay popups for the buzzer and manual reset
//!
//! Every draw function is generic over `DrawTarget<Color = Rgb565>`, uses the
//! const styles from [`styles`](crate::styles) and ignores draw errors with
//! `.ok()` like the rest of the UI code.

mod header;
mod popups;

pub use header::draw_header;
pub use popups::{draw_buzzer_popup, draw_reset_popup};

// =============================================================================
// Test Support
// =============================================================================
