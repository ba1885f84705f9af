//! Render state tracking for the simulator frame loop.
//!
//! The clock only changes when the timer ticks, the user presses a key or the
//! view is resized, so most frames draw nothing. This module decides which
//! parts of the screen need repainting:
//!
//! | Element | Repainted when |
//! |---------|----------------|
//! | Header | First frame, timer state or padding change, popup close |
//! | Clock | First frame, redraw requested, popup close |
//! | Popup | Every frame while visible |
//!
//! # Popup Cleanup
//!
//! Popups are drawn on top of the clock. When one closes (or is replaced by a
//! different kind) the whole screen is repainted in the same frame so no
//! border remnants survive.

use std::time::Instant;

use crate::config::POPUP_DURATION;
use crate::timer::TimerState;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "BUZZER" popup shown when the countdown hits zero.
    Buzzer(Instant),
    /// "RESET" popup shown after a manual reset.
    Reset(Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Buzzer(t) | Self::Reset(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Discriminant only, for detecting switches.
    #[inline]
    const fn kind(&self) -> u8 {
        match self {
            Self::Buzzer(_) => 0,
            Self::Reset(_) => 1,
        }
    }
}

/// Tracks what needs repainting this frame.
pub struct RenderState {
    /// Clock value, layout or styles changed since the last paint.
    clock_dirty: bool,

    /// Timer state and view padding shown in the header last time it was drawn.
    prev_header: Option<(TimerState, u32)>,

    /// Previous popup kind.
    prev_popup_kind: Option<u8>,

    /// Whether a popup closed or switched this frame.
    popup_just_closed: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            clock_dirty: false,
            prev_header: None,
            prev_popup_kind: None,
            popup_just_closed: false,
            first_frame: true,
        }
    }

    /// Ask for the clock to be repainted on the next frame.
    #[inline]
    pub const fn request_clock(&mut self) { self.clock_dirty = true; }

    /// Check if the clock needs painting this frame.
    #[inline]
    pub const fn need_clock(&self) -> bool { self.clock_dirty || self.first_frame || self.popup_just_closed }

    /// Check if the header needs redrawing for `state` and `padding`.
    pub fn check_header_dirty(
        &mut self,
        state: TimerState,
        padding: u32,
    ) -> bool {
        let current = Some((state, padding));
        let dirty = self.first_frame || self.popup_just_closed || self.prev_header != current;
        self.prev_header = current;
        dirty
    }

    /// Update popup state with the current active popup.
    ///
    /// Detects both popup close (becomes `None`) and popup switch (kind changes).
    pub fn update_popup(
        &mut self,
        popup: Option<&Popup>,
    ) {
        let current_kind = popup.map(Popup::kind);
        let changed = current_kind != self.prev_popup_kind;
        let was_visible = self.prev_popup_kind.is_some();
        self.prev_popup_kind = current_kind;

        if changed && was_visible {
            self.popup_just_closed = true;
        }
    }

    #[inline]
    pub const fn popup_just_closed(&self) -> bool { self.popup_just_closed }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.popup_just_closed = false;
        self.clock_dirty = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn settled() -> RenderState {
        let mut state = RenderState::new();
        state.check_header_dirty(TimerState::Idle, 8);
        state.end_frame();
        state
    }

    // -------------------------------------------------------------------------
    // RenderState Creation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_state_new() {
        let state = RenderState::new();
        assert!(state.is_first_frame(), "is_first_frame should be true initially");
        assert!(state.need_clock(), "Clock must be painted on the first frame");
        assert!(!state.popup_just_closed(), "popup_just_closed should be false initially");
    }

    #[test]
    fn test_render_state_default() {
        let default_state = RenderState::default();
        let new_state = RenderState::new();
        assert_eq!(default_state.is_first_frame(), new_state.is_first_frame());
        assert_eq!(default_state.need_clock(), new_state.need_clock());
    }

    // -------------------------------------------------------------------------
    // Clock Redraw Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_clock_idle_after_first_frame() {
        let state = settled();
        assert!(!state.need_clock(), "Nothing changed, nothing to paint");
    }

    #[test]
    fn test_requests_coalesce_into_one_paint() {
        let mut state = settled();
        state.request_clock();
        state.request_clock();
        state.request_clock();
        assert!(state.need_clock());

        state.end_frame();
        assert!(!state.need_clock(), "One paint serves every request made before it");
    }

    // -------------------------------------------------------------------------
    // Header Dirty Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_header_dirty_first_frame() {
        let mut state = RenderState::new();
        assert!(state.check_header_dirty(TimerState::Running, 8), "Header should be dirty on first frame");
    }

    #[test]
    fn test_header_dirty_on_state_change() {
        let mut state = settled();
        assert!(!state.check_header_dirty(TimerState::Idle, 8), "Same state, no redraw");
        assert!(state.check_header_dirty(TimerState::Running, 8), "Idle -> Running changes the label");
        assert!(!state.check_header_dirty(TimerState::Running, 8));
        assert!(state.check_header_dirty(TimerState::Expired, 8));
    }

    #[test]
    fn test_header_dirty_on_padding_change() {
        let mut state = settled();
        assert!(state.check_header_dirty(TimerState::Idle, 12), "Padding readout changed");
        assert!(!state.check_header_dirty(TimerState::Idle, 12));
    }

    // -------------------------------------------------------------------------
    // Popup State Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_popup_close_forces_full_repaint() {
        let mut state = settled();
        let popup = Popup::Buzzer(Instant::now());
        state.update_popup(Some(&popup));
        assert!(!state.popup_just_closed(), "Showing a popup is not a close");

        state.update_popup(None);
        assert!(state.popup_just_closed());
        assert!(state.need_clock(), "Clock repainted under the closed popup");
        assert!(state.check_header_dirty(TimerState::Idle, 8), "Header repainted too");
    }

    #[test]
    fn test_popup_switch_triggers_cleanup() {
        let mut state = settled();
        state.update_popup(Some(&Popup::Reset(Instant::now())));
        state.update_popup(Some(&Popup::Buzzer(Instant::now())));
        assert!(state.popup_just_closed(), "Switching popups should trigger cleanup");
    }

    #[test]
    fn test_popup_same_kind_no_cleanup() {
        let mut state = settled();
        state.update_popup(Some(&Popup::Buzzer(Instant::now())));
        state.end_frame();
        state.update_popup(Some(&Popup::Buzzer(Instant::now())));
        assert!(!state.popup_just_closed(), "Same popup kind should not trigger cleanup");
    }

    #[test]
    fn test_end_frame_clears_popup_just_closed() {
        let mut state = settled();
        state.update_popup(Some(&Popup::Buzzer(Instant::now())));
        state.update_popup(None);
        state.end_frame();
        assert!(!state.popup_just_closed(), "popup_just_closed should be false after end_frame");
    }

    #[test]
    fn test_fresh_popup_not_expired() {
        assert!(!Popup::Buzzer(Instant::now()).is_expired());
        assert!(!Popup::Reset(Instant::now()).is_expired());
    }
}
