//! The shot clock: a segment display driven by a countdown timer.
//!
//! [`ShotClock`] is what a host embeds. It forwards control operations to the
//! [`CountdownTimer`] and pushes every value change into the
//! [`SegmentDisplay`] before the host gets a chance to repaint.

use log::info;

use crate::config::ClockConfig;
use crate::display::SegmentDisplay;
use crate::layout::Padding;
use crate::surface::Surface;
use crate::timer::{ClockHost, CountdownTimer, TickOutcome, TickToken, TimerState};
use crate::value::ClockValue;

pub struct ShotClock {
    display: SegmentDisplay,
    timer: CountdownTimer,
    auto_start: bool,
}

impl ShotClock {
    pub fn new(config: &ClockConfig) -> Self {
        info!("shot clock created at {}", config.initial_value);
        Self {
            display: SegmentDisplay::new(config),
            timer: CountdownTimer::new(config.initial_value),
            auto_start: config.auto_start,
        }
    }

    /// Start the countdown if the configuration asks for it. Call once the
    /// host is ready to deliver ticks.
    pub fn attach<H>(
        &mut self,
        host: &mut H,
    ) where
        H: ClockHost + ?Sized,
    {
        if self.auto_start {
            self.start(host);
        }
    }

    pub fn start<H>(
        &mut self,
        host: &mut H,
    ) -> bool
    where
        H: ClockHost + ?Sized,
    {
        self.timer.start(host)
    }

    pub fn stop<H>(
        &mut self,
        host: &mut H,
    ) -> bool
    where
        H: ClockHost + ?Sized,
    {
        self.timer.stop(host)
    }

    /// Stop and zero the clock.
    pub fn reset<H>(
        &mut self,
        host: &mut H,
    ) where
        H: ClockHost + ?Sized,
    {
        self.timer.reset(host);
        self.sync();
    }

    /// Forward a tick the host scheduled earlier.
    pub fn on_tick<H>(
        &mut self,
        token: TickToken,
        host: &mut H,
    ) -> TickOutcome
    where
        H: ClockHost + ?Sized,
    {
        let outcome = self.timer.on_tick(token, host);
        if matches!(outcome, TickOutcome::Counted(_) | TickOutcome::Expired) {
            self.sync();
        }
        outcome
    }

    pub fn resize(
        &mut self,
        width: f32,
        height: f32,
        padding: Padding,
    ) {
        self.display.resize(width, height, padding);
    }

    pub fn render<S>(
        &self,
        surface: &mut S,
    ) where
        S: Surface + ?Sized,
    {
        self.display.render(surface);
    }

    #[inline]
    pub const fn value(&self) -> ClockValue { self.timer.value() }

    #[inline]
    pub const fn state(&self) -> TimerState { self.timer.state() }

    #[inline]
    pub const fn display(&self) -> &SegmentDisplay { &self.display }

    fn sync(&mut self) { self.display.set(self.timer.value()); }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::{RecordingSurface, STYLES};
    use crate::timer::tests::RecordingHost;

    fn clock_at(value: &str) -> ShotClock {
        let config = ClockConfig::from_pairs([("initialValue", value)]).unwrap();
        let mut clock = ShotClock::new(&config);
        clock.resize(180.0, 180.0, Padding::ZERO);
        clock
    }

    fn active_count(clock: &ShotClock) -> usize { clock.display().paths().iter().filter(|p| p.active).count() }

    // -------------------------------------------------------------------------
    // Auto Start Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_attach_auto_starts_by_default() {
        let mut clock = ShotClock::new(&ClockConfig::default());
        let mut host = RecordingHost::default();
        clock.attach(&mut host);

        assert_eq!(clock.state(), TimerState::Running);
        assert_eq!(host.scheduled.len(), 1);
    }

    #[test]
    fn test_attach_without_auto_start() {
        let config = ClockConfig::from_pairs([("autoStart", "false")]).unwrap();
        let mut clock = ShotClock::new(&config);
        let mut host = RecordingHost::default();
        clock.attach(&mut host);

        assert_eq!(clock.state(), TimerState::Idle);
        assert!(host.scheduled.is_empty(), "Nothing scheduled until start");
    }

    // -------------------------------------------------------------------------
    // Display Sync Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_updates_display() {
        let mut clock = clock_at("10");
        let mut host = RecordingHost::default();
        clock.start(&mut host);

        clock.on_tick(host.last_token(), &mut host);

        assert_eq!(clock.value().get(), 9);
        assert_eq!(clock.display().value().get(), 9, "Display follows the timer");
        assert_eq!(active_count(&clock), 5, "9 lights ABCDF only");
    }

    #[test]
    fn test_countdown_to_buzzer() {
        let mut clock = clock_at("2");
        let mut host = RecordingHost::default();
        clock.start(&mut host);

        clock.on_tick(host.last_token(), &mut host);
        let outcome = clock.on_tick(host.last_token(), &mut host);

        assert_eq!(outcome, TickOutcome::Expired);
        assert_eq!(clock.state(), TimerState::Expired);
        assert_eq!(host.buzzes, 1);
        assert_eq!(active_count(&clock), 6, "0 is drawn with six segments");
    }

    #[test]
    fn test_stale_tick_leaves_display() {
        let mut clock = clock_at("15");
        let mut host = RecordingHost::default();
        clock.start(&mut host);
        let token = host.last_token();
        clock.stop(&mut host);

        assert_eq!(clock.on_tick(token, &mut host), TickOutcome::Stale);
        assert_eq!(clock.display().value().get(), 15);
    }

    #[test]
    fn test_reset_zeroes_display() {
        let mut clock = clock_at("24");
        let mut host = RecordingHost::default();
        clock.start(&mut host);

        clock.reset(&mut host);

        assert_eq!(clock.state(), TimerState::Idle);
        assert!(clock.display().value().is_zero());
        assert_eq!(host.cancelled.len(), 1);
    }

    // -------------------------------------------------------------------------
    // Render Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_after_tick() {
        let mut clock = clock_at("11");
        let mut host = RecordingHost::default();
        clock.start(&mut host);
        clock.on_tick(host.last_token(), &mut host);

        let mut surface = RecordingSurface::new(180.0, 180.0);
        clock.render(&mut surface);

        // 10 -> tens CF (2) + units ABCEFG (6)
        assert_eq!(surface.polylines_with(STYLES.active_segment), 8);
        assert_eq!(surface.polylines_with(STYLES.inactive_segment), 6);
    }
}
