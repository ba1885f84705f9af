//! Countdown state machine.
//!
//! The timer never sleeps or spawns anything. It asks its [`ClockHost`] to
//! deliver a tick after [`TICK_INTERVAL`] and the host later hands that tick
//! back through [`CountdownTimer::on_tick`]. Every scheduled tick carries a
//! [`TickToken`]; only the token currently held in the single pending slot is
//! honoured, so a tick that was cancelled but still got delivered is dropped.
//!
//! # State Transitions
//!
//! | From | Event | To |
//! |------|-------|----|
//! | Idle / Expired | `start` | Running |
//! | Running | tick, value > 1 | Running |
//! | Running | tick, value 1 -> 0 | Expired (buzzer) |
//! | Running | `stop` | Idle |
//! | any | `reset` | Idle, value 0 |

use std::time::Duration;

use log::{debug, info};

use crate::config::TICK_INTERVAL;
use crate::value::ClockValue;

// =============================================================================
// Host Interface
// =============================================================================

/// Identifies one scheduled tick.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TickToken(u32);

impl TickToken {
    #[inline]
    pub const fn id(self) -> u32 { self.0 }
}

/// Everything the timer needs from the platform it runs on.
pub trait ClockHost {
    /// Deliver `token` back to [`CountdownTimer::on_tick`] after `delay`.
    fn schedule_tick(
        &mut self,
        token: TickToken,
        delay: Duration,
    );

    /// Forget a previously scheduled tick.
    fn cancel_tick(
        &mut self,
        token: TickToken,
    );

    /// The displayed value changed.
    fn request_redraw(&mut self);

    /// One-shot sound for the end of the countdown.
    fn play_buzzer(&mut self);
}

// =============================================================================
// Timer
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Expired,
}

impl TimerState {
    /// Short label for status displays.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUN",
            Self::Expired => "EXPIRED",
        }
    }
}

/// What a delivered tick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Token was cancelled or the timer is not running.
    Stale,
    /// Value went down and another tick is pending.
    Counted(ClockValue),
    /// Value reached zero and the buzzer played.
    Expired,
    /// Timer was started at zero; it stops without a sound.
    AlreadyZero,
}

pub struct CountdownTimer {
    value: ClockValue,
    state: TimerState,
    pending: Option<TickToken>,
    next_token: u32,
}

impl CountdownTimer {
    pub const fn new(value: ClockValue) -> Self {
        Self {
            value,
            state: TimerState::Idle,
            pending: None,
            next_token: 0,
        }
    }

    /// Begin counting down. Returns `false` if the timer was already running.
    pub fn start<H>(
        &mut self,
        host: &mut H,
    ) -> bool
    where
        H: ClockHost + ?Sized,
    {
        if self.state == TimerState::Running {
            debug!("start ignored, timer already running");
            return false;
        }

        self.state = TimerState::Running;
        self.schedule(host);
        info!("countdown started at {}", self.value);
        true
    }

    /// Pause the countdown, keeping the value. Returns `false` if it was not running.
    pub fn stop<H>(
        &mut self,
        host: &mut H,
    ) -> bool
    where
        H: ClockHost + ?Sized,
    {
        if self.state != TimerState::Running {
            debug!("stop ignored, timer is {:?}", self.state);
            return false;
        }

        self.cancel_pending(host);
        self.state = TimerState::Idle;
        info!("countdown stopped at {}", self.value);
        true
    }

    /// Cancel any pending tick and zero the value.
    pub fn reset<H>(
        &mut self,
        host: &mut H,
    ) where
        H: ClockHost + ?Sized,
    {
        self.cancel_pending(host);
        self.state = TimerState::Idle;
        self.value = ClockValue::ZERO;
        host.request_redraw();
        info!("countdown reset");
    }

    /// Handle a tick delivered by the host.
    pub fn on_tick<H>(
        &mut self,
        token: TickToken,
        host: &mut H,
    ) -> TickOutcome
    where
        H: ClockHost + ?Sized,
    {
        if self.state != TimerState::Running || self.pending != Some(token) {
            debug!("dropping stale tick {}", token.id());
            return TickOutcome::Stale;
        }
        self.pending = None;

        let Some(value) = self.value.decremented() else {
            self.state = TimerState::Expired;
            debug!("tick at zero, nothing left to count");
            return TickOutcome::AlreadyZero;
        };

        self.value = value;
        host.request_redraw();

        if value.is_zero() {
            self.state = TimerState::Expired;
            host.play_buzzer();
            info!("countdown expired");
            TickOutcome::Expired
        } else {
            self.schedule(host);
            TickOutcome::Counted(value)
        }
    }

    #[inline]
    pub const fn value(&self) -> ClockValue { self.value }

    #[inline]
    pub const fn state(&self) -> TimerState { self.state }

    /// Token of the tick currently waiting to be delivered.
    #[inline]
    pub const fn pending(&self) -> Option<TickToken> { self.pending }

    fn schedule<H>(
        &mut self,
        host: &mut H,
    ) where
        H: ClockHost + ?Sized,
    {
        let token = TickToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(token);
        host.schedule_tick(token, TICK_INTERVAL);
    }

    fn cancel_pending<H>(
        &mut self,
        host: &mut H,
    ) where
        H: ClockHost + ?Sized,
    {
        if let Some(token) = self.pending.take() {
            host.cancel_tick(token);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
