//! Single-slot deadline scheduler for hosts driven by a frame loop.
//!
//! The countdown never has more than one tick in flight, so a host only needs
//! one slot: the pending token and the instant it becomes due. The frame loop
//! calls [`DeadlineScheduler::poll`] once per frame and forwards whatever it
//! returns to the clock.
//!
//! Deadlines are measured from the moment a tick is scheduled, which is the
//! frame that handled the previous tick. Lateness accumulates; nothing tries
//! to catch up.

use std::time::{Duration, Instant};

use log::trace;

use crate::timer::TickToken;

#[derive(Clone, Copy, Debug, Default)]
pub struct DeadlineScheduler {
    slot: Option<(TickToken, Instant)>,
}

impl DeadlineScheduler {
    pub const fn new() -> Self { Self { slot: None } }

    /// Arm the slot, replacing anything already pending.
    pub fn schedule(
        &mut self,
        token: TickToken,
        deadline: Instant,
    ) {
        trace!("tick {} armed", token.id());
        self.slot = Some((token, deadline));
    }

    /// Arm the slot `delay` from `now`.
    pub fn schedule_after(
        &mut self,
        token: TickToken,
        now: Instant,
        delay: Duration,
    ) {
        self.schedule(token, now + delay);
    }

    /// Disarm the slot if it still holds `token`.
    pub fn cancel(
        &mut self,
        token: TickToken,
    ) {
        if let Some((pending, _)) = self.slot
            && pending == token
        {
            trace!("tick {} cancelled", token.id());
            self.slot = None;
        }
    }

    /// Take the pending token once its deadline has passed.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> Option<TickToken> {
        match self.slot {
            Some((token, deadline)) if now >= deadline => {
                self.slot = None;
                Some(token)
            }
            _ => None,
        }
    }

    #[inline]
    pub const fn is_armed(&self) -> bool { self.slot.is_some() }

    /// Deadline of the pending tick, if any.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> { self.slot.map(|(_, deadline)| deadline) }
}

// =============================================================================
// Unit Tests
// =============================================================================
