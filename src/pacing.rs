//! Sleep scheduling between clock ticks.
//!
//! A fixed sleep after each render makes every displayed second last
//! `render_cost + interval` of real time, so the clock falls behind. Deadline
//! pacing sleeps until `start + n * interval` instead, which absorbs the render
//! cost of each frame.

use std::time::{Duration, Instant};

/// How the loop waits between ticks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pacing {
    /// Sleep one full interval after every render. Drifts by the render cost.
    Fixed,
    /// Sleep until the next absolute deadline. Does not drift.
    Deadline,
}

/// Computes how long to sleep before the next tick.
#[derive(Clone, Debug)]
pub struct Ticker {
    pacing: Pacing,
    interval: Duration,
    next_deadline: Instant,
}

impl Ticker {
    /// Start a ticker whose first deadline is one interval after `start`.
    pub fn new(pacing: Pacing, interval: Duration, start: Instant) -> Self {
        Self {
            pacing,
            interval,
            next_deadline: start + interval,
        }
    }

    /// Sleep duration for the tick due next, given the current time.
    ///
    /// With deadline pacing an overrun deadline yields a zero sleep, and the
    /// following deadline stays on the `start + n * interval` grid so the loop catches up.
    pub fn delay(&mut self, now: Instant) -> Duration {
        match self.pacing {
            Pacing::Fixed => self.interval,
            Pacing::Deadline => {
                let delay = self.next_deadline.saturating_duration_since(now);
                self.next_deadline += self.interval;
                delay
            }
        }
    }
}
