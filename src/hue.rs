//! Three-phase RGB hue cycle.
//!
//! The cycle walks the surface of the RGB cube one integer step per frame. In
//! each phase one channel climbs to 255 while the channel that peaked in the
//! previous phase decays to 0; the remaining channel stays at 0.
//!
//! ```text
//! phase   climbs   decays   on climb past 255
//! Red     r        b        -> Green, r = 255, b = 0, g += 1
//! Green   g        r        -> Blue,  g = 255, r = 0, b += 1
//! Blue    b        g        -> Red,   b = 255, g = 0, r += 1
//! ```
//!
//! Exactly one phase runs per frame: a climb (or the phase transition in its
//! place) and at most one decay step, skipped once the decaying channel is 0.
//!
//! Starting from black, the first Red phase takes 256 frames to reach
//! `(255, 1, 0)`. From there the state repeats every [`PERIOD`] frames; black
//! itself is never revisited because every transition seeds the next climbing
//! channel at 1.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::complement;

/// Frames in one full trip around the hue wheel once the cycle is running.
pub const PERIOD: usize = 3 * 255;

/// One of the three color channels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Which channel is currently climbing.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Phase {
    /// Red climbs, blue decays.
    #[default]
    Red,
    /// Green climbs, red decays.
    Green,
    /// Blue climbs, green decays.
    Blue,
}

impl Phase {
    /// Channel that climbs toward 255 during this phase.
    #[inline]
    pub const fn climbing(self) -> Channel {
        match self {
            Self::Red => Channel::Red,
            Self::Green => Channel::Green,
            Self::Blue => Channel::Blue,
        }
    }

    /// Channel that decays toward 0 during this phase.
    #[inline]
    pub const fn decaying(self) -> Channel {
        match self {
            Self::Red => Channel::Blue,
            Self::Green => Channel::Red,
            Self::Blue => Channel::Green,
        }
    }

    /// Channel held at 0 during this phase.
    #[inline]
    pub const fn pinned(self) -> Channel {
        match self {
            Self::Red => Channel::Green,
            Self::Green => Channel::Blue,
            Self::Blue => Channel::Red,
        }
    }

    /// Phase that follows this one.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Numeric index (0, 1, 2).
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// Hue cycle state: the three channels plus the active phase.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct HueCycle {
    r: u8,
    g: u8,
    b: u8,
    phase: Phase,
}

impl HueCycle {
    /// Black, red phase.
    pub const fn new() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            phase: Phase::Red,
        }
    }

    #[inline]
    pub const fn r(&self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn g(&self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn b(&self) -> u8 {
        self.b
    }

    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Value of a single channel.
    #[inline]
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Background fill color for this frame.
    #[inline]
    pub const fn background(&self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }

    /// Overlay text color for this frame, the complement of the background.
    #[inline]
    pub fn overlay(&self) -> Rgb888 {
        complement(self.background())
    }

    /// Advance by one frame.
    #[must_use]
    pub const fn step(self) -> Self {
        let mut next = self;
        match self.phase {
            Phase::Red => {
                if self.r == u8::MAX {
                    next.phase = Phase::Green;
                    next.b = 0;
                    next.g = self.g.saturating_add(1);
                } else {
                    next.r = self.r + 1;
                    next.b = self.b.saturating_sub(1);
                }
            }
            Phase::Green => {
                if self.g == u8::MAX {
                    next.phase = Phase::Blue;
                    next.r = 0;
                    next.b = self.b.saturating_add(1);
                } else {
                    next.g = self.g + 1;
                    next.r = self.r.saturating_sub(1);
                }
            }
            Phase::Blue => {
                if self.b == u8::MAX {
                    next.phase = Phase::Red;
                    next.g = 0;
                    next.r = self.r.saturating_add(1);
                } else {
                    next.b = self.b + 1;
                    next.g = self.g.saturating_sub(1);
                }
            }
        }
        next
    }

    /// Infinite sequence of states starting with `self`.
    pub fn iter(self) -> impl Iterator<Item = Self> {
        core::iter::successors(Some(self), |state| Some(state.step()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
