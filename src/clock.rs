//! Count-up clock state.
//!
//! Counts `H:MM:SS` up from zero. Seconds and minutes roll over at 60; hours
//! keep growing with no day rollover, so a 100 hour run reads `100:00:00`.

use core::fmt::{self, Write};
use std::time::Duration;

use heapless::String;

/// Capacity of a rendered label. `u32::MAX` hours is 10 digits plus `:MM:SS`.
pub const LABEL_CAPACITY: usize = 16;

/// Hours, minutes and seconds shown by the clock.
///
/// Minutes and seconds are always in `0..60`; the only ways to build a value
/// are [`ClockState::new`], [`ClockState::from_hms`] and [`ClockState::tick`].
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ClockState {
    hours: u32,
    minutes: u8,
    seconds: u8,
}

impl ClockState {
    /// `0:00:00`.
    pub const fn new() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Clock showing `hours:minutes:seconds`, or `None` if minutes or seconds
    /// are 60 or more.
    pub const fn from_hms(hours: u32, minutes: u8, seconds: u8) -> Option<Self> {
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    #[inline]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Advance by one second, carrying into minutes and hours.
    #[must_use]
    pub const fn tick(self) -> Self {
        let mut next = self;
        next.seconds += 1;
        if next.seconds >= 60 {
            next.seconds = 0;
            next.minutes += 1;
            if next.minutes >= 60 {
                next.minutes = 0;
                next.hours = next.hours.saturating_add(1);
            }
        }
        next
    }

    /// Total displayed seconds.
    #[inline]
    pub const fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    /// Displayed time as a duration.
    #[inline]
    pub const fn elapsed(&self) -> Duration {
        Duration::from_secs(self.total_seconds())
    }

    /// Render as `H:MM:SS` into a stack buffer.
    pub fn label(&self) -> String<LABEL_CAPACITY> {
        let mut s = String::new();
        // Cannot overflow: the longest label is 16 characters
        let _ = write!(s, "{self}");
        s
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(ticks: u32) -> ClockState {
        (0..ticks).fold(ClockState::new(), |clock, _| clock.tick())
    }

    fn at(hours: u32, minutes: u8, seconds: u8) -> ClockState {
        ClockState::from_hms(hours, minutes, seconds).unwrap()
    }

    #[test]
    fn test_clock_starts_at_zero() {
        assert_eq!(ClockState::new(), at(0, 0, 0));
        assert_eq!(ClockState::new().label().as_str(), "0:00:00");
    }

    #[test]
    fn test_from_hms_rejects_out_of_range() {
        assert_eq!(ClockState::from_hms(0, 0, 60), None);
        assert_eq!(ClockState::from_hms(0, 0, 255), None);
        assert_eq!(ClockState::from_hms(0, 60, 0), None);
        assert_eq!(ClockState::from_hms(0, 200, 99), None);
    }

    #[test]
    fn test_from_hms_accepts_bounds() {
        let clock = at(u32::MAX, 59, 59);
        assert_eq!(clock.hours(), u32::MAX);
        assert_eq!(clock.minutes(), 59);
        assert_eq!(clock.seconds(), 59);
    }

    #[test]
    fn test_tick_increments_seconds() {
        assert_eq!(after(1), at(0, 0, 1));
        assert_eq!(after(59), at(0, 0, 59));
    }

    #[test]
    fn test_minute_rollover_at_tick_60() {
        assert_eq!(after(60), at(0, 1, 0));
    }

    #[test]
    fn test_hour_rollover_at_tick_3600() {
        assert_eq!(after(3599), at(0, 59, 59));
        assert_eq!(after(3600), at(1, 0, 0));
    }

    #[test]
    fn test_ticks_stay_in_range() {
        let mut clock = ClockState::new();
        for _ in 0..7300 {
            clock = clock.tick();
            assert!(clock.minutes() < 60 && clock.seconds() < 60, "{clock} out of range");
        }
    }

    #[test]
    fn test_hours_do_not_wrap_at_a_day() {
        assert_eq!(at(23, 59, 59).tick(), at(24, 0, 0));
        assert_eq!(at(99, 59, 59).tick().label().as_str(), "100:00:00");
    }

    #[test]
    fn test_hours_saturate() {
        assert_eq!(at(u32::MAX, 59, 59).tick(), at(u32::MAX, 0, 0));
    }

    #[test]
    fn test_label_zero_pads_minutes_and_seconds() {
        assert_eq!(at(0, 5, 9).label().as_str(), "0:05:09");
        assert_eq!(at(2, 0, 0).label().as_str(), "2:00:00");
        assert_eq!(at(12, 34, 56).label().as_str(), "12:34:56");
    }

    #[test]
    fn test_label_fits_largest_value() {
        let label = at(u32::MAX, 59, 59).label();
        assert_eq!(label.as_str(), "4294967295:59:59");
        assert_eq!(label.len(), LABEL_CAPACITY);
    }

    #[test]
    fn test_display_matches_label() {
        let clock = at(3, 7, 42);
        assert_eq!(clock.to_string(), clock.label().as_str());
    }

    #[test]
    fn test_elapsed_counts_ticks() {
        assert_eq!(after(3725).total_seconds(), 3725);
        assert_eq!(after(90).elapsed(), Duration::from_secs(90));
    }
}
