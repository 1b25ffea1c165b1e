//! Frame and tick timing statistics.
//!
//! - [`FrameMetrics`]: frame intervals and presented frames per second for the
//!   hue cycle, which runs unthrottled
//! - [`TickMetrics`]: tick intervals and drift for the clock
//!
//! # Usage
//!
//! ```ignore
//! let mut frames = FrameMetrics::new(host.now());
//!
//! // In the render loop, after each present:
//! if let Some(fps) = frames.record_frame(host.now()) {
//!     log::debug!("{fps:.0} fps");
//! }
//! ```

use std::time::{Duration, Instant};

/// Length of the window frames are counted over for the fps figure.
pub const FPS_WINDOW: Duration = Duration::from_secs(1);

// =============================================================================
// Interval Statistics
// =============================================================================

/// Last/min/max/average of a series of intervals, in microseconds.
struct IntervalStats {
    last_us: u64,
    min_us: u64,
    max_us: u64,
    /// Exponential moving average
    avg_us: f64,
    count: u64,
}

impl IntervalStats {
    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f64 = 0.1;

    const fn new() -> Self {
        Self {
            last_us: 0,
            min_us: u64::MAX,
            max_us: 0,
            avg_us: 0.0,
            count: 0,
        }
    }

    fn record(&mut self, interval: Duration) {
        let interval_us = interval.as_micros() as u64;
        self.last_us = interval_us;
        self.min_us = self.min_us.min(interval_us);
        self.max_us = self.max_us.max(interval_us);

        if self.count == 0 {
            self.avg_us = interval_us as f64;
        } else {
            self.avg_us = Self::EMA_ALPHA.mul_add(interval_us as f64, (1.0 - Self::EMA_ALPHA) * self.avg_us);
        }

        self.count += 1;
    }
}

// =============================================================================
// Frame Metrics
// =============================================================================

/// Presented-frame statistics for an unthrottled render loop.
pub struct FrameMetrics {
    frames: IntervalStats,
    last_frame: Instant,

    // FPS window (recomputed once per FPS_WINDOW)
    window_start: Instant,
    window_frames: u32,
    current_fps: f32,
}

impl FrameMetrics {
    /// Start measuring from `start` (just before the first frame is drawn).
    pub const fn new(start: Instant) -> Self {
        Self {
            frames: IntervalStats::new(),
            last_frame: start,
            window_start: start,
            window_frames: 0,
            current_fps: 0.0,
        }
    }

    /// Record a frame presented at `now`.
    ///
    /// Returns the frame rate over the last window whenever a full
    /// [`FPS_WINDOW`] has passed, `None` otherwise.
    pub fn record_frame(&mut self, now: Instant) -> Option<f32> {
        self.frames.record(now.saturating_duration_since(self.last_frame));
        self.last_frame = now;

        self.window_frames += 1;
        let window = now.saturating_duration_since(self.window_start);
        if window < FPS_WINDOW {
            return None;
        }
        self.current_fps = self.window_frames as f32 / window.as_secs_f32();
        self.window_frames = 0;
        self.window_start = now;
        Some(self.current_fps)
    }

    /// Frames recorded since start.
    #[inline]
    pub const fn total_frames(&self) -> u64 {
        self.frames.count
    }

    /// Frame rate over the most recent complete window (0 before the first).
    #[inline]
    pub const fn current_fps(&self) -> f32 {
        self.current_fps
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u64 {
        self.frames.avg_us as u64
    }
}

// =============================================================================
// Tick Metrics
// =============================================================================

/// Wall-clock interval statistics for the clock loop.
pub struct TickMetrics {
    ticks: IntervalStats,
    start_time: Instant,
    last_tick: Instant,
}

impl TickMetrics {
    /// Start measuring from `start` (the moment the clock showed `0:00:00`).
    pub const fn new(start: Instant) -> Self {
        Self {
            ticks: IntervalStats::new(),
            start_time: start,
            last_tick: start,
        }
    }

    /// Record a tick that happened at `now`.
    pub fn record_tick(&mut self, now: Instant) {
        self.ticks.record(now.saturating_duration_since(self.last_tick));
        self.last_tick = now;
    }

    /// Ticks recorded since start.
    #[inline]
    pub const fn total_ticks(&self) -> u64 {
        self.ticks.count
    }

    /// Interval between the two most recent ticks, in microseconds.
    #[inline]
    pub const fn tick_interval_us(&self) -> u64 {
        self.ticks.last_us
    }

    /// Shortest and longest tick intervals seen, in microseconds.
    #[inline]
    pub const fn tick_interval_range_us(&self) -> (u64, u64) {
        (self.ticks.min_us, self.ticks.max_us)
    }

    /// Average tick interval in microseconds.
    #[inline]
    pub const fn tick_interval_avg_us(&self) -> u64 {
        self.ticks.avg_us as u64
    }

    /// Real time elapsed since start.
    #[inline]
    pub fn wall_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start_time)
    }

    /// How far `displayed` lags behind the wall clock at `now`.
    pub fn drift(&self, displayed: Duration, now: Instant) -> Duration {
        self.wall_elapsed(now).saturating_sub(displayed)
    }
}
