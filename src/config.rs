//! Application configuration constants.
//!
//! Everything here is fixed at compile time. Window geometry is expressed as a
//! logical display size plus an integer pixel scale, so the simulator window is
//! `size * scale` physical pixels while the drawing code works in the small
//! logical space the bitmap fonts are designed for.

use std::time::Duration;

use embedded_graphics::geometry::Size;

use crate::pacing::Pacing;

// =============================================================================
// Hue Cycle Display (`rgb`)
// =============================================================================

/// Window title for the hue cycler.
pub const HUE_WINDOW_TITLE: &str = "RGB";

/// Logical display size of the hue cycler (300x300, shown at 600x600).
pub const HUE_SCREEN_SIZE: Size = Size::new(300, 300);

/// Pixel scale for the hue cycler window.
pub const HUE_SCALE: u32 = 2;

/// Text drawn over the cycling background.
pub const OVERLAY_TEXT: &str = "the United States of America";

/// Whether a mouse click in the hue cycler window quits, like closing it.
pub const HUE_QUIT_ON_CLICK: bool = true;

// =============================================================================
// Clock Display (`count`)
// =============================================================================

/// Window title for the count-up clock.
pub const CLOCK_WINDOW_TITLE: &str = "Count";

/// Logical display size of the clock (160x90, shown at 1280x720).
///
/// The simulator cannot go fullscreen, so a large 16:9 window stands in.
pub const CLOCK_SCREEN_SIZE: Size = Size::new(160, 90);

/// Pixel scale for the clock window.
pub const CLOCK_SCALE: u32 = 8;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Time between clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How the clock schedules its sleeps.
pub const CLOCK_PACING: Pacing = Pacing::Deadline;

/// Number of ticks between drift reports in the log (once per displayed minute).
pub const DRIFT_REPORT_TICKS: u64 = 60;
