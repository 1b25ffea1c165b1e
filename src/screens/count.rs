//! Count-up clock screen.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │                                    │  Background: sky blue (0, 135, 255)
//! │              0:00:42               │  Black ProFont digits
//! │                                    │
//! └────────────────────────────────────┘
//! ```
//!
//! Each iteration renders, presents, sleeps until the next tick is due, ticks
//! and then polls for quit. How long the sleep is depends on [`Pacing`].

use core::fmt::Debug;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::clock::ClockState;
use crate::colors::CLOCK_BACKGROUND;
use crate::config::{DRIFT_REPORT_TICKS, TICK_INTERVAL};
use crate::error::{Error, Result};
use crate::host::{ExitReason, Host};
use crate::pacing::{Pacing, Ticker};
use crate::profiling::TickMetrics;
use crate::styles::{CENTERED, CLOCK_STYLE};

/// Draw the clock label centered on the clock background.
pub fn draw_clock_frame<D>(
    display: &mut D,
    clock: &ClockState,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    display.clear(CLOCK_BACKGROUND)?;

    let label = clock.label();
    let center = display.bounding_box().center();
    Text::with_text_style(&label, center, CLOCK_STYLE, CENTERED).draw(display)?;
    Ok(())
}

/// Run the clock until the host reports a quit.
pub fn run_clock_screen<H: Host>(
    host: &mut H,
    pacing: Pacing,
) -> Result<ExitReason>
where
    <H::Display as DrawTarget>::Error: Debug,
{
    let mut clock = ClockState::new();
    let start = host.now();
    let mut ticker = Ticker::new(pacing, TICK_INTERVAL, start);
    let mut metrics = TickMetrics::new(start);
    log::info!("clock started ({pacing:?} pacing)");

    loop {
        draw_clock_frame(host.display(), &clock).map_err(Error::draw)?;
        host.present();

        let delay = ticker.delay(host.now());
        host.sleep(delay);

        clock = clock.tick();
        let now = host.now();
        metrics.record_tick(now);
        log::trace!("{clock} (tick took {} us)", metrics.tick_interval_us());

        if metrics.total_ticks() % DRIFT_REPORT_TICKS == 0 {
            let (min_us, max_us) = metrics.tick_interval_range_us();
            log::debug!(
                "{clock}: drift {} ms, tick avg {} us, min {min_us} us, max {max_us} us",
                metrics.drift(clock.elapsed(), now).as_millis(),
                metrics.tick_interval_avg_us(),
            );
        }

        if host.quit_requested() {
            log::info!("quit at {clock} after {} ticks", metrics.total_ticks());
            return Ok(ExitReason::Quit);
        }
    }
}
