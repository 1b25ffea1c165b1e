//! Hue cycle screen: full-screen color fill with complement-colored text.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │                                    │  Background: (r, g, b)
//! │    the United States of America    │  Text: (255-r, 255-g, 255-b)
//! │                                    │
//! └────────────────────────────────────┘
//! ```
//!
//! The loop never sleeps; the cycle advances one step per presented frame.
//! The achieved frame rate is logged once per second.

use core::fmt::Debug;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::OVERLAY_TEXT;
use crate::error::{Error, Result};
use crate::host::{ExitReason, Host};
use crate::hue::HueCycle;
use crate::profiling::FrameMetrics;
use crate::styles::{CENTERED, OVERLAY_FONT};

/// Draw one hue cycle frame.
pub fn draw_hue_frame<D>(
    display: &mut D,
    state: &HueCycle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    display.clear(state.background())?;

    let style = MonoTextStyle::new(OVERLAY_FONT, state.overlay());
    let center = display.bounding_box().center();
    Text::with_text_style(OVERLAY_TEXT, center, style, CENTERED).draw(display)?;
    Ok(())
}

/// Run the hue cycle until the host reports a quit.
pub fn run_hue_screen<H: Host>(host: &mut H) -> Result<ExitReason>
where
    <H::Display as DrawTarget>::Error: Debug,
{
    let mut metrics = FrameMetrics::new(host.now());
    run_hue_loop(host, &mut metrics)
}

fn run_hue_loop<H: Host>(
    host: &mut H,
    metrics: &mut FrameMetrics,
) -> Result<ExitReason>
where
    <H::Display as DrawTarget>::Error: Debug,
{
    let mut state = HueCycle::new();
    log::info!("hue cycle started");

    loop {
        draw_hue_frame(host.display(), &state).map_err(Error::draw)?;
        host.present();

        if let Some(fps) = metrics.record_frame(host.now()) {
            log::debug!("{fps:.0} fps (avg frame {} us)", metrics.frame_time_avg_us());
        }

        let next = state.step();
        if next.phase() != state.phase() {
            log::debug!(
                "frame {}: phase {} -> {} ({:?}) at ({}, {}, {})",
                metrics.total_frames(),
                state.phase().index(),
                next.phase().index(),
                next.phase(),
                next.r(),
                next.g(),
                next.b(),
            );
        }
        state = next;

        if host.quit_requested() {
            log::info!(
                "quit after {} frames ({:.0} fps)",
                metrics.total_frames(),
                metrics.current_fps(),
            );
            return Ok(ExitReason::Quit);
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use std::time::Duration;

    use crate::host::fake::{FakeHost, blank_display, frame_digest};
    use crate::hue::PERIOD;

    fn mock() -> MockDisplay<Rgb888> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    /// Every pixel that is not background, as (point, color).
    fn foreground(display: &MockDisplay<Rgb888>, background: Rgb888) -> Vec<(Point, Rgb888)> {
        display
            .bounding_box()
            .points()
            .filter_map(|p| display.get_pixel(p).map(|c| (p, c)))
            .filter(|(_, c)| *c != background)
            .collect()
    }

    #[test]
    fn test_frame_fills_background() {
        let state = HueCycle::new().iter().nth(300).unwrap();
        let mut display = mock();
        draw_hue_frame(&mut display, &state).unwrap();

        for corner in [Point::new(0, 0), Point::new(63, 0), Point::new(0, 63), Point::new(63, 63)] {
            assert_eq!(display.get_pixel(corner), Some(state.background()));
        }
    }

    #[test]
    fn test_text_uses_complement_color() {
        for state in HueCycle::new().iter().step_by(97).take(20) {
            let mut display = mock();
            draw_hue_frame(&mut display, &state).unwrap();

            let text = foreground(&display, state.background());
            assert!(!text.is_empty(), "overlay text should be visible for {state:?}");
            assert!(text.iter().all(|(_, c)| *c == state.overlay()));
        }
    }

    #[test]
    fn test_text_is_vertically_centered() {
        let state = HueCycle::new();
        let mut display = mock();
        draw_hue_frame(&mut display, &state).unwrap();

        let center_y = display.bounding_box().center().y;
        for (p, _) in foreground(&display, state.background()) {
            assert!((p.y - center_y).abs() <= 12, "text pixel {p:?} too far from center row {center_y}");
        }
    }

    #[test]
    fn test_run_presents_successive_states() {
        let frames = PERIOD + 300;
        let mut host = FakeHost::new(frames);
        let exit = run_hue_screen(&mut host).unwrap();

        assert_eq!(exit, ExitReason::Quit);
        let expected: Vec<Rgb888> = HueCycle::new()
            .iter()
            .take(frames)
            .map(|state| state.background())
            .collect();
        assert_eq!(host.presented, expected);
    }

    #[test]
    fn test_run_frames_match_drawn_states() {
        let mut host = FakeHost::new(5);
        run_hue_screen(&mut host).unwrap();

        let expected: Vec<u64> = HueCycle::new()
            .iter()
            .take(5)
            .map(|state| {
                let mut display = blank_display();
                draw_hue_frame(&mut display, &state).unwrap();
                frame_digest(&display)
            })
            .collect();
        assert_eq!(host.frames, expected);
    }

    #[test]
    fn test_run_measures_frame_rate() {
        // 10 ms per frame: 100 frames in each second
        let mut host = FakeHost::new(250).with_render_cost(Duration::from_millis(10));
        let mut metrics = FrameMetrics::new(host.now());
        run_hue_loop(&mut host, &mut metrics).unwrap();

        assert_eq!(metrics.total_frames(), 250);
        assert_eq!(metrics.current_fps(), 100.0);
        assert_eq!(metrics.frame_time_avg_us(), 10_000);
    }

    #[test]
    fn test_run_stops_on_first_quit() {
        let mut host = FakeHost::new(1);
        run_hue_screen(&mut host).unwrap();
        assert_eq!(host.presented, vec![Rgb888::BLACK]);
    }

    #[test]
    fn test_run_never_sleeps() {
        let mut host = FakeHost::new(10);
        run_hue_screen(&mut host).unwrap();
        assert!(host.sleeps.is_empty());
    }
}
