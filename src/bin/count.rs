//! Count-up clock.
//!
//! Shows `H:MM:SS` in large digits, starting at `0:00:00` and advancing once
//! per second. Close the window to quit.

use std::process::ExitCode;

use chroma_displays::config::{CLOCK_PACING, CLOCK_SCALE, CLOCK_SCREEN_SIZE, CLOCK_WINDOW_TITLE};
use chroma_displays::screens::run_clock_screen;
use chroma_displays::{ExitReason, SimulatorHost};

fn main() -> ExitCode {
    env_logger::init();

    let mut host = SimulatorHost::new(CLOCK_WINDOW_TITLE, CLOCK_SCREEN_SIZE, CLOCK_SCALE);
    match run_clock_screen(&mut host, CLOCK_PACING) {
        Ok(ExitReason::Quit) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
