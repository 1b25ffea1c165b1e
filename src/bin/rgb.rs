//! RGB hue cycler.
//!
//! Fills the window with a color that walks around the hue wheel one step per
//! frame and draws "the United States of America" over it in the complement
//! color. Close the window or click in it to quit.

use std::process::ExitCode;

use chroma_displays::config::{HUE_QUIT_ON_CLICK, HUE_SCALE, HUE_SCREEN_SIZE, HUE_WINDOW_TITLE};
use chroma_displays::screens::run_hue_screen;
use chroma_displays::{ExitReason, SimulatorHost};

fn main() -> ExitCode {
    env_logger::init();

    let mut host = SimulatorHost::new(HUE_WINDOW_TITLE, HUE_SCREEN_SIZE, HUE_SCALE);
    if HUE_QUIT_ON_CLICK {
        host = host.with_quit_on_click();
    }
    match run_hue_screen(&mut host) {
        Ok(ExitReason::Quit) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
