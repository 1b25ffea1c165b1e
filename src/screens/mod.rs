//! Full-window display loops.
//!
//! - **Hue cycle** ([`rgb`]): cycling background with complement-colored text
//! - **Clock** ([`count`]): `H:MM:SS` counting up once per second
//!
//! Each screen exposes a pure draw function over any `DrawTarget<Color = Rgb888>`
//! and a run loop over a [`Host`](crate::host::Host). Run loops return
//! [`ExitReason::Quit`](crate::host::ExitReason::Quit) on the first quit event
//! instead of exiting the process.

mod count;
mod rgb;

pub use count::{draw_clock_frame, run_clock_screen};
pub use rgb::{draw_hue_frame, run_hue_screen};
