//! Full-window color displays for the desktop.
//!
//! Two programs share this library:
//!
//! - `rgb`: cycles the background around the RGB hue wheel, one step per
//!   frame, with overlay text drawn in the complement color
//! - `count`: a clock counting up from `0:00:00` once per second
//!
//! The binaries only set up logging and the simulator window. Everything that
//! can be tested without a display lives here:
//!
//! - [`hue`]: three-phase hue cycle state machine
//! - [`clock`]: `H:MM:SS` counter
//! - [`pacing`]: fixed vs deadline sleep scheduling for the clock
//! - [`profiling`]: frame rate, tick interval statistics and drift
//! - [`host`]: display/window abstraction and the SDL simulator host
//! - [`screens`]: draw functions and run loops
//! - [`colors`], [`styles`], [`config`]: compile-time constants
//!
//! # Testing
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Run loops are driven by an in-memory host with a virtual clock, so the
//! tests neither open a window nor sleep.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod error;
pub mod host;
pub mod hue;
pub mod pacing;
pub mod profiling;
pub mod screens;
pub mod styles;

pub use clock::ClockState;
pub use error::{Error, Result};
pub use host::{ExitReason, Host, HostEvent, SimulatorHost};
pub use hue::{HueCycle, Phase};
