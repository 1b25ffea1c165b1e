//! Display host abstraction.
//!
//! The run loops only need a draw target, a way to present it, a quit signal
//! and a clock. [`Host`] bundles those so the loops can run against the SDL
//! simulator window in the binaries and against an in-memory fake in tests.

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::DrawTarget;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

/// Input the run loops care about.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HostEvent {
    /// Window closed (or clicked, when the host quits on click); stop the loop.
    Quit,
    /// Anything else (key presses, mouse movement). Ignored.
    Other,
}

/// Why a run loop returned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExitReason {
    /// The host delivered a quit event.
    Quit,
}

/// Platform display service the screens draw into.
pub trait Host {
    /// Off-screen buffer drawn each frame.
    type Display: DrawTarget<Color = Rgb888>;

    fn display(&mut self) -> &mut Self::Display;

    /// Push the current buffer to the screen.
    fn present(&mut self);

    /// Drain pending input events.
    fn poll_events(&mut self) -> impl Iterator<Item = HostEvent> + '_;

    fn now(&self) -> Instant;

    fn sleep(&mut self, duration: Duration);

    /// Drain all pending events and report whether any of them was a quit.
    fn quit_requested(&mut self) -> bool {
        let mut quit = false;
        for event in self.poll_events() {
            quit |= event == HostEvent::Quit;
        }
        quit
    }
}

/// Desktop host backed by the embedded-graphics SDL simulator.
pub struct SimulatorHost {
    display: SimulatorDisplay<Rgb888>,
    window: Window,
    quit_on_click: bool,
}

impl SimulatorHost {
    /// Create a `size` logical display shown at `scale` physical pixels per pixel.
    pub fn new(title: &str, size: Size, scale: u32) -> Self {
        let display = SimulatorDisplay::new(size);
        let output_settings = OutputSettingsBuilder::new().scale(scale).build();
        let window = Window::new(title, &output_settings);
        log::info!(
            "{title}: {}x{} display at scale {scale} ({}x{} window)",
            size.width,
            size.height,
            size.width * scale,
            size.height * scale,
        );
        Self {
            display,
            window,
            quit_on_click: false,
        }
    }

    /// Also treat a mouse button press anywhere in the window as a quit.
    #[must_use]
    pub fn with_quit_on_click(mut self) -> Self {
        self.quit_on_click = true;
        self
    }
}

/// Translate a simulator window event into the input the run loops care about.
fn map_event(event: SimulatorEvent, quit_on_click: bool) -> HostEvent {
    match event {
        SimulatorEvent::Quit => HostEvent::Quit,
        SimulatorEvent::MouseButtonDown { .. } if quit_on_click => HostEvent::Quit,
        _ => HostEvent::Other,
    }
}

impl Host for SimulatorHost {
    type Display = SimulatorDisplay<Rgb888>;

    fn display(&mut self) -> &mut Self::Display {
        &mut self.display
    }

    fn present(&mut self) {
        self.window.update(&self.display);
    }

    fn poll_events(&mut self) -> impl Iterator<Item = HostEvent> + '_ {
        let quit_on_click = self.quit_on_click;
        self.window.events().map(move |event| map_event(event, quit_on_click))
    }

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
