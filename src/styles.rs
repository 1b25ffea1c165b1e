//! Pre-computed text styles.
//!
//! Alignment styles are `const` so no `TextStyle` is built per frame. The
//! overlay text changes color every frame, so only its font is exposed and the
//! caller builds `MonoTextStyle::new(OVERLAY_FONT, color)` with the frame color.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_10X20},
    pixelcolor::Rgb888,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::CLOCK_TEXT;

/// Centered both ways: the text position is the middle of the rendered string.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Font for the hue cycler overlay (10x20 pixels).
pub const OVERLAY_FONT: &MonoFont = &FONT_10X20;

/// Clock digits (`ProFont` 24pt) in the clock text color.
pub const CLOCK_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_24_POINT, CLOCK_TEXT);
