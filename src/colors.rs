//! Color constants and helpers.
//!
//! Both displays draw in `Rgb888` so every channel covers the full `0..=255`
//! range the hue cycle walks through. The simulator window converts to its own
//! output format when presenting.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Pure black. Clock digits.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Sky blue clock background (0, 135, 255).
pub const CLOCK_BACKGROUND: Rgb888 = Rgb888::new(0, 135, 255);

/// Text color for the clock digits.
pub const CLOCK_TEXT: Rgb888 = BLACK;

/// Bitwise complement of a color: `(255 - r, 255 - g, 255 - b)`.
///
/// Used for the overlay text so it always contrasts with the background.
#[inline]
pub fn complement(color: Rgb888) -> Rgb888 {
    Rgb888::new(!color.r(), !color.g(), !color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_black_white() {
        assert_eq!(complement(BLACK), Rgb888::WHITE);
        assert_eq!(complement(Rgb888::WHITE), BLACK);
    }

    #[test]
    fn test_complement_matches_subtraction() {
        for v in 0..=255u8 {
            let color = Rgb888::new(v, v / 2, 255 - v);
            let inverted = complement(color);
            assert_eq!(inverted.r(), 255 - color.r());
            assert_eq!(inverted.g(), 255 - color.g());
            assert_eq!(inverted.b(), 255 - color.b());
        }
    }

    #[test]
    fn test_complement_is_involution() {
        assert_eq!(complement(complement(CLOCK_BACKGROUND)), CLOCK_BACKGROUND);
    }
}
