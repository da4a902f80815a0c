// SPDX-License-Identifier: MPL-2.0
//! Randomness behind an injectable source.
//!
//! The hero reveal and the accent colors are decorative flourishes, so none
//! of this needs to be reproducible. It does need to be testable: callers
//! take a [`RandomSource`] so tests can assert structural properties
//! (alphabet, length, ranges) with a deterministic source.

use iced::Color;

/// Hex digits the accent palette draws from. Restricting to the upper half
/// of the range keeps every generated color bright enough to read against
/// a dark hero background.
pub const ACCENT_ALPHABET: &[u8; 8] = b"89ABCDEF";

/// Number of hex digits in an accent color (without the `#` prefix).
const ACCENT_DIGITS: usize = 6;

/// Byte-level entropy source.
pub trait RandomSource {
    /// Fills `buf` with random bytes.
    fn fill(&mut self, buf: &mut [u8]);
}

/// Operating-system entropy via `getrandom`.
///
/// Entropy failure only costs color variety, so it degrades to a constant
/// byte instead of propagating an error through purely decorative code.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        if getrandom::fill(buf).is_err() {
            buf.fill(0xAB);
        }
    }
}

/// Draws a uniform `f32` in `[0, 1)`.
pub fn uniform<R: RandomSource>(rng: &mut R) -> f32 {
    let mut bytes = [0u8; 4];
    rng.fill(&mut bytes);
    // 24 bits of mantissa keeps the division exact in f32.
    let value = u32::from_le_bytes(bytes) >> 8;
    value as f32 / (1u32 << 24) as f32
}

/// Draws a uniform `f32` in `[lo, hi)`.
pub fn uniform_range<R: RandomSource>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + uniform(rng) * (hi - lo)
}

/// Returns a random accent color as a CSS-style hex string: `#` followed by
/// six digits drawn uniformly from [`ACCENT_ALPHABET`].
pub fn accent_hex<R: RandomSource>(rng: &mut R) -> String {
    let mut bytes = [0u8; ACCENT_DIGITS];
    rng.fill(&mut bytes);

    let mut color = String::with_capacity(1 + ACCENT_DIGITS);
    color.push('#');
    for byte in bytes {
        color.push(ACCENT_ALPHABET[(byte % 8) as usize] as char);
    }
    color
}

/// Returns a random accent color ready for rendering.
pub fn accent_color<R: RandomSource>(rng: &mut R) -> Color {
    let hex = accent_hex(rng);
    // The generated string is structurally valid by construction.
    parse_hex(&hex).unwrap_or(Color::WHITE)
}

/// Parses a `#rrggbb` string into a `Color`.
fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != ACCENT_DIGITS {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed byte pattern; enough to exercise structure.
    pub struct FixedRandom {
        bytes: Vec<u8>,
        cursor: usize,
    }

    impl FixedRandom {
        pub fn new(bytes: Vec<u8>) -> Self {
            Self { bytes, cursor: 0 }
        }
    }

    impl RandomSource for FixedRandom {
        fn fill(&mut self, buf: &mut [u8]) {
            for slot in buf.iter_mut() {
                *slot = self.bytes[self.cursor % self.bytes.len()];
                self.cursor += 1;
            }
        }
    }

    #[test]
    fn accent_hex_has_expected_shape() {
        let mut rng = SystemRandom;
        for _ in 0..64 {
            let hex = accent_hex(&mut rng);
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            for c in hex[1..].chars() {
                assert!(
                    ACCENT_ALPHABET.contains(&(c as u8)),
                    "unexpected digit {c} in {hex}"
                );
            }
        }
    }

    #[test]
    fn accent_hex_maps_bytes_onto_alphabet() {
        let mut rng = FixedRandom::new(vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(accent_hex(&mut rng), "#89ABCD");

        let mut rng = FixedRandom::new(vec![8]);
        // 8 % 8 == 0 wraps back to the first digit.
        assert_eq!(accent_hex(&mut rng), "#888888");
    }

    #[test]
    fn accent_color_is_bright() {
        let mut rng = SystemRandom;
        for _ in 0..32 {
            let color = accent_color(&mut rng);
            // 0x88 / 255 is the darkest channel the alphabet allows.
            assert!(color.r >= 0.5 && color.g >= 0.5 && color.b >= 0.5);
        }
    }

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut rng = SystemRandom;
        for _ in 0..256 {
            let value = uniform(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn uniform_range_respects_bounds() {
        let mut rng = SystemRandom;
        for _ in 0..256 {
            let value = uniform_range(&mut rng, -45.0, 45.0);
            assert!((-45.0..45.0).contains(&value));
        }
    }

    #[test]
    fn parse_hex_round_trips_white() {
        let color = parse_hex("#FFFFFF").unwrap();
        assert_eq!(color, Color::from_rgb8(255, 255, 255));
        assert!(parse_hex("FFFFFF").is_none());
        assert!(parse_hex("#FFF").is_none());
    }
}
