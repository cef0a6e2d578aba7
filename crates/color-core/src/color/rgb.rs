//! 8-bit RGB color type and hex encoding
//!
//! [`Rgb`] is the value every other model converts to and from, and the
//! only type that crosses the crate boundary as a hex string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;

/// A color as three 8-bit sRGB channels.
///
/// Channels are gamma-encoded (sRGB), exactly as they appear in a hex
/// string or a decoded image. Serializes as its canonical `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Neutral mid gray, `#808080`.
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray with all three channels set to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create a color from continuous channels in 0.0..=1.0.
    ///
    /// Rounds (never truncates) and clamps each channel to 0..=255.
    ///
    /// # Example
    /// ```
    /// use color_core::Rgb;
    /// assert_eq!(Rgb::from_unit(1.0, 0.5, -0.2), Rgb::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    /// Channels as floats in 0.0..=1.0.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Canonical uppercase `#RRGGBB` form.
    ///
    /// # Example
    /// ```
    /// use color_core::Rgb;
    /// assert_eq!(Rgb::new(139, 92, 246).to_hex(), "#8B5CF6");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex string, substituting `fallback` when it is malformed.
    ///
    /// # Example
    /// ```
    /// use color_core::Rgb;
    /// assert_eq!(Rgb::from_hex_or("#zzz", Rgb::GRAY), Rgb::GRAY);
    /// assert_eq!(Rgb::from_hex_or("#f00", Rgb::GRAY), Rgb::new(255, 0, 0));
    /// ```
    pub fn from_hex_or(s: &str, fallback: Rgb) -> Self {
        s.parse().unwrap_or(fallback)
    }
}

#[inline]
fn unit_to_u8(value: f64) -> u8 {
    // NaN saturates to 0 in the cast
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Check whether `s` is a 3- or 6-digit hex color, with or without `#`.
pub fn is_valid_hex(s: &str) -> bool {
    s.parse::<Rgb>().is_ok()
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_core::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::WHITE);
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Reject before slicing: from_str_radix accepts a leading '+', and
        // byte slicing would panic on multi-byte characters.
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        let digits = s.as_bytes();
        match digits.len() {
            3 => {
                // Shorthand: digit doubling, 0xF -> 0xFF
                Ok(Self::new(
                    hex_digit(digits[0]) * 17,
                    hex_digit(digits[1]) * 17,
                    hex_digit(digits[2]) * 17,
                ))
            }
            6 => Ok(Self::new(
                (hex_digit(digits[0]) << 4) | hex_digit(digits[1]),
                (hex_digit(digits[2]) << 4) | hex_digit(digits[3]),
                (hex_digit(digits[4]) << 4) | hex_digit(digits[5]),
            )),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// Value of an ASCII hex digit already validated by the caller.
#[inline]
fn hex_digit(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_all_channels() {
        // Every channel value through every position
        for v in 0..=255u8 {
            for rgb in [Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(0, 0, v)] {
                let back: Rgb = rgb.to_hex().parse().unwrap();
                assert_eq!(back, rgb);
            }
        }
    }

    #[test]
    fn test_hex_parsing_6digit() {
        assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::BLACK);
        assert_eq!("#FF0000".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("8b5cf6".parse::<Rgb>().unwrap(), Rgb::new(139, 92, 246));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        assert_eq!("#FFF".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!("#f00".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(
            "#ABC".parse::<Rgb>().unwrap(),
            Rgb::new(0xAA, 0xBB, 0xCC)
        );
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit('G'))
        );
        assert_eq!("#FFFF".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        // from_str_radix would accept the sign
        assert_eq!(
            "+FFFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit('+'))
        );
        // Multi-byte input must not panic
        assert_eq!(
            "#ééé".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit('é'))
        );
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let upper: Rgb = "  #ABCDEF  ".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        let mixed: Rgb = "#AbCdEf".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_canonical_hex_is_uppercase() {
        let c: Rgb = "#abcdef".parse().unwrap();
        assert_eq!(c.to_hex(), "#ABCDEF");
        assert_eq!(c.to_string(), "#ABCDEF");
    }

    #[test]
    fn test_from_unit_rounds_not_truncates() {
        // 0.5 * 255 = 127.5 rounds up
        assert_eq!(Rgb::from_unit(0.5, 0.5, 0.5), Rgb::gray(128));
        // 0.998 * 255 = 254.49 rounds down
        assert_eq!(Rgb::from_unit(0.998, 0.0, 0.0).r, 254);
        assert_eq!(Rgb::from_unit(2.0, -1.0, f64::NAN), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#123"));
        assert!(is_valid_hex("a1b2c3"));
        assert!(!is_valid_hex("#12"));
        assert!(!is_valid_hex("#12345g"));
    }

    #[test]
    fn test_string_conversions_back_serde() {
        assert_eq!(String::from(Rgb::new(255, 0, 128)), "#FF0080");
        let back = Rgb::try_from("#ff0080".to_string()).unwrap();
        assert_eq!(back, Rgb::new(255, 0, 128));
        assert!(Rgb::try_from("nope".to_string()).is_err());
    }
}
