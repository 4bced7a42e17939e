//! Hex color parsing.
//!
//! Accepts `RRGGBB` and the `RGB` shorthand (each digit doubled, so `03F`
//! is `0033FF`), with or without a leading `#`, in either case. Anything
//! else is rejected before a [`Color`] is built.

use std::str::FromStr;

use crate::{Color, ColorError, ColorResult};

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a hex color string into 8-bit channels.
pub fn parse_hex(input: &str) -> ColorResult<[u8; 3]> {
    let invalid = || ColorError::InvalidHex(input.to_string());
    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();

    let mut nibbles = [0u8; 6];
    match digits.len() {
        3 => {
            for (i, &d) in digits.iter().enumerate() {
                let n = nibble(d).ok_or_else(invalid)?;
                nibbles[i * 2] = n;
                nibbles[i * 2 + 1] = n;
            }
        }
        6 => {
            for (slot, &d) in nibbles.iter_mut().zip(digits) {
                *slot = nibble(d).ok_or_else(invalid)?;
            }
        }
        _ => return Err(invalid()),
    }

    Ok([
        nibbles[0] << 4 | nibbles[1],
        nibbles[2] << 4 | nibbles[3],
        nibbles[4] << 4 | nibbles[5],
    ])
}

impl Color {
    /// Parses `#RRGGBB` / `#RGB` (the `#` is optional).
    ///
    /// ```rust
    /// use tint_core::Color;
    ///
    /// let c = Color::from_hex("#03F").unwrap();
    /// assert_eq!(c.to_hex(), "#0033ff");
    /// ```
    pub fn from_hex(input: &str) -> ColorResult<Self> {
        parse_hex(input).map(Color::from)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::from_hex(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        assert_eq!(parse_hex("#ff8000").unwrap(), [255, 128, 0]);
        assert_eq!(parse_hex("FF8000").unwrap(), [255, 128, 0]);
        assert_eq!(parse_hex("#a1B2c3").unwrap(), [0xa1, 0xb2, 0xc3]);
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(parse_hex("#03F").unwrap(), [0x00, 0x33, 0xff]);
        assert_eq!(parse_hex("fff").unwrap(), [255, 255, 255]);
    }

    #[test]
    fn test_parse_rejects() {
        for bad in ["", "#", "#12", "#1234", "#12345", "#1234567", "#ggg", "#12345z", "##123"] {
            assert_eq!(
                parse_hex(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str_trims() {
        let c: Color = "  #808080\n".parse().unwrap();
        assert_eq!(c.rgb(), [128.0, 128.0, 128.0]);
    }
}
