use std::fmt;
use std::str::FromStr;

use super::names;

/// Error produced when a color literal cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unknown color name {0:?}")]
    UnknownName(String),

    #[error("malformed color literal {0:?}")]
    Malformed(String),
}

/// Immutable sRGB color with 8-bit channels.
///
/// Accepted literal forms (see [`FromStr`]):
/// - a symbolic name from the fixed table (`red`, `DarkSlateGray`, `light-blue`)
/// - `0xRRGGBB` or `#RRGGBB`
/// - a decimal triple `R,G,B`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Looks up a symbolic name. Case, spaces, `-` and `_` are ignored.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        names::lookup(&key)
            .map(|[r, g, b]| Color::new(r, g, b))
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))
    }

    fn from_hex(digits: &str, literal: &str) -> Result<Self, ColorError> {
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Malformed(literal.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::Malformed(literal.to_string()))?;
        Ok(Color::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8))
    }

    fn from_triple(text: &str) -> Result<Self, ColorError> {
        let channels: Vec<&str> = text.split(',').collect();
        let [r, g, b] = channels.as_slice() else {
            return Err(ColorError::Malformed(text.to_string()));
        };
        let channel = |s: &str| {
            s.trim()
                .parse::<u8>()
                .map_err(|_| ColorError::Malformed(text.to_string()))
        };
        Ok(Color::new(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Straight-alpha linear RGBA for GPU upload (opaque).
    pub fn to_linear_rgba(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            1.0,
        ]
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Color::from_hex(hex, s)
        } else if let Some(hex) = s.strip_prefix('#') {
            Color::from_hex(hex, s)
        } else if s.contains(',') {
            Color::from_triple(s)
        } else {
            Color::from_name(s)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve() {
        assert_eq!("red".parse::<Color>(), Ok(Color::new(255, 0, 0)));
        assert_eq!("green".parse::<Color>(), Ok(Color::new(0, 255, 0)));
        assert_eq!("blue".parse::<Color>(), Ok(Color::new(0, 0, 255)));
    }

    #[test]
    fn names_ignore_case_and_separators() {
        let expected = Color::new(47, 79, 79);
        assert_eq!(Color::from_name("DarkSlateGray"), Ok(expected));
        assert_eq!(Color::from_name("dark-slate-gray"), Ok(expected));
        assert_eq!(Color::from_name("dark_slate_gray"), Ok(expected));
    }

    #[test]
    fn hex_forms() {
        assert_eq!("0x102030".parse::<Color>(), Ok(Color::new(0x10, 0x20, 0x30)));
        assert_eq!("#ffa500".parse::<Color>(), Ok(Color::new(255, 165, 0)));
    }

    #[test]
    fn decimal_triple() {
        assert_eq!("12,34,56".parse::<Color>(), Ok(Color::new(12, 34, 56)));
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "blurple".parse::<Color>(),
            Err(ColorError::UnknownName("blurple".to_string()))
        );
    }

    #[test]
    fn malformed_literals_are_errors() {
        assert!(matches!("#12345".parse::<Color>(), Err(ColorError::Malformed(_))));
        assert!(matches!("0xgg0000".parse::<Color>(), Err(ColorError::Malformed(_))));
        assert!(matches!("1,2".parse::<Color>(), Err(ColorError::Malformed(_))));
        assert!(matches!("1,2,300".parse::<Color>(), Err(ColorError::Malformed(_))));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::new(255, 165, 0).to_string(), "#ffa500");
    }

    #[test]
    fn linear_conversion_endpoints() {
        assert_eq!(Color::BLACK.to_linear_rgba(), [0.0, 0.0, 0.0, 1.0]);
        let white = Color::WHITE.to_linear_rgba();
        assert!((white[0] - 1.0).abs() < 1e-6);
    }
}
