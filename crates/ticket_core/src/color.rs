//! Colors
//!
//! Colors are plain RGBA floats. The ticket builders never interpret them;
//! they are carried through to whatever backend consumes the draw commands.

use thiserror::Error;

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Errors produced when parsing a color from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string was not 6 or 8 hex digits (with an optional leading `#`)
    #[error("invalid color length {0}, expected #RRGGBB or #RRGGBBAA")]
    InvalidLength(usize),

    /// A non-hex digit was found
    #[error("invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
    pub fn from_hex_str(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))?;

        if digits.len() == 6 {
            Ok(Self::from_hex(value))
        } else {
            let alpha = (value & 0xFF) as f32 / 255.0;
            Ok(Self::from_hex(value >> 8).with_alpha(alpha))
        }
    }

    /// Format as `#RRGGBBAA`
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }

    /// Format the color channels as `#RRGGBB`, dropping alpha
    pub fn to_rgb_hex_string(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_str() {
        assert_eq!(Color::from_hex_str("#ffffff"), Ok(Color::WHITE));
        assert_eq!(Color::from_hex_str("0000ff"), Ok(Color::BLUE));

        let translucent = Color::from_hex_str("#80808040").unwrap();
        assert!((translucent.a - 64.0 / 255.0).abs() < 1e-6);
        assert!((translucent.r - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_str_errors() {
        assert_eq!(
            Color::from_hex_str("#fff"),
            Err(ColorParseError::InvalidLength(3))
        );
        assert!(matches!(
            Color::from_hex_str("#gggggg"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_hex_string_output() {
        assert_eq!(Color::WHITE.to_hex_string(), "#ffffffff");
        assert_eq!(Color::GRAY.with_alpha(0.0).to_rgb_hex_string(), "#808080");
        let parsed = Color::from_hex_str(&Color::ORANGE.to_hex_string()).unwrap();
        assert_eq!(parsed.to_rgba8(), Color::ORANGE.to_rgba8());
    }
}
