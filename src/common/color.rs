use std::fmt;

/// RGB color value, emitted as a six-digit hex `srgbClr` attribute.
///
/// # Examples
///
/// ```rust
/// use pitaya::common::RgbColor;
///
/// let accent = RgbColor::new(0x44, 0x72, 0xC4);
/// assert_eq!(accent.to_hex(), "4472C4");
///
/// let red = RgbColor::from_hex("#FF0000").unwrap();
/// assert_eq!(red, RgbColor::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    /// Create a new RGB color from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from a hex string, with or without a leading `#`.
    ///
    /// Returns `None` for anything that is not exactly six hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Format as the six-digit uppercase hex form used by `srgbClr val`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(RgbColor::from_hex("4472C4"), Some(RgbColor::new(0x44, 0x72, 0xC4)));
        assert_eq!(RgbColor::from_hex("#ffffff"), Some(RgbColor::WHITE));
        assert_eq!(RgbColor::from_hex("fff"), None);
        assert_eq!(RgbColor::from_hex("GGGGGG"), None);
    }

    #[test]
    fn test_to_hex_round_trip() {
        let color = RgbColor::new(18, 52, 86);
        assert_eq!(RgbColor::from_hex(&color.to_hex()), Some(color));
    }
}
