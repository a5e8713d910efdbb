//! Color tints for graph nodes.

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Base color of net places (orange).
pub const PLACE_BASE_COLOR: Rgb = Rgb(0xFF, 0xA5, 0x00);

/// Base color of net transitions (blue).
pub const TRANSITION_BASE_COLOR: Rgb = Rgb(0x00, 0x00, 0xFF);

impl Rgb {
    /// Parse `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Move red and green towards 255 by `percentage` (0.0-1.0).
    ///
    /// Blue is left unchanged. Channels are truncated, not rounded.
    pub fn tint(self, percentage: f64) -> Self {
        let percentage = percentage.clamp(0.0, 1.0);
        let lighten = |c: u8| (c as f64 + (255.0 - c as f64) * percentage) as u8;
        Rgb(lighten(self.0), lighten(self.1), self.2)
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Tint a hex color; `None` if `hex` is not `RRGGBB`.
pub fn gradient_color(hex: &str, percentage: f64) -> Option<String> {
    Rgb::from_hex(hex).map(|rgb| rgb.tint(percentage).to_hex())
}
