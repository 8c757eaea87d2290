//! RGBA colors and color string parsing.
//!
//! Color strings are `#rgb`, `#rrggbb`, `#rrggbbaa` hex values or one of a
//! small set of named colors. Stylesheets may add their own names through a
//! `colors` table, see [`crate::style::loader`].

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the alpha channel by `factor` (clamped to `0.0..=1.0`).
    pub fn with_opacity(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self { a: (self.a as f32 * factor).round() as u8, ..self }
    }

    /// Format as `#rrggbbaa`, or `#rrggbb` when fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a color string.
///
/// Supports `#rgb`, `#rrggbb`, `#rrggbbaa` and the named colors `black`,
/// `white`, `red`, `green`, `blue`, `yellow`, `cyan`, `magenta`, `gray`/`grey`,
/// `orange` and `transparent` (case-insensitive).
///
/// Returns `None` if the string cannot be parsed.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "red" => Some(Color::rgb(255, 0, 0)),
        "green" => Some(Color::rgb(0, 128, 0)),
        "blue" => Some(Color::rgb(0, 0, 255)),
        "yellow" => Some(Color::rgb(255, 255, 0)),
        "cyan" => Some(Color::rgb(0, 255, 255)),
        "magenta" => Some(Color::rgb(255, 0, 255)),
        "gray" | "grey" => Some(Color::rgb(128, 128, 128)),
        "orange" => Some(Color::rgb(255, 165, 0)),
        "transparent" => Some(Color::TRANSPARENT),
        _ => None,
    }
}

/// Parse a hex color string (without the leading `#`).
fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        8 => Some(Color::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?)),
        6 => Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        // Short forms expand each digit: 0xA -> 0xAA
        3 => Some(Color::rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        4 => Some(Color::rgba(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
            channel(3..4)? * 17,
        )),
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Hex ──────────────────────────────────────────────────────────

    #[test]
    fn parse_hex_6digit() {
        assert_eq!(parse_color("#ff8800"), Some(Color::rgb(255, 136, 0)));
    }

    #[test]
    fn parse_hex_4digit_has_alpha() {
        assert_eq!(parse_color("#f80c"), Some(Color::rgba(255, 136, 0, 204)));
        assert_eq!(parse_color("#f80"), Some(Color::rgb(255, 136, 0)));
        assert_eq!(parse_color("#f80cc"), None);
    }

    #[test]
    fn parse_hex_8digit_has_alpha() {
        assert_eq!(parse_color("#FF000080"), Some(Color::rgba(255, 0, 0, 128)));
    }

    #[test]
    fn parse_hex_3digit_expanded() {
        assert_eq!(parse_color("#abc"), Some(Color::rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn parse_hex_invalid() {
        assert_eq!(parse_color("#ff00f"), None);
        assert_eq!(parse_color("#gghhii"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    // ── Named ────────────────────────────────────────────────────────

    #[test]
    fn parse_named_case_insensitive() {
        assert_eq!(parse_color("White"), Some(Color::WHITE));
        assert_eq!(parse_color(" grey "), Some(Color::rgb(128, 128, 128)));
        assert_eq!(parse_color("transparent"), Some(Color::TRANSPARENT));
    }

    #[test]
    fn parse_unknown_color() {
        assert_eq!(parse_color("rainbow"), None);
        assert_eq!(parse_color(""), None);
    }

    // ── Helpers ──────────────────────────────────────────────────────

    #[test]
    fn opacity_scales_alpha() {
        assert_eq!(Color::WHITE.with_opacity(0.5).a, 128);
        assert_eq!(Color::WHITE.with_opacity(2.0).a, 255);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::rgb(1, 2, 255).to_hex(), "#0102FF");
        assert_eq!(Color::rgba(0, 0, 0, 16).to_hex(), "#00000010");
    }
}
