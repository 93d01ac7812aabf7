//! CSS color values handed to the drawing surface

use std::fmt;

/// A color in one of the CSS notations the canvas accepts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// `hsla(h, s%, l%, a)`; hue in degrees, saturation/lightness in percent
    Hsla { h: f32, s: f32, l: f32, a: f32 },
    /// `rgba(r, g, b, a)`
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Transparent,
}

impl Color {
    /// Opaque HSL color
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Color::Hsla { h, s, l, a: 1.0 }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Alpha channel (0 for transparent)
    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Hsla { a, .. } | Color::Rgba { a, .. } => a,
            Color::Transparent => 0.0,
        }
    }

    /// CSS string suitable for `fillStyle`/`strokeStyle`/gradient stops
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsla { h, s, l, a } if a >= 1.0 => write!(f, "hsl({h}, {s}%, {l}%)"),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({h}, {s}%, {l}%, {a})"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Transparent => f.write_str("transparent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_notation() {
        assert_eq!(Color::hsl(200.0, 80.0, 60.0).to_css(), "hsl(200, 80%, 60%)");
        assert_eq!(
            Color::hsla(270.5, 80.0, 70.0, 0.1).to_css(),
            "hsla(270.5, 80%, 70%, 0.1)"
        );
        assert_eq!(Color::rgba(0, 0, 0, 0.05).to_css(), "rgba(0, 0, 0, 0.05)");
        assert_eq!(Color::Transparent.to_css(), "transparent");
    }

    #[test]
    fn test_alpha() {
        assert_eq!(Color::hsl(0.0, 0.0, 0.0).alpha(), 1.0);
        assert_eq!(Color::rgba(100, 150, 200, 0.1).alpha(), 0.1);
        assert_eq!(Color::Transparent.alpha(), 0.0);
    }
}
