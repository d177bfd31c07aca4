/// RGBA color with 0-255 channels, as consumed by the host renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// with alpha builder method taking u8
    pub const fn with_alpha_u8(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    /// with alpha builder method taking a 0-1 fraction
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha_to_u8(alpha);
        self
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(arr: [u8; 4]) -> Self {
        Self::rgba(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Convert a 0-1 alpha fraction to a channel byte, rounding to nearest
pub(crate) fn alpha_to_u8(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Colors of the built-in theme
pub mod palette {
    use super::Color;

    pub const SURFACE: Color = Color::rgb(0x24, 0x27, 0x30);
    pub const WINDOW: Color = Color::rgb(0x32, 0x35, 0x3D);
    pub const TEXT: Color = Color::rgb(0xFF, 0xFF, 0xF0);
    pub const SUBTEXT: Color = Color::rgb(0xC4, 0xC4, 0xBD);
    pub const ACCENT: Color = Color::rgb(0xF5, 0x05, 0x51);
    pub const PROGRESS: Color = Color::rgb(0, 155, 103);
    /// Tint applied to background sprites when no background color is set
    pub const SPRITE: Color = Color::rgb(254, 254, 254);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_rounds_to_nearest() {
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(1.0).a, 255);
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.125).a, 32);
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.0).a, 0);
    }

    #[test]
    fn test_array_conversion() {
        let color: Color = [36, 39, 48, 255].into();
        assert_eq!(color, palette::SURFACE);
        assert_eq!(<[u8; 4]>::from(color), [36, 39, 48, 255]);
    }
}
