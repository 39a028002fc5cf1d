/// An opaque RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// Pure white.
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from its channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Weighted mean of `self` and `other`.
    ///
    /// Each channel interpolates linearly: fraction 0 returns `self`,
    /// fraction 1 returns `other`. Fractions outside `[0, 1]` extrapolate
    /// along the same line; channels saturate at 0 and 255.
    pub fn mean(self, other: Color, fraction: f64) -> Color {
        fn mix(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Color {
            r: mix(self.r, other.r, fraction),
            g: mix(self.g, other.g, fraction),
            b: mix(self.b, other.b, fraction),
        }
    }
}
