/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Components scaled to the 0..=1 range PDF color operators expect.
    pub fn to_unit(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_sets_every_channel() {
        assert_eq!(Color::gray(255), Color::WHITE);
        assert_eq!(Color::rgb(0x4A, 0x90, 0xB5).to_unit()[0], 0x4A as f32 / 255.0);
    }

    #[test]
    fn unit_components() {
        assert_eq!(Color::gray(255).to_unit(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_unit(), [0.0, 0.0, 0.0]);
    }
}
