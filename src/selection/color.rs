use serde::{Deserialize, Serialize};

/// An RGB colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// The colour reserved for the best route of a display set.
    pub const HIGHLIGHT: Color = Color::new(0.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Converts from hue, saturation and value, each in `[0, 1]`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let hue = hue.rem_euclid(1.0) * 6.0;
        let sector = hue.floor();
        let fraction = hue - sector;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        match sector as u8 {
            0 => Color::new(value, t, p),
            1 => Color::new(q, value, p),
            2 => Color::new(p, value, t),
            3 => Color::new(p, q, value),
            4 => Color::new(t, p, value),
            _ => Color::new(value, p, q),
        }
    }

    /// `count` colours with hues evenly spaced around the colour wheel.
    pub fn spaced(count: usize) -> impl Iterator<Item = Color> {
        (0..count).map(move |index| Color::from_hsv(index as f32 / count as f32, 0.8, 0.9))
    }
}
