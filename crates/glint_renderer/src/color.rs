use glint_math::Interval;

/// Color type alias (RGB values nominally 0-1, may exceed before clamping)
pub type Color = glint_math::Vec3;

/// Build a color from 8-bit channels.
pub fn color_from_rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f64, g as f64, b as f64) / 255.0
}

/// Convert a color to 8-bit RGB.
///
/// Each channel is clamped to [0, 1] and rounded to the nearest step.
/// NaN channels map to 0.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

#[inline]
fn channel_to_u8(c: f64) -> u8 {
    let c = if c.is_nan() { 0.0 } else { Interval::UNIT.clamp(c) };
    (c * 255.0 + 0.5).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb_extremes() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
    }

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(-0.5, 1.7, 42.0)), [0, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(f64::NAN, 0.0, 1.0)), [0, 0, 255]);
    }

    #[test]
    fn test_color_to_rgb_rounds() {
        // 0.5 * 255 = 127.5 rounds up
        assert_eq!(color_to_rgb(Color::splat(0.5)), [128, 128, 128]);
        assert_eq!(color_to_rgb(Color::new(0.1, 0.25, 0.75)), [26, 64, 191]);
    }

    #[test]
    fn test_rgb8_round_trip() {
        let c = color_from_rgb8(0x12, 0xab, 0xff);
        assert_eq!(color_to_rgb(c), [0x12, 0xab, 0xff]);
    }
}
