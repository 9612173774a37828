//! Linear-to-display color conversion.
//!
//! Material colors arrive as linear RGB; SVG fills are 8-bit display
//! values, so each channel is gamma-decoded with the simple 2.2 power
//! curve the original renderer used. Alpha is never gamma-decoded.

const GAMMA: f64 = 2.2;

/// Decode one linear channel in [0, 1] to an 8-bit display value.
///
/// Out-of-range inputs are clamped rather than wrapped.
pub fn decode_channel(c: f64) -> u8 {
    let v = 255.0 * c.max(0.0).powf(1.0 / GAMMA);
    v.round().clamp(0.0, 255.0) as u8
}

/// Decode a linear RGB triple to display RGB
pub fn decode_color(linear: [f64; 3]) -> (u8, u8, u8) {
    (
        decode_channel(linear[0]),
        decode_channel(linear[1]),
        decode_channel(linear[2]),
    )
}

/// Alpha passes through unconverted
pub fn opacity(alpha: f64) -> f64 {
    alpha
}

/// Format a display color as an SVG hex color
pub fn hex_color(rgb: (u8, u8, u8)) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_are_fixed_points() {
        assert_eq!(decode_color([0.0, 0.0, 0.0]), (0, 0, 0));
        assert_eq!(decode_color([1.0, 1.0, 1.0]), (255, 255, 255));
    }

    #[test]
    fn mid_gray_decodes_brighter() {
        // 255 * 0.5^(1/2.2) = 186.08
        assert_eq!(decode_color([0.5, 0.5, 0.5]), (186, 186, 186));
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(decode_channel(-0.5), 0);
        assert_eq!(decode_channel(2.0), 255);
    }

    #[test]
    fn alpha_is_untouched() {
        assert_eq!(opacity(0.42), 0.42);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(hex_color((255, 153, 0)), "#FF9900");
        assert_eq!(hex_color((0, 0, 0)), "#000000");
    }
}
