use super::{inv_lerp, lerp};
use crate::Float;

/// Convert the given 8-bit channel to a floating point channel.
#[inline]
pub(crate) fn from_8bit(channel: u8) -> Float {
    channel as Float / 255.0
}

/// Convert the floating point channel to its rounded integer representation.
///
/// The result is not clamped, so out-of-gamut channels produce integers
/// outside `0..=255`. Not-a-number becomes zero.
#[inline]
pub(crate) fn to_int(channel: Float) -> i32 {
    (channel * 255.0).round() as i32
}

/// Convert the floating point channel to 8 bits, clamping to `0x00..=0xff`.
#[inline]
pub(crate) fn to_8bit(channel: Float) -> u8 {
    to_int(channel).clamp(0, 255) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-corrected sRGB channel to linear light.
///
/// The transfer function is applied as is, with the linear segment covering
/// all values up to and including 0.04045, negative ones included.
#[inline]
pub(crate) fn to_linear(value: Float) -> Float {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear-light channel to gamma-corrected sRGB.
#[inline]
pub(crate) fn from_linear(value: Float) -> Float {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[inline]
fn max3(rgb: &[Float; 3]) -> Float {
    rgb[0].max(rgb[1].max(rgb[2]))
}

#[inline]
fn min3(rgb: &[Float; 3]) -> Float {
    rgb[0].min(rgb[1].min(rgb[2]))
}

/// Determine the hue in degrees `0..360`.
///
/// The hue is not-a-number for achromatic colors, i.e., when all three
/// channels are equal. Otherwise, the ordering of the three channels selects
/// one of six 60º sextants, and the middle channel's relative position between
/// the other two selects the angle within that sextant.
pub(crate) fn hue(rgb: &[Float; 3]) -> Float {
    let [r, g, b] = *rgb;

    if r == g && g == b {
        return Float::NAN;
    }

    if g > r {
        if b > g {
            // b > g > r
            lerp(180.0, 240.0, inv_lerp(b, r, g))
        } else if r > b {
            // g > r > b
            lerp(60.0, 120.0, inv_lerp(g, b, r))
        } else {
            // g >= b >= r
            lerp(180.0, 120.0, inv_lerp(g, r, b))
        }
    } else if b > r {
        // b > r >= g
        lerp(300.0, 240.0, inv_lerp(b, g, r))
    } else if g >= b {
        // r >= g >= b
        lerp(60.0, 0.0, inv_lerp(r, b, g))
    } else {
        // r >= b > g
        lerp(300.0, 360.0, inv_lerp(r, g, b))
    }
}

/// Determine HSV's value, i.e., the largest channel.
#[inline]
pub(crate) fn value(rgb: &[Float; 3]) -> Float {
    max3(rgb)
}

/// Determine HSV's saturation.
///
/// The saturation is not-a-number for black, since the ratio between the
/// smallest and largest channel is undefined.
#[inline]
pub(crate) fn vsaturation(rgb: &[Float; 3]) -> Float {
    let high = max3(rgb);
    let low = min3(rgb);
    (high - low) / high
}

/// Determine HSL's luminosity, i.e., the mean of the smallest and largest
/// channel.
#[inline]
pub(crate) fn luminosity(rgb: &[Float; 3]) -> Float {
    (min3(rgb) + max3(rgb)) / 2.0
}

/// Determine HSL's saturation.
///
/// The saturation is not-a-number for black and white, since the denominator
/// becomes zero.
#[inline]
pub(crate) fn lsaturation(rgb: &[Float; 3]) -> Float {
    let high = max3(rgb);
    let low = min3(rgb);
    (high - low) / (1.0 - luminosity(rgb).mul_add(2.0, -1.0).abs())
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert hue, saturation, and value to RGB.
///
/// A not-a-number hue or saturation produces a gray with the given value. Hues
/// are reduced with the remainder operator, which keeps the sign of negative
/// hues. Those and saturation or value outside `0..=1` result in out-of-gamut
/// channels.
pub(crate) fn hsv_to_rgb(hue: Float, saturation: Float, value: Float) -> [Float; 3] {
    if hue.is_nan() || saturation.is_nan() {
        return [value, value, value];
    }

    let low = (1.0 - saturation) * value;
    let high = value;
    let position = 1.0 - ((hue % 120.0) - 60.0).abs() / 60.0;
    let mid = lerp(low, high, position);

    let hue = hue % 360.0;
    if hue < 60.0 {
        [high, mid, low]
    } else if hue < 120.0 {
        [mid, high, low]
    } else if hue < 180.0 {
        [low, high, mid]
    } else if hue < 240.0 {
        [low, mid, high]
    } else if hue < 300.0 {
        [mid, low, high]
    } else {
        [high, low, mid]
    }
}

/// Convert HSL's luminosity and saturation to HSV's value and saturation.
///
/// This function returns the pair `[saturation, value]`.
pub(crate) fn hsl_to_hsv(luminosity: Float, saturation: Float) -> [Float; 2] {
    let value = saturation.mul_add(luminosity.min(1.0 - luminosity), luminosity);
    if value == 0.0 {
        [0.0, 0.0]
    } else {
        [2.0 * (1.0 - luminosity / value), value]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Replace the hue while preserving value and saturation.
///
/// Not-a-number turns the color into a gray with the same value. For a color
/// without saturation, the saturation is forced to 1 so that the new hue
/// becomes visible.
pub(crate) fn with_hue(rgb: &[Float; 3], hue: Float) -> [Float; 3] {
    let value = value(rgb);
    if hue.is_nan() {
        return [value, value, value];
    }

    let saturation = vsaturation(rgb);
    let saturation = if saturation == 0.0 || saturation.is_nan() {
        1.0
    } else {
        saturation
    };

    hsv_to_rgb(hue, saturation, value)
}

/// Replace the value while preserving hue and saturation.
///
/// Channels are scaled relative to the current value. Grays, including black,
/// simply become the gray with the new value.
pub(crate) fn with_value(rgb: &[Float; 3], value: Float) -> [Float; 3] {
    let saturation = vsaturation(rgb);
    if saturation == 0.0 || saturation.is_nan() {
        return [value, value, value];
    }

    let [r, g, b] = *rgb;
    let factor = value / max3(rgb);
    [r * factor, g * factor, b * factor]
}

/// Replace the HSV saturation while preserving hue and value.
///
/// Channels move relative to the current saturation. Since grays have no hue,
/// saturating a gray produces a red.
pub(crate) fn with_vsaturation(rgb: &[Float; 3], saturation: Float) -> [Float; 3] {
    let previous = vsaturation(rgb);
    let value = value(rgb);

    if previous == 0.0 || previous.is_nan() {
        let other = (1.0 - saturation) * value;
        return [value, other, other];
    }

    let [r, g, b] = *rgb;
    let factor = saturation / previous;
    [
        lerp(value, r, factor),
        lerp(value, g, factor),
        lerp(value, b, factor),
    ]
}

/// Replace HSL's luminosity while preserving hue and HSL's saturation.
///
/// Luminosity 0 always is black and luminosity 1 always is white. Colors
/// without a defined HSL saturation, notably grays, black, and white, become
/// the gray with the new luminosity.
pub(crate) fn with_luminosity(rgb: &[Float; 3], luminosity: Float) -> [Float; 3] {
    if luminosity == 0.0 {
        return [0.0, 0.0, 0.0];
    } else if luminosity == 1.0 {
        return [1.0, 1.0, 1.0];
    }

    let saturation = lsaturation(rgb);
    if saturation == 0.0 || saturation.is_nan() {
        return [luminosity, luminosity, luminosity];
    }

    let [vsat, value] = hsl_to_hsv(luminosity, saturation);
    with_vsaturation(&with_value(rgb, value), vsat)
}

/// Replace HSL's saturation while preserving hue and luminosity.
///
/// Not-a-number turns the color into black or white, depending on the current
/// luminosity. Zero turns it into a gray. If the current hue is undefined, it
/// defaults to red.
pub(crate) fn with_lsaturation(rgb: &[Float; 3], saturation: Float) -> [Float; 3] {
    let luminosity = luminosity(rgb);

    if saturation.is_nan() {
        return if luminosity <= 0.5 {
            [0.0, 0.0, 0.0]
        } else {
            [1.0, 1.0, 1.0]
        };
    } else if saturation == 0.0 {
        return [luminosity, luminosity, luminosity];
    }

    let rgb = if hue(rgb).is_nan() {
        [1.0, 0.0, 0.0]
    } else {
        *rgb
    };

    let [vsat, value] = hsl_to_hsv(luminosity, saturation);
    if value == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    with_vsaturation(&with_value(&rgb, value), vsat)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    fn assert_rgb(actual: [Float; 3], expected: [Float; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_close_enough!(*a, *e);
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(to_int(1.0), 255);
        assert_eq!(to_int(from_8bit(128)), 128);
        assert_eq!(to_int(1.5), 383);
        assert_eq!(to_int(-0.2), -51);
        assert_eq!(to_8bit(1.5), 255);
        assert_eq!(to_8bit(-0.2), 0);
        assert_eq!(to_8bit(Float::NAN), 0);

        for channel in 0..=255_u8 {
            assert_eq!(to_8bit(from_8bit(channel)), channel);
        }
    }

    #[test]
    fn test_linear() {
        assert_close_enough!(to_linear(0.0), 0.0);
        assert_close_enough!(to_linear(1.0), 1.0);
        assert_close_enough!(to_linear(0.04045), 0.04045 / 12.92);
        assert_close_enough!(from_linear(0.0031308), 0.0031308 * 12.92);
        assert!((to_linear(0.5) - 0.2140).abs() < 1e-4);
        assert!((from_linear(0.2140) - 0.5).abs() < 1e-4);

        for step in 0..=100 {
            let value = step as Float / 100.0;
            assert_close_enough!(from_linear(to_linear(value)), value);
        }
    }

    #[test]
    fn test_hue() {
        assert!(hue(&[0.0, 0.0, 0.0]).is_nan());
        assert!(hue(&[0.4, 0.4, 0.4]).is_nan());
        assert_close_enough!(hue(&[1.0, 0.0, 0.0]), 0.0);
        assert_close_enough!(hue(&[1.0, 1.0, 0.0]), 60.0);
        assert_close_enough!(hue(&[0.0, 1.0, 0.0]), 120.0);
        assert_close_enough!(hue(&[0.0, 1.0, 1.0]), 180.0);
        assert_close_enough!(hue(&[0.0, 0.0, 1.0]), 240.0);
        assert_close_enough!(hue(&[1.0, 0.0, 1.0]), 300.0);

        // One color per sextant
        assert_close_enough!(hue(&[1.0, 0.5, 0.0]), 30.0);
        assert_close_enough!(hue(&[0.5, 1.0, 0.0]), 90.0);
        assert_close_enough!(hue(&[0.0, 1.0, 0.5]), 150.0);
        assert_close_enough!(hue(&[0.0, 0.5, 1.0]), 210.0);
        assert_close_enough!(hue(&[0.5, 0.0, 1.0]), 270.0);
        assert_close_enough!(hue(&[1.0, 0.0, 0.5]), 330.0);
    }

    #[test]
    fn test_projections() {
        let rgb = [0.8, 0.4, 0.2];
        assert_close_enough!(value(&rgb), 0.8);
        assert_close_enough!(vsaturation(&rgb), 0.75);
        assert_close_enough!(luminosity(&rgb), 0.5);
        assert_close_enough!(lsaturation(&rgb), 0.6);

        assert!(vsaturation(&[0.0, 0.0, 0.0]).is_nan());
        assert_close_enough!(vsaturation(&[0.5, 0.5, 0.5]), 0.0);
        assert!(lsaturation(&[0.0, 0.0, 0.0]).is_nan());
        assert!(lsaturation(&[1.0, 1.0, 1.0]).is_nan());
        assert_close_enough!(lsaturation(&[0.5, 0.5, 0.5]), 0.0);
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_rgb(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
        assert_rgb(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 1.0]);
        assert_rgb(hsv_to_rgb(360.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_rgb(hsv_to_rgb(420.0, 1.0, 1.0), [1.0, 1.0, 0.0]);
        assert_rgb(hsv_to_rgb(30.0, 0.75, 0.8), [0.8, 0.5, 0.2]);
        assert_rgb(hsv_to_rgb(77.0, 0.0, 0.3), [0.3, 0.3, 0.3]);
        assert_rgb(hsv_to_rgb(Float::NAN, 1.0, 0.6), [0.6, 0.6, 0.6]);
        assert_rgb(hsv_to_rgb(90.0, Float::NAN, 0.6), [0.6, 0.6, 0.6]);
    }

    #[test]
    fn test_negative_hue() {
        // The remainder keeps the sign, so channels leave the gamut.
        assert_rgb(hsv_to_rgb(-60.0, 1.0, 1.0), [1.0, -1.0, 0.0]);
        assert_rgb(hsv_to_rgb(-30.0, 0.75, 0.8), [0.8, -0.1, 0.2]);
        assert_rgb(hsv_to_rgb(-120.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_rgb(hsv_to_rgb(-360.0, 1.0, 1.0), [1.0, 0.0, 0.0]);

        assert_rgb(with_hue(&[0.8, 0.4, 0.2], -30.0), [0.8, -0.1, 0.2]);
        assert_rgb(with_hue(&[0.8, 0.4, 0.2], -360.0), [0.8, 0.2, 0.2]);
    }

    #[test]
    fn test_hsl_to_hsv() {
        assert_eq!(hsl_to_hsv(0.0, 0.5), [0.0, 0.0]);
        let [saturation, value] = hsl_to_hsv(0.5, 1.0);
        assert_close_enough!(saturation, 1.0);
        assert_close_enough!(value, 1.0);
        let [saturation, value] = hsl_to_hsv(0.75, 1.0);
        assert_close_enough!(saturation, 0.5);
        assert_close_enough!(value, 1.0);
    }

    #[test]
    fn test_with_hue() {
        assert_rgb(with_hue(&[0.8, 0.4, 0.2], 200.0), [0.2, 0.6, 0.8]);
        assert_rgb(with_hue(&[0.8, 0.4, 0.2], Float::NAN), [0.8, 0.8, 0.8]);

        // A gray becomes fully saturated
        assert_rgb(with_hue(&[0.5, 0.5, 0.5], 240.0), [0.0, 0.0, 0.5]);
        assert_rgb(with_hue(&[1.0, 1.0, 1.0], 120.0), [0.0, 1.0, 0.0]);

        // Black has no saturation but also no value
        assert_rgb(with_hue(&[0.0, 0.0, 0.0], 120.0), [0.0, 0.0, 0.0]);
        assert_rgb(with_hue(&[0.0, 0.0, 0.0], Float::NAN), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_with_value() {
        assert_rgb(with_value(&[0.8, 0.4, 0.2], 0.4), [0.4, 0.2, 0.1]);
        assert_rgb(with_value(&[0.5, 0.5, 0.5], 0.25), [0.25, 0.25, 0.25]);
        assert_rgb(with_value(&[0.0, 0.0, 0.0], 0.75), [0.75, 0.75, 0.75]);
    }

    #[test]
    fn test_with_vsaturation() {
        assert_rgb(with_vsaturation(&[0.8, 0.4, 0.2], 0.0), [0.8, 0.8, 0.8]);
        assert_rgb(with_vsaturation(&[0.8, 0.4, 0.2], 1.0), [0.8, 0.8 - 0.4 * 4.0 / 3.0, 0.0]);
        assert_rgb(with_vsaturation(&[0.5, 0.5, 0.5], 0.5), [0.5, 0.25, 0.25]);
        assert_rgb(with_vsaturation(&[0.0, 0.0, 0.0], 0.5), [0.0, 0.0, 0.0]);
        assert_rgb(with_vsaturation(&[0.0, 0.0, 0.0], 1.0), [0.0, 0.0, 0.0]);
        assert_rgb(with_vsaturation(&[0.0, 0.0, 0.0], 0.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_with_luminosity() {
        assert_rgb(with_luminosity(&[0.8, 0.4, 0.2], 0.0), [0.0, 0.0, 0.0]);
        assert_rgb(with_luminosity(&[0.8, 0.4, 0.2], 1.0), [1.0, 1.0, 1.0]);
        assert_rgb(with_luminosity(&[0.5, 0.5, 0.5], 0.3), [0.3, 0.3, 0.3]);
        assert_rgb(with_luminosity(&[1.0, 1.0, 1.0], 0.3), [0.3, 0.3, 0.3]);
        assert_rgb(with_luminosity(&[0.8, 0.4, 0.2], 0.25), [0.4, 0.2, 0.1]);
    }

    #[test]
    fn test_with_lsaturation() {
        assert_rgb(with_lsaturation(&[0.2, 0.2, 0.3], Float::NAN), [0.0, 0.0, 0.0]);
        assert_rgb(with_lsaturation(&[0.7, 0.7, 0.8], Float::NAN), [1.0, 1.0, 1.0]);
        assert_rgb(with_lsaturation(&[0.8, 0.4, 0.2], 0.0), [0.5, 0.5, 0.5]);
        assert_rgb(with_lsaturation(&[0.8, 0.4, 0.2], 0.2), [0.6, 0.6 - 0.4 / 3.0, 0.4]);

        // A gray defaults to red
        assert_rgb(with_lsaturation(&[0.5, 0.5, 0.5], 1.0), [1.0, 0.0, 0.0]);
        assert_rgb(with_lsaturation(&[0.0, 0.0, 0.0], 0.5), [0.0, 0.0, 0.0]);
    }
}
