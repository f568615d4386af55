use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    format, from_8bit, from_linear, hsv_to_rgb, hue, lsaturation, luminosity, parse, to_8bit,
    to_eq_channels, to_int, to_linear, value, vsaturation, with_hue, with_lsaturation,
    with_luminosity, with_value, with_vsaturation, HexOrder,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A color's hue, saturation, value, and alpha.
///
/// The hue is in degrees and not-a-number for grays. The saturation is
/// not-a-number for black.
#[cfg_attr(feature = "pyffi", pyclass(get_all, frozen, module = "colorstops"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub hue: Float,
    pub saturation: Float,
    pub value: Float,
    pub alpha: Float,
}

/// A color's hue, saturation, luminosity, and alpha.
///
/// The hue is in degrees and not-a-number for grays. The saturation is
/// not-a-number for black and white.
#[cfg_attr(feature = "pyffi", pyclass(get_all, frozen, module = "colorstops"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: Float,
    pub saturation: Float,
    pub luminosity: Float,
    pub alpha: Float,
}

// ====================================================================================================================

/// An sRGB color with alpha.
///
/// A color stores four floating point channels, red, green, blue, and alpha,
/// in that order. Channels nominally range `0..=1` but are not clamped.
/// Only conversion to integers and hexadecimal text clamps them.
///
/// All other representations are projections computed from the four stored
/// channels:
///
///   * [`Color::to_8bit`] and [`Color::to_int`] produce integer channels;
///   * [`Color::linear_red`] and friends remove the sRGB transfer function;
///   * [`Color::hue`], [`Color::value`], and [`Color::vsaturation`] are HSV;
///   * [`Color::hue`], [`Color::luminosity`], and [`Color::lsaturation`] are
///     HSL.
///
/// Each projection has a corresponding `with_` method, which returns a new
/// color with the projection updated while the projections it does not
/// control stay put. For example, [`Color::with_value`] preserves hue and
/// saturation by scaling all three channels, whereas [`Color::with_hue`]
/// preserves value and saturation. Alpha never changes, except through
/// [`Color::with_alpha`].
///
/// ```
/// # use colorstops::{assert_close_enough, assert_same_color, Color};
/// let orange = Color::rgb(0.8, 0.4, 0.2);
/// assert_close_enough!(orange.hue(), 20.0);
/// assert_same_color!(orange.with_hue(orange.hue()), orange);
/// assert_same_color!(orange.with_value(0.4), Color::rgb(0.4, 0.2, 0.1));
/// ```
///
/// ## Equality and Hashing
///
/// Two colors are equal if their channels are equal after replacing
/// not-a-number with zero and rounding to a precision appropriate for
/// [`Float`]. Hashing uses the same normalized channels, so that equal colors
/// also have equal hashes.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "colorstops")
)]
#[derive(Clone, Copy)]
pub struct Color {
    channels: [Float; 4],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // Python's #[new] and #[staticmethod] attributes do not work with
    // #[cfg_attr()], hence the pairs of constructors.

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self {
            channels: [red, green, blue, alpha],
        }
    }

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self {
            channels: [red, green, blue, alpha],
        }
    }

    /// Parse a color from hexadecimal text. <i class=python-only>Python
    /// only!</i>
    ///
    /// This method implements the same functionality as `Color`'s [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color).
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, ColorFormatError> {
        Color::from_str(s)
    }

    /// Instantiate a new color from 8-bit channels.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[inline]
    pub fn from_8bit(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            from_8bit(red),
            from_8bit(green),
            from_8bit(blue),
            from_8bit(alpha),
        )
    }

    /// Instantiate a new color from 8-bit channels.
    ///
    /// ```
    /// # use colorstops::{assert_same_color, Color};
    /// let teal = Color::from_8bit(0, 128, 128, 255);
    /// assert_eq!(teal.to_8bit(), [0, 128, 128, 255]);
    /// assert_same_color!(teal, Color::rgb(0.0, 128.0 / 255.0, 128.0 / 255.0));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn from_8bit(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            from_8bit(red),
            from_8bit(green),
            from_8bit(blue),
            from_8bit(alpha),
        )
    }

    /// Instantiate a new color from hue, saturation, value, and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsv(hue: Float, saturation: Float, value: Float, alpha: Float) -> Self {
        let [r, g, b] = hsv_to_rgb(hue, saturation, value);
        Self::new(r, g, b, alpha)
    }

    /// Instantiate a new color from hue, saturation, value, and alpha.
    ///
    /// The hue is in degrees, with values outside `0..360` wrapping around.
    /// Not-a-number for either hue or saturation results in a gray with the
    /// given value. Unlike [`Color::with_hue`], this function never forces
    /// the saturation, so a saturation of zero also results in a gray.
    ///
    /// ```
    /// # use colorstops::{assert_same_color, Color};
    /// assert_same_color!(Color::from_hsv(0.0, 1.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0));
    /// assert_same_color!(Color::from_hsv(120.0, 1.0, 1.0, 1.0), Color::rgb(0.0, 1.0, 0.0));
    /// assert_same_color!(Color::from_hsv(240.0, 1.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsv(hue: Float, saturation: Float, value: Float, alpha: Float) -> Self {
        let [r, g, b] = hsv_to_rgb(hue, saturation, value);
        Self::new(r, g, b, alpha)
    }

    /// Instantiate a new color from hue, saturation, luminosity, and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsl(hue: Float, saturation: Float, luminosity: Float, alpha: Float) -> Self {
        let [r, g, b] = hsl_to_rgb(hue, saturation, luminosity);
        Self::new(r, g, b, alpha)
    }

    /// Instantiate a new color from hue, saturation, luminosity, and alpha.
    ///
    /// Luminosity 0 is black and luminosity 1 is white. Saturation 0 is the
    /// gray with the given luminosity, and not-a-number saturation is black
    /// or white, whichever is closer, independent of hue. Otherwise,
    /// not-a-number hue results in the gray with the value, not luminosity,
    /// of the color with that saturation and luminosity.
    ///
    /// ```
    /// # use colorstops::{assert_same_color, Color};
    /// let pink = Color::from_hsl(0.0, 1.0, 0.75, 1.0);
    /// assert_same_color!(pink, Color::rgb(1.0, 0.5, 0.5));
    /// assert_eq!(pink.luminosity(), 0.75);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsl(hue: Float, saturation: Float, luminosity: Float, alpha: Float) -> Self {
        let [r, g, b] = hsl_to_rgb(hue, saturation, luminosity);
        Self::new(r, g, b, alpha)
    }

    /// Instantiate a new color from a packed `0xAARRGGBB` integer.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_argb32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_8bit(r, g, b, a)
    }

    /// Instantiate a new color from a packed `0xAARRGGBB` integer.
    ///
    /// This is the 32-bit format many graphics libraries use for their
    /// native color type.
    ///
    /// ```
    /// # use colorstops::Color;
    /// let color = Color::from_argb32(0x80ff0000);
    /// assert_eq!(color.to_8bit(), [0xff, 0, 0, 0x80]);
    /// assert_eq!(color.to_argb32(), 0x80ff0000);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_argb32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_8bit(r, g, b, a)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the red channel.
    #[inline]
    pub fn red(&self) -> Float {
        self.channels[0]
    }

    /// Access the green channel.
    #[inline]
    pub fn green(&self) -> Float {
        self.channels[1]
    }

    /// Access the blue channel.
    #[inline]
    pub fn blue(&self) -> Float {
        self.channels[2]
    }

    /// Access the alpha channel.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.channels[3]
    }

    /// Replace the red channel.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_red(&self, red: Float) -> Self {
        Self::new(red, self.green(), self.blue(), self.alpha())
    }

    /// Replace the green channel.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_green(&self, green: Float) -> Self {
        Self::new(self.red(), green, self.blue(), self.alpha())
    }

    /// Replace the blue channel.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_blue(&self, blue: Float) -> Self {
        Self::new(self.red(), self.green(), blue, self.alpha())
    }

    /// Replace the alpha channel.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self::new(self.red(), self.green(), self.blue(), alpha)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 8-bit channels, including alpha.
    ///
    /// Channels are rounded and clamped to `0..=255`.
    pub fn to_8bit(&self) -> [u8; 4] {
        let [r, g, b, a] = self.channels;
        [to_8bit(r), to_8bit(g), to_8bit(b), to_8bit(a)]
    }

    /// Convert this color to integer channels, including alpha.
    ///
    /// Channels are rounded but not clamped. Hence out-of-gamut colors produce
    /// integers outside `0..=255`.
    ///
    /// ```
    /// # use colorstops::Color;
    /// let color = Color::rgb(1.2, 0.5, -0.1);
    /// assert_eq!(color.to_int(), [306, 128, -26, 255]);
    /// assert_eq!(color.to_8bit(), [255, 128, 0, 255]);
    /// ```
    pub fn to_int(&self) -> [i32; 4] {
        let [r, g, b, a] = self.channels;
        [to_int(r), to_int(g), to_int(b), to_int(a)]
    }

    /// Convert this color to a packed `0xAARRGGBB` integer.
    pub fn to_argb32(&self) -> u32 {
        let [r, g, b, a] = self.to_8bit();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Format this color as uppercase hexadecimal text without prefix.
    ///
    /// ```
    /// # use colorstops::{Color, HexOrder};
    /// let color = Color::from_8bit(0x12, 0xab, 0xcd, 0x80);
    /// assert_eq!(color.to_hex(HexOrder::Rgb), "12ABCD");
    /// assert_eq!(color.to_hex(HexOrder::Argb), "8012ABCD");
    /// assert_eq!(color.to_hex(HexOrder::Rgba), "12ABCD80");
    /// ```
    pub fn to_hex(&self, order: HexOrder) -> String {
        format(&self.to_8bit(), order)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the red channel in linear light.
    #[inline]
    pub fn linear_red(&self) -> Float {
        to_linear(self.red())
    }

    /// Access the green channel in linear light.
    #[inline]
    pub fn linear_green(&self) -> Float {
        to_linear(self.green())
    }

    /// Access the blue channel in linear light.
    #[inline]
    pub fn linear_blue(&self) -> Float {
        to_linear(self.blue())
    }

    /// Replace the red channel with one in linear light.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_linear_red(&self, red: Float) -> Self {
        self.with_red(from_linear(red))
    }

    /// Replace the green channel with one in linear light.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_linear_green(&self, green: Float) -> Self {
        self.with_green(from_linear(green))
    }

    /// Replace the blue channel with one in linear light.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_linear_blue(&self, blue: Float) -> Self {
        self.with_blue(from_linear(blue))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine this color's hue in degrees `0..360`.
    ///
    /// The hue is shared between HSV and HSL. It is not-a-number for grays,
    /// including black and white.
    #[inline]
    pub fn hue(&self) -> Float {
        hue(&self.rgb_channels())
    }

    /// Determine HSV's value.
    #[inline]
    pub fn value(&self) -> Float {
        value(&self.rgb_channels())
    }

    /// Determine HSV's saturation.
    ///
    /// The saturation is not-a-number for black.
    #[inline]
    pub fn vsaturation(&self) -> Float {
        vsaturation(&self.rgb_channels())
    }

    /// Determine HSL's luminosity.
    #[inline]
    pub fn luminosity(&self) -> Float {
        luminosity(&self.rgb_channels())
    }

    /// Determine HSL's saturation.
    ///
    /// The saturation is not-a-number for black and white.
    #[inline]
    pub fn lsaturation(&self) -> Float {
        lsaturation(&self.rgb_channels())
    }

    /// Replace the hue.
    ///
    /// This method preserves value and HSV saturation. It turns the color into
    /// a gray of the same value if the hue is not-a-number. It treats grays as
    /// fully saturated, so that the new hue shows.
    ///
    /// ```
    /// # use colorstops::{assert_same_color, Color, Float};
    /// let gray = Color::rgb(0.5, 0.5, 0.5);
    /// assert_same_color!(gray.with_hue(240.0), Color::rgb(0.0, 0.0, 0.5));
    /// assert!(gray.with_hue(240.0).with_hue(Float::NAN).hue().is_nan());
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_hue(&self, hue: Float) -> Self {
        self.with_rgb_channels(with_hue(&self.rgb_channels(), hue))
    }

    /// Replace HSV's value.
    ///
    /// This method preserves hue and HSV saturation.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_value(&self, value: Float) -> Self {
        self.with_rgb_channels(with_value(&self.rgb_channels(), value))
    }

    /// Replace HSV's saturation.
    ///
    /// This method preserves hue and value. Saturating a gray produces a red.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_vsaturation(&self, saturation: Float) -> Self {
        self.with_rgb_channels(with_vsaturation(&self.rgb_channels(), saturation))
    }

    /// Replace HSL's luminosity.
    ///
    /// This method preserves hue and HSL saturation. Luminosity 0 always is
    /// black and luminosity 1 always is white.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_luminosity(&self, luminosity: Float) -> Self {
        self.with_rgb_channels(with_luminosity(&self.rgb_channels(), luminosity))
    }

    /// Replace HSL's saturation.
    ///
    /// This method preserves hue and luminosity. Not-a-number turns the color
    /// into black or white, depending on whether luminosity is at most one
    /// half. Zero turns the color into a gray. Saturating a gray produces a
    /// red.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_lsaturation(&self, saturation: Float) -> Self {
        self.with_rgb_channels(with_lsaturation(&self.rgb_channels(), saturation))
    }

    /// Convert this color to hue, saturation, value, and alpha.
    pub fn to_hsv(&self) -> Hsv {
        Hsv {
            hue: self.hue(),
            saturation: self.vsaturation(),
            value: self.value(),
            alpha: self.alpha(),
        }
    }

    /// Convert this color to hue, saturation, luminosity, and alpha.
    pub fn to_hsl(&self) -> Hsl {
        Hsl {
            hue: self.hue(),
            saturation: self.lsaturation(),
            luminosity: self.luminosity(),
            alpha: self.alpha(),
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hashed hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Use separate block, so that methods are not exposed to Python.
impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Instantiate a new opaque color with the given red, green, and blue
    /// channels. <i class=rust-only>Rust only!</i>
    #[inline]
    pub const fn rgb(red: Float, green: Float, blue: Float) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels. <i class=rust-only>Rust only!</i>
    ///
    /// This function is an alias for [`Color::new`].
    #[inline]
    pub const fn rgba(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self::new(red, green, blue, alpha)
    }

    #[inline]
    fn rgb_channels(&self) -> [Float; 3] {
        let [r, g, b, _] = self.channels;
        [r, g, b]
    }

    #[inline]
    fn with_rgb_channels(&self, rgb: [Float; 3]) -> Self {
        let [r, g, b] = rgb;
        Self::new(r, g, b, self.alpha())
    }
}

/// Convert HSL to RGB, with the edge cases of [`Color::from_hsl`].
///
/// Starting from red, this function applies luminosity, then saturation, and
/// hue last. Hence a missing hue collapses to the gray with the same value.
fn hsl_to_rgb(hue: Float, saturation: Float, luminosity: Float) -> [Float; 3] {
    let rgb = with_lsaturation(&with_luminosity(&[1.0, 0.0, 0.0], luminosity), saturation);
    let value = value(&rgb);
    if hue.is_nan() {
        return [value, value, value];
    }

    // Achromatic results stay achromatic.
    let vsat = vsaturation(&rgb);
    if vsat == 0.0 || vsat.is_nan() {
        return rgb;
    }

    hsv_to_rgb(hue, vsat, value)
}

impl Default for Color {
    /// Create an instance of the default color, which is opaque black.
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Color::from_hsv(value.hue, value.saturation, value.value, value.alpha)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::from_hsl(value.hue, value.saturation, value.luminosity, value.alpha)
    }
}

impl From<[u8; 4]> for Color {
    /// Convert red, green, blue, and alpha bytes into a color.
    fn from(value: [u8; 4]) -> Self {
        let [r, g, b, a] = value;
        Color::from_8bit(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        value.to_8bit()
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from hexadecimal text.
    ///
    /// The text may start with an optional `#` or `0x` prefix, which is
    /// followed by six or eight hexadecimal digits. Six digits specify red,
    /// green, and blue, with alpha defaulting to fully opaque. Eight digits
    /// specify red, green, blue, and alpha. Digits may be in either case.
    ///
    /// ```
    /// # use colorstops::{assert_same_color, Color};
    /// # use colorstops::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let red = Color::from_str("#ff0000")?;
    /// assert_same_color!(red, Color::RED);
    ///
    /// let ghost: Color = str::parse("0xFFFFFF80")?;
    /// assert_eq!(ghost.to_8bit(), [255, 255, 255, 128]);
    ///
    /// assert_eq!(Color::from_str("#f00"), Err(ColorFormatError::UnexpectedCharacters));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Color::from)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 4]> for Color {
    fn as_ref(&self) -> &[Float; 4] {
        &self.channels
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.channels).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Both equality testing and hashing replace not-a-number with zero, round
    /// to drop the least significant digits, and replace negative with
    /// positive zero before comparing bit strings. That way, equal colors also
    /// hash the same.
    ///
    /// ```
    /// # use colorstops::{Color, Float};
    /// assert_eq!(
    ///     Color::rgb(Float::NAN, -0.0, 0.25 + Float::EPSILON),
    ///     Color::rgb(0.0, 0.0, 0.25),
    /// );
    /// ```
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
            || to_eq_channels(&self.channels) == to_eq_channels(&other.channels)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.channels;
        f.write_fmt(format_args!("Color({}, {}, {}, {})", r, g, b, a))
    }
}

impl std::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation with alpha, i.e.,
    /// `#RRGGBBAA`.
    ///
    /// ```
    /// # use colorstops::Color;
    /// assert_eq!(format!("{}", Color::rgb(1.0, 0.5, 0.0)), "#FF8000FF");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("#")?;
        f.write_str(&self.to_hex(HexOrder::Rgba))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, Hsl, Hsv};
    use crate::error::ColorFormatError;
    use crate::{assert_close_enough, assert_same_color, Float, HexOrder};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::str::FromStr;

    const TOLERANCE: Float = 1e-3;

    fn assert_near(actual: &Color, expected: &Color, what: &str) {
        for (a, e) in actual.as_ref().iter().zip(expected.as_ref()) {
            assert!(
                (a - e).abs() < TOLERANCE,
                "{} does not round-trip:\n{:?}\n{:?}",
                what,
                actual,
                expected
            );
        }
    }

    fn random_colors(count: usize) -> Vec<Color> {
        let mut rng = StdRng::seed_from_u64(665);
        let mut colors = Vec::with_capacity(count);
        while colors.len() < count {
            let color = Color::new(
                rng.random_range(0.05..0.95),
                rng.random_range(0.05..0.95),
                rng.random_range(0.05..0.95),
                rng.random(),
            );
            // Skip near-grays, whose hue is numerically meaningless.
            if 0.05 < color.vsaturation() {
                colors.push(color);
            }
        }
        colors
    }

    #[test]
    fn test_round_trips() {
        for color in random_colors(200) {
            assert_near(&color.with_hue(color.hue()), &color, "hue");
            assert_near(&color.with_value(color.value()), &color, "value");
            assert_near(&color.with_vsaturation(color.vsaturation()), &color, "vsaturation");
            assert_near(&color.with_luminosity(color.luminosity()), &color, "luminosity");
            assert_near(&color.with_lsaturation(color.lsaturation()), &color, "lsaturation");
            assert_near(&Color::from(color.to_hsv()), &color, "hsv");
            assert_near(&Color::from(color.to_hsl()), &color, "hsl");
        }
    }

    #[test]
    fn test_linear_round_trip() {
        for color in random_colors(50) {
            let linear = color
                .with_linear_red(color.linear_red())
                .with_linear_green(color.linear_green())
                .with_linear_blue(color.linear_blue());
            assert_near(&linear, &color, "linear");
        }

        for step in 0..=20 {
            let channel = step as Float / 20.0;
            let color = Color::rgb(channel, channel, channel);
            assert!((color.with_linear_red(color.linear_red()).red() - channel).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_from_hsv() {
        assert_same_color!(Color::from_hsv(0.0, 1.0, 1.0, 1.0), Color::RED);
        assert_same_color!(Color::from_hsv(120.0, 1.0, 1.0, 1.0), Color::GREEN);
        assert_same_color!(Color::from_hsv(240.0, 1.0, 1.0, 1.0), Color::BLUE);
        assert_same_color!(
            Color::from_hsv(Float::NAN, 1.0, 0.5, 0.5),
            Color::new(0.5, 0.5, 0.5, 0.5)
        );
        assert_same_color!(
            Color::from_hsv(200.0, 0.0, 0.5, 1.0),
            Color::rgb(0.5, 0.5, 0.5)
        );
    }

    #[test]
    fn test_from_hsl() {
        assert_same_color!(Color::from_hsl(120.0, 1.0, 0.5, 1.0), Color::GREEN);
        assert_same_color!(Color::from_hsl(Float::NAN, 1.0, 0.0, 1.0), Color::BLACK);
        assert_same_color!(Color::from_hsl(Float::NAN, 1.0, 1.0, 1.0), Color::WHITE);
        assert_same_color!(Color::from_hsl(Float::NAN, 1.0, 0.5, 1.0), Color::WHITE);
        assert_same_color!(
            Color::from_hsl(Float::NAN, 1.0, 0.3, 1.0),
            Color::rgb(0.6, 0.6, 0.6)
        );
        assert_same_color!(
            Color::from_hsl(Float::NAN, 0.5, 0.6, 1.0),
            Color::RED
                .with_luminosity(0.6)
                .with_lsaturation(0.5)
                .with_hue(Float::NAN)
        );

        // Grays ignore the hue.
        assert_same_color!(
            Color::from_hsl(200.0, 0.0, 0.4, 1.0),
            Color::rgb(0.4, 0.4, 0.4)
        );
        assert_same_color!(Color::from_hsl(200.0, Float::NAN, 0.4, 1.0), Color::BLACK);
        assert_same_color!(Color::from_hsl(200.0, Float::NAN, 0.7, 1.0), Color::WHITE);
    }

    #[test]
    fn test_projections() {
        let orange = Color::new(0.8, 0.4, 0.2, 0.5);
        assert_eq!(
            orange.to_hsv(),
            Hsv {
                hue: orange.hue(),
                saturation: orange.vsaturation(),
                value: 0.8,
                alpha: 0.5,
            }
        );
        assert_close_enough!(orange.hue(), 20.0);
        assert_close_enough!(orange.vsaturation(), 0.75);

        let hsl: Hsl = orange.to_hsl();
        assert_close_enough!(hsl.luminosity, 0.5);
        assert_close_enough!(hsl.saturation, 0.6);
        assert_close_enough!(hsl.alpha, 0.5);

        assert!(Color::BLACK.hue().is_nan());
        assert!(Color::BLACK.vsaturation().is_nan());
        assert!(Color::WHITE.lsaturation().is_nan());
    }

    #[test]
    fn test_edge_cases() {
        let gray = Color::new(0.5, 0.5, 0.5, 0.25);
        assert_same_color!(gray.with_hue(0.0), Color::new(0.5, 0.0, 0.0, 0.25));
        assert_same_color!(
            Color::RED.with_hue(Float::NAN),
            Color::rgb(1.0, 1.0, 1.0)
        );

        let orange = Color::rgb(0.8, 0.4, 0.2);
        assert_same_color!(orange.with_luminosity(0.0), Color::BLACK);
        assert_same_color!(orange.with_luminosity(1.0), Color::WHITE);
        assert_same_color!(
            Color::rgb(0.2, 0.2, 0.3).with_lsaturation(Float::NAN),
            Color::BLACK
        );
        assert_same_color!(
            Color::rgb(0.7, 0.7, 0.8).with_lsaturation(Float::NAN),
            Color::WHITE
        );
        assert_same_color!(orange.with_lsaturation(0.0), Color::rgb(0.5, 0.5, 0.5));
        assert_same_color!(gray.with_lsaturation(1.0), Color::new(1.0, 0.0, 0.0, 0.25));

        // Alpha is left alone.
        assert_close_enough!(gray.with_value(0.1).alpha(), 0.25);
    }

    #[test]
    fn test_integers() {
        let color = Color::new(1.5, 0.5, -0.25, 1.0);
        assert_eq!(color.to_8bit(), [255, 128, 0, 255]);
        assert_eq!(color.to_int(), [383, 128, -64, 255]);
        assert_eq!(color.to_argb32(), 0xffff8000);
        assert_eq!(<[u8; 4]>::from(color), [255, 128, 0, 255]);

        let color = Color::from([0x12, 0x34, 0x56, 0x78]);
        assert_eq!(color.to_argb32(), 0x78123456);
        assert_same_color!(Color::from_argb32(0x78123456), color);
    }

    #[test]
    fn test_hex() -> Result<(), ColorFormatError> {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let bytes: [u8; 4] = rng.random();
            let color = Color::from(bytes);

            let rgb = Color::from_str(&color.to_hex(HexOrder::Rgb))?;
            assert_eq!(rgb.to_8bit(), [bytes[0], bytes[1], bytes[2], 255]);

            let rgba = Color::try_from(color.to_hex(HexOrder::Rgba))?;
            assert_eq!(rgba.to_8bit(), bytes);
            assert_eq!(rgba, color);

            let text = format!("{}", color);
            assert_eq!(Color::try_from(text.as_str())?, color);
        }

        let color = Color::rgb(2.0, -1.0, 0.5);
        assert_eq!(color.to_hex(HexOrder::Argb), "FFFF0080");
        assert_eq!(
            Color::from_str("#12345G"),
            Err(ColorFormatError::MalformedHex)
        );
        assert_eq!(
            Color::from_str("  #112233\n"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        Ok(())
    }

    #[test]
    fn test_hashing() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Color::rgb(0.0, 0.0, 0.25));
        assert!(set.contains(&Color::rgb(-0.0, Float::NAN, 0.25)));
        assert!(!set.contains(&Color::rgb(0.0, 0.0, 0.5)));
    }
}
