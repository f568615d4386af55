//! Blending between two colors.
//!
//! A [`Blending`] computes the color at some fraction between two colors. It
//! interpolates either in sRGB, in linear RGB, or in HSV. Since the hue is
//! undefined for grays, HSV blending substitutes a [`NanOverride`] for
//! not-a-number hues and saturations.

use std::sync::Arc;

use crate::core::lerp;
use crate::curve::Curve;
use crate::{Color, Float};

/// A substitute for a not-a-number hue or saturation.
///
/// When blending in HSV, a gray has no hue and black has no saturation. An
/// override computes a replacement from the color with the missing component,
/// the *near* color, and the color on the other end of the blend, the *far*
/// color. Each side is overridden independently.
///
/// ```
/// # use colorstops::{assert_close_enough, blend::NanOverride, Color};
/// let gray = Color::rgb(0.5, 0.5, 0.5);
/// let blue = Color::rgb(0.0, 0.0, 1.0);
/// assert_close_enough!(NanOverride::EqualHue(0.0).resolve(&gray, &blue), 240.0);
/// assert_close_enough!(NanOverride::OppositeHue(0.0).resolve(&gray, &blue), 60.0);
/// assert_close_enough!(NanOverride::OppositeHue(0.0).resolve(&gray, &gray), 0.0);
/// ```
#[derive(Clone)]
pub enum NanOverride {
    /// Always the given value.
    Exactly(Float),
    /// The far color's hue, or the backup if the far color has no hue either.
    EqualHue(Float),
    /// The hue opposite the far color's hue, or the backup if the far color
    /// has no hue.
    OppositeHue(Float),
    /// The far color's HSV saturation, or the backup if it is undefined.
    EqualVSaturation(Float),
    /// The far color's HSL saturation, or the backup if it is undefined.
    EqualLSaturation(Float),
    /// An arbitrary function of near and far colors.
    Custom(Arc<dyn Fn(&Color, &Color) -> Float + Send + Sync>),
}

impl NanOverride {
    pub const RED_HUE: NanOverride = NanOverride::Exactly(0.0);
    pub const YELLOW_HUE: NanOverride = NanOverride::Exactly(60.0);
    pub const GREEN_HUE: NanOverride = NanOverride::Exactly(120.0);
    pub const CYAN_HUE: NanOverride = NanOverride::Exactly(180.0);
    pub const BLUE_HUE: NanOverride = NanOverride::Exactly(240.0);
    pub const MAGENTA_HUE: NanOverride = NanOverride::Exactly(300.0);

    pub const ZERO: NanOverride = NanOverride::Exactly(0.0);
    pub const HALF: NanOverride = NanOverride::Exactly(0.5);
    pub const ONE: NanOverride = NanOverride::Exactly(1.0);

    /// Create an override from an arbitrary function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Color, &Color) -> Float + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Compute the substitute for the near color, given the far color.
    pub fn resolve(&self, near: &Color, far: &Color) -> Float {
        use NanOverride::*;

        fn or_backup(value: Float, backup: Float) -> Float {
            if value.is_nan() {
                backup
            } else {
                value
            }
        }

        match *self {
            Exactly(value) => value,
            EqualHue(backup) => or_backup(far.hue(), backup),
            OppositeHue(backup) => or_backup((far.hue() + 180.0) % 360.0, backup),
            EqualVSaturation(backup) => or_backup(far.vsaturation(), backup),
            EqualLSaturation(backup) => or_backup(far.lsaturation(), backup),
            Custom(ref f) => f(near, far),
        }
    }
}

impl std::fmt::Debug for NanOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use NanOverride::*;

        match *self {
            Exactly(value) => f.debug_tuple("Exactly").field(&value).finish(),
            EqualHue(backup) => f.debug_tuple("EqualHue").field(&backup).finish(),
            OppositeHue(backup) => f.debug_tuple("OppositeHue").field(&backup).finish(),
            EqualVSaturation(backup) => f.debug_tuple("EqualVSaturation").field(&backup).finish(),
            EqualLSaturation(backup) => f.debug_tuple("EqualLSaturation").field(&backup).finish(),
            Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// ====================================================================================================================

/// One curve for each of the three color channels plus alpha.
///
/// For RGB blending, the channels are red, green, and blue. For HSV blending,
/// they are hue, saturation, and value.
#[derive(Clone, Debug, Default)]
pub struct ChannelCurves {
    pub first: Curve,
    pub second: Curve,
    pub third: Curve,
    pub alpha: Curve,
}

impl ChannelCurves {
    /// Create new channel curves with a linear curve for alpha.
    pub fn new(first: Curve, second: Curve, third: Curve) -> Self {
        Self {
            first,
            second,
            third,
            alpha: Curve::Linear,
        }
    }

    /// Create new channel curves that use the same curve for all four
    /// channels, alpha included.
    pub fn uniform(curve: Curve) -> Self {
        Self {
            first: curve.clone(),
            second: curve.clone(),
            third: curve.clone(),
            alpha: curve,
        }
    }

    /// Replace the curve for alpha.
    #[must_use = "method returns new curves and does not mutate original value"]
    pub fn with_alpha(self, alpha: Curve) -> Self {
        Self { alpha, ..self }
    }

    /// Interpolate between the two sets of channels.
    fn lerp(&self, left: [Float; 4], right: [Float; 4], pos: Float) -> [Float; 4] {
        let [l1, l2, l3, la] = left;
        let [r1, r2, r3, ra] = right;
        [
            lerp(l1, r1, self.first.apply(pos)),
            lerp(l2, r2, self.second.apply(pos)),
            lerp(l3, r3, self.third.apply(pos)),
            lerp(la, ra, self.alpha.apply(pos)),
        ]
    }
}

// ====================================================================================================================

/// The configuration for blending in HSV.
#[derive(Clone, Debug)]
pub struct HsvBlending {
    /// Curves for hue, saturation, value, and alpha.
    pub curves: ChannelCurves,
    /// The substitute for a gray's hue.
    pub hue_override: NanOverride,
    /// The substitute for black's saturation.
    pub saturation_override: NanOverride,
    /// The direction of hue rotation.
    ///
    /// When `true`, hues only ever increase from left to right, wrapping
    /// through 360º. When `false`, they only ever decrease.
    pub increasing: bool,
}

impl Default for HsvBlending {
    /// Create the default HSV blending with linear curves.
    ///
    /// A gray takes on the other color's hue, or red if both are gray. Black's
    /// saturation becomes zero. Hues increase.
    fn default() -> Self {
        Self {
            curves: ChannelCurves::default(),
            hue_override: NanOverride::EqualHue(0.0),
            saturation_override: NanOverride::ZERO,
            increasing: true,
        }
    }
}

impl HsvBlending {
    /// Replace the curves.
    #[must_use = "method returns a new blending and does not mutate original value"]
    pub fn with_curves(self, curves: ChannelCurves) -> Self {
        Self { curves, ..self }
    }

    /// Replace the hue override.
    #[must_use = "method returns a new blending and does not mutate original value"]
    pub fn with_hue_override(self, hue_override: NanOverride) -> Self {
        Self {
            hue_override,
            ..self
        }
    }

    /// Replace the saturation override.
    #[must_use = "method returns a new blending and does not mutate original value"]
    pub fn with_saturation_override(self, saturation_override: NanOverride) -> Self {
        Self {
            saturation_override,
            ..self
        }
    }

    /// Rotate hues in decreasing direction.
    #[must_use = "method returns a new blending and does not mutate original value"]
    pub fn decreasing(self) -> Self {
        Self {
            increasing: false,
            ..self
        }
    }

    fn blend(&self, left: &Color, right: &Color, pos: Float) -> Color {
        let mut left_hue = left.hue();
        let mut right_hue = right.hue();
        if left_hue.is_nan() {
            left_hue = self.hue_override.resolve(left, right);
        }
        if right_hue.is_nan() {
            right_hue = self.hue_override.resolve(right, left);
        }

        let mut left_saturation = left.vsaturation();
        let mut right_saturation = right.vsaturation();
        if left_saturation.is_nan() {
            left_saturation = self.saturation_override.resolve(left, right);
        }
        if right_saturation.is_nan() {
            right_saturation = self.saturation_override.resolve(right, left);
        }

        if self.increasing && right_hue < left_hue {
            right_hue += 360.0;
        } else if !self.increasing && left_hue < right_hue {
            left_hue += 360.0;
        }

        let [h, s, v, a] = self.curves.lerp(
            [left_hue, left_saturation, left.value(), left.alpha()],
            [right_hue, right_saturation, right.value(), right.alpha()],
            pos,
        );
        Color::from_hsv(h, s, v, a)
    }
}

// ====================================================================================================================

/// A strategy for blending two colors.
///
/// Blending takes a left color, a right color, and a position, which is 0 for
/// the left color and 1 for the right color. Positions outside `0..=1`
/// extrapolate, unless a curve clamps them.
///
/// ```
/// # use colorstops::{assert_same_color, blend::Blending, Color};
/// let gray = Color::rgb(0.5, 0.5, 0.5);
/// let red = Color::rgb(1.0, 0.0, 0.0);
///
/// let srgb = Blending::srgb().blend(&gray, &red, 0.5);
/// assert_same_color!(srgb, Color::rgb(0.75, 0.25, 0.25));
///
/// let hsv = Blending::hsv().blend(&gray, &red, 0.5);
/// assert_same_color!(hsv, Color::rgb(0.75, 0.375, 0.375));
/// ```
#[derive(Clone)]
pub enum Blending {
    /// Interpolate the gamma-corrected sRGB channels.
    Srgb(ChannelCurves),
    /// Interpolate the channels in linear light.
    LinearRgb(ChannelCurves),
    /// Interpolate hue, saturation, and value.
    Hsv(HsvBlending),
    /// An arbitrary function of left color, right color, and position.
    Custom(Arc<dyn Fn(&Color, &Color, Float) -> Color + Send + Sync>),
}

impl Default for Blending {
    fn default() -> Self {
        Self::srgb()
    }
}

impl Blending {
    /// Create a linear blending in sRGB.
    pub fn srgb() -> Self {
        Self::Srgb(ChannelCurves::default())
    }

    /// Create a linear blending in linear RGB.
    pub fn linear_rgb() -> Self {
        Self::LinearRgb(ChannelCurves::default())
    }

    /// Create the default blending in HSV.
    pub fn hsv() -> Self {
        Self::Hsv(HsvBlending::default())
    }

    /// Create a blending from an arbitrary function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Color, &Color, Float) -> Color + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Blend the two colors at the given position.
    pub fn blend(&self, left: &Color, right: &Color, pos: Float) -> Color {
        match *self {
            Self::Srgb(ref curves) => {
                let [r, g, b, a] = curves.lerp(*left.as_ref(), *right.as_ref(), pos);
                Color::new(r, g, b, a)
            }
            Self::LinearRgb(ref curves) => {
                let [r, g, b, a] = curves.lerp(linear(left), linear(right), pos);
                Color::new(0.0, 0.0, 0.0, a)
                    .with_linear_red(r)
                    .with_linear_green(g)
                    .with_linear_blue(b)
            }
            Self::Hsv(ref hsv) => hsv.blend(left, right, pos),
            Self::Custom(ref f) => f(left, right, pos),
        }
    }
}

fn linear(color: &Color) -> [Float; 4] {
    [
        color.linear_red(),
        color.linear_green(),
        color.linear_blue(),
        color.alpha(),
    ]
}

impl std::fmt::Debug for Blending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Srgb(ref curves) => f.debug_tuple("Srgb").field(curves).finish(),
            Self::LinearRgb(ref curves) => f.debug_tuple("LinearRgb").field(curves).finish(),
            Self::Hsv(ref hsv) => f.debug_tuple("Hsv").field(hsv).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// ====================================================================================================================
