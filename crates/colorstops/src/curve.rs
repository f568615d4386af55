//! Shapes for easing interpolation.
//!
//! A [`Curve`] maps a fraction, nominally in `0..=1`, onto another fraction.
//! Blending applies curves to the position before interpolating each channel,
//! which changes the pacing of a transition without changing its end points.

use std::sync::Arc;

#[cfg(feature = "f64")]
use std::f64::consts::PI;
#[cfg(not(feature = "f64"))]
use std::f32::consts::PI;

use crate::Float;

/// A function on fractions.
///
/// Most curves map 0 to 0 and 1 to 1, with [`Curve::Sawtooth`] and
/// [`Curve::InvSin`] the exceptions for inputs outside `0..=1`. Inputs outside
/// that range occur when a gradient extrapolates beyond its stops.
///
/// ```
/// # use colorstops::{assert_close_enough, curve::Curve};
/// assert_close_enough!(Curve::Squared.apply(0.5), 0.25);
/// assert_close_enough!(Curve::Squared.flipped().apply(0.5), 0.75);
///
/// let chain = Curve::chain([Curve::Clamped, Curve::Power(3.0)]);
/// assert_close_enough!(chain.apply(2.0), 1.0);
/// assert_close_enough!(chain.apply(0.5), 0.125);
/// ```
#[derive(Clone, Default)]
pub enum Curve {
    /// The identity.
    #[default]
    Linear,
    /// A triangle wave with period 2 that peaks at 1 for odd integers.
    Sawtooth,
    /// The identity clamped to `0..=1`.
    Clamped,
    /// `x²`
    Squared,
    /// The square root of the absolute value.
    Sqrt,
    /// A quarter circle, slow at first and steep at the end.
    Circle,
    /// A half period of cosine, easing in and out.
    Sin,
    /// The inverse of [`Curve::Sin`], applied to the sawtooth of its input.
    InvSin,
    /// `xᵖ`
    Power(Float),
    /// `1 - (1 - xᵖ)ᵖ`
    CircularPower(Float),
    /// The curve mirrored through the point `(0.5, 0.5)`.
    Flipped(Box<Curve>),
    /// Several curves applied one after the other, left to right.
    Chain(Vec<Curve>),
    /// An arbitrary function.
    Custom(Arc<dyn Fn(Float) -> Float + Send + Sync>),
}

impl Curve {
    /// Create a curve from an arbitrary function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(Float) -> Float + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Mirror this curve through the point `(0.5, 0.5)`.
    #[must_use = "method returns a new curve and does not mutate original value"]
    pub fn flipped(self) -> Self {
        Self::Flipped(Box::new(self))
    }

    /// Compose the given curves from left to right.
    pub fn chain<I>(curves: I) -> Self
    where
        I: IntoIterator<Item = Curve>,
    {
        Self::Chain(curves.into_iter().collect())
    }

    /// Apply this curve to the given fraction.
    pub fn apply(&self, x: Float) -> Float {
        use Curve::*;

        match *self {
            Linear => x,
            Sawtooth => sawtooth(x),
            Clamped => x.clamp(0.0, 1.0),
            Squared => x * x,
            Sqrt => x.abs().sqrt(),
            Circle => 1.0 - (-x).mul_add(x, 1.0).sqrt(),
            Sin => (((x + 1.0) * PI).cos() + 1.0) / 2.0,
            InvSin => 1.0 - sawtooth(x).mul_add(2.0, -1.0).acos() / PI,
            Power(p) => x.powf(p),
            CircularPower(p) => 1.0 - (1.0 - x.powf(p)).powf(p),
            Flipped(ref curve) => 1.0 - curve.apply(1.0 - x),
            Chain(ref curves) => curves.iter().fold(x, |x, curve| curve.apply(x)),
            Custom(ref f) => f(x),
        }
    }
}

fn sawtooth(x: Float) -> Float {
    ((x + 1.0).rem_euclid(2.0) - 1.0).abs()
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Curve::*;

        match *self {
            Linear => f.write_str("Linear"),
            Sawtooth => f.write_str("Sawtooth"),
            Clamped => f.write_str("Clamped"),
            Squared => f.write_str("Squared"),
            Sqrt => f.write_str("Sqrt"),
            Circle => f.write_str("Circle"),
            Sin => f.write_str("Sin"),
            InvSin => f.write_str("InvSin"),
            Power(p) => f.debug_tuple("Power").field(&p).finish(),
            CircularPower(p) => f.debug_tuple("CircularPower").field(&p).finish(),
            Flipped(ref curve) => f.debug_tuple("Flipped").field(curve).finish(),
            Chain(ref curves) => f.debug_tuple("Chain").field(curves).finish(),
            Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
