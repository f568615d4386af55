use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// --------------------------------------------------------------------------------------------------------------------

/// Linearly interpolate between `a` and `b`.
///
/// The fraction `t` is used as is, so values outside `0..=1` extrapolate
/// beyond either end.
///
/// ```
/// # use colorstops::interpolation::lerp;
/// assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
/// assert_eq!(lerp(2.0, 4.0, 1.5), 5.0);
/// ```
#[inline]
pub fn lerp(a: Float, b: Float, t: Float) -> Float {
    t.mul_add(b - a, a)
}

/// Linearly interpolate between `a` and `b` after clamping `t` to `0..=1`.
#[inline]
pub fn lerp_clamped(a: Float, b: Float, t: Float) -> Float {
    lerp(a, b, t.clamp(0.0, 1.0))
}

/// Determine the fraction `t` for which `lerp(a, b, t)` yields `p`.
///
/// There is no guard against `a == b`. The result then is infinite or
/// not-a-number, and callers must ensure the two end points differ.
///
/// ```
/// # use colorstops::interpolation::inv_lerp;
/// assert_eq!(inv_lerp(2.0, 4.0, 3.0), 0.5);
/// assert_eq!(inv_lerp(4.0, 2.0, 5.0), -0.5);
/// ```
#[inline]
pub fn inv_lerp(a: Float, b: Float, p: Float) -> Float {
    (p - a) / (b - a)
}

/// Determine the fraction for `p` between `a` and `b`, clamped to `0..=1`.
#[inline]
pub fn inv_lerp_clamped(a: Float, b: Float, p: Float) -> Float {
    inv_lerp(a, b, p).clamp(0.0, 1.0)
}

/// Map `x` from the line through `(x1, y1)` and `(x2, y2)` onto the y axis.
///
/// ```
/// # use colorstops::interpolation::remap;
/// assert_eq!(remap(0.0, 10.0, 4.0, 20.0, 2.0), 15.0);
/// ```
#[inline]
pub fn remap(x1: Float, y1: Float, x2: Float, y2: Float, x: Float) -> Float {
    lerp(y1, y2, inv_lerp(x1, x2, x))
}

/// Widen the interval `x1..=x2` by the fraction `by` of its width on both
/// sides.
///
/// Evenly spaced samples across the widened interval include `by` worth of
/// overshoot beyond each end of the original interval. A negative fraction
/// narrows the interval instead.
///
/// ```
/// # use colorstops::interpolation::decompress;
/// assert_eq!(decompress(0.0, 1.0, 0.25), (-0.25, 1.25));
/// assert_eq!(decompress(2.0, 6.0, 0.5), (0.0, 8.0));
/// ```
#[inline]
pub fn decompress(x1: Float, x2: Float, by: Float) -> (Float, Float) {
    let overshoot = (x2 - x1) * by;
    (x1 - overshoot, x2 + overshoot)
}

/// Compute `count` evenly spaced positions from `low` to `high`, inclusive.
///
/// A single position degenerates to `low`.
pub(crate) fn evenly_spaced(low: Float, high: Float, count: usize) -> impl Iterator<Item = Float> {
    let last = count.saturating_sub(1);
    (0..count).map(move |index| {
        if last == 0 {
            low
        } else {
            remap(0.0, low, last as Float, high, index as Float)
        }
    })
}

// ====================================================================================================================
