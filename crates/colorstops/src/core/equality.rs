#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::FloatExt;
use crate::{Bits, Float};

/// Assert that two floats are equal after normalization with [`to_eq_bits`].
///
/// # Panics
///
/// This macro panics if the two normalized floats differ, printing each float
/// on its own line.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Assert that two colors are equal.
///
/// Color equality already normalizes channels with [`to_eq_bits`], so this
/// macro mostly improves on the failure message.
///
/// # Panics
///
/// This macro panics if the colors differ, printing each color's channels on
/// their own line.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = ($c1, $c2);
        assert_eq!(
            c1,
            c2,
            "color channels differ:\n{:?}\n{:?}",
            c1.as_ref(),
            c2.as_ref()
        );
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize all four channels for equality testing and hashing.
#[must_use = "function returns new channels and does not mutate original value"]
pub(crate) fn to_eq_channels(channels: &[Float; 4]) -> [Bits; 4] {
    let [red, green, blue, alpha] = *channels;
    [
        to_eq_bits(red),
        to_eq_bits(green),
        to_eq_bits(blue),
        to_eq_bits(alpha),
    ]
}

/// Determine whether two floats normalize to the same bits. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Normalize a float for hashing and equality.
///
/// Not-a-number becomes zero, the fraction is rounded to a fixed number of
/// decimals, and negative zero loses its sign. The function is public for the
/// benefit of [`assert_close_enough`].
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    let f = if f.is_nan() { 0.0 } else { f };
    let f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Adding zero turns -0.0 into 0.0.
    (f + 0.0).to_bits()
}
