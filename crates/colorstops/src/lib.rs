//! # Colorstops
//!
//! Colorstops combines a color type with interchangeable RGB, linear RGB, HSV,
//! and HSL views and gradients with any number of color stops.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Colorstops' main abstractions are:
//!
//!   * [`Color`] stores **red, green, blue, and alpha** as four [`Float`]
//!     channels. Its methods expose integer, hexadecimal, linear-light, HSV,
//!     and HSL projections of those channels. For every projection, a `with_`
//!     method creates a new color with just that projection changed, while
//!     leaving the other projections in place. Not-a-number is a regular
//!     value for the hue of grays and the saturation of black or white.
//!   * [`Blending`] determines the color between two colors, by interpolating
//!     in sRGB, linear RGB, or HSV. HSV blending substitutes a
//!     [`NanOverride`](blend::NanOverride) for undefined hues and
//!     saturations. Per-channel [`Curve`](curve::Curve)s change the pacing of
//!     interpolation.
//!   * [`Gradient`] maps ordered positions to [`GradientStop`]s, i.e., colors
//!     with their blending towards the next stop. It resolves the color at any
//!     position, extrapolating beyond the lowest and highest stops, and
//!     samples evenly spaced colors.
//!   * With the `tty` feature, the `swatch` module renders colors in the
//!     terminal.
//!
//! Putting it all together:
//!
//! ```
//! # use colorstops::{assert_same_color, Blending, Color, Gradient};
//! # use colorstops::error::GradientError;
//! let gradient = Gradient::with_colors(Blending::hsv(), Color::RED, Color::BLUE);
//! let colors = gradient.evenly_spaced_colors(3)?;
//! assert_same_color!(colors[1], Color::GREEN);
//! # Ok::<(), GradientError>(())
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! Colorstops supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is disabled by default.
//!   - **`tty`** controls the `swatch` module and its implementation with the
//!     [prettytty](https://crates.io/crates/prettytty) terminal crate. This
//!     feature is enabled by default.
//!   - **`pyffi`** controls colorstops' Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//! Similarly, items only available with the `tty` feature are decorated with <i
//! class=tty-only>TTY only!</i>.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod blend;
mod core;
pub mod curve;
pub mod error;
pub mod gradient;
mod object;
#[cfg(feature = "tty")]
pub mod swatch;
#[cfg(feature = "tty")]
mod util;

pub mod interpolation {
    //! Scalar interpolation helpers.
    //!
    //! None of these functions clamp unless their name says so, and none guard
    //! against identical end points.
    pub use crate::core::{decompress, inv_lerp, inv_lerp_clamped, lerp, lerp_clamped, remap};
}

#[cfg(feature = "pyffi")]
pub use crate::core::close_enough;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use blend::Blending;
pub use crate::core::HexOrder;
pub use gradient::{Gradient, GradientStop};
pub use object::{Color, Hsl, Hsv};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorstops(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<HexOrder>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<Hsv>()?;

    Ok(())
}
