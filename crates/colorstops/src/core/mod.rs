mod conversion;
mod equality;
mod math;
mod string;

// conversion
pub(crate) use conversion::{
    from_8bit, from_linear, hsv_to_rgb, hue, lsaturation, luminosity, to_8bit, to_int,
    to_linear, value, vsaturation, with_hue, with_lsaturation, with_luminosity, with_value,
    with_vsaturation,
};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_channels;

// math
pub(crate) use math::{evenly_spaced, FloatExt};
pub use math::{decompress, inv_lerp, inv_lerp_clamped, lerp, lerp_clamped, remap};

// string
pub use string::HexOrder;
pub(crate) use string::{format, parse};
