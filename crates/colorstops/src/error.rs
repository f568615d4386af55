//! Utility module with colorstops' errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous hexadecimal color format.
///
/// Since parsing hexadecimal text is all-or-nothing, the error carries no
/// further state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#fff` has too few digits, whereas `#💩0000`
    /// contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format with a malformed hexadecimal digit. For example,
    /// `#00ff0g` has a malformed blue channel.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnexpectedCharacters => f.write_str(
                "color format should be `#` or `0x` followed by 6 or 8 ASCII characters",
            ),
            MalformedHex => {
                f.write_str("color format channels should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error when accessing a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientError {
    /// A query on a gradient without stops. Since there is no color to
    /// interpolate from, there is no answer either.
    NoStops,

    /// A position that is not-a-number. Positions must be ordered, and
    /// not-a-number is not.
    NotANumber,
}

impl std::fmt::Display for GradientError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use GradientError::*;

        match *self {
            NoStops => f.write_str("gradient should have at least one stop but has none"),
            NotANumber => f.write_str("gradient position should be a number but is not"),
        }
    }
}

impl std::error::Error for GradientError {}

#[cfg(feature = "pyffi")]
impl From<GradientError> for PyErr {
    fn from(value: GradientError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
