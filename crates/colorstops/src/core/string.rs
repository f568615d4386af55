#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;

/// The order of channels when formatting a color as hexadecimal text.
///
/// Parsing does not need an order: Six digits always are red, green, and blue,
/// whereas eight digits always are red, green, blue, and alpha.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorstops")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HexOrder {
    /// Six digits for red, green, and blue, dropping alpha.
    #[default]
    Rgb,
    /// Eight digits with alpha leading.
    Argb,
    /// Eight digits with alpha trailing.
    Rgba,
}

/// Strip the optional `#` or `0x` prefix.
fn strip_prefix(s: &str) -> &str {
    s.strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Parse hexadecimal text into red, green, blue, and alpha bytes.
///
/// This function accepts an optional `#` or `0x` prefix followed by exactly
/// six or eight hexadecimal digits in either case. With six digits, alpha
/// defaults to fully opaque. Surrounding white space is an error.
pub(crate) fn parse(s: &str) -> Result<[u8; 4], ColorFormatError> {
    let digits = strip_prefix(s);
    if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_channel(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * index + 2)
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        // from_str_radix also accepts a leading plus sign.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let red = parse_channel(digits, 0)?;
    let green = parse_channel(digits, 1)?;
    let blue = parse_channel(digits, 2)?;
    let alpha = if digits.len() == 8 {
        parse_channel(digits, 3)?
    } else {
        0xff
    };

    Ok([red, green, blue, alpha])
}

/// Format red, green, blue, and alpha bytes as uppercase hexadecimal text in
/// the given order, without prefix.
pub(crate) fn format(channels: &[u8; 4], order: HexOrder) -> String {
    let [r, g, b, a] = *channels;
    match order {
        HexOrder::Rgb => format!("{:02X}{:02X}{:02X}", r, g, b),
        HexOrder::Argb => format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        HexOrder::Rgba => format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format, parse, HexOrder};
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("#112233")?, [0x11, 0x22, 0x33, 0xff]);
        assert_eq!(parse("112233")?, [0x11, 0x22, 0x33, 0xff]);
        assert_eq!(parse("0xaBcDeF80")?, [0xab, 0xcd, 0xef, 0x80]);
        assert_eq!(parse("0XABCDEF")?, [0xab, 0xcd, 0xef, 0xff]);
        assert_eq!(parse("#00000000")?, [0, 0, 0, 0]);

        assert_eq!(parse("#fff"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#1122334"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("##112233"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#💩00"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#11g233"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("+1+2+3"), Err(ColorFormatError::MalformedHex));

        assert_eq!(parse("  #00000000 "), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#112233\n"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse(" 0x112233"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("11223 "), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_format() {
        let channels = [0x0a, 0xbc, 0x01, 0x7f];
        assert_eq!(format(&channels, HexOrder::Rgb), "0ABC01");
        assert_eq!(format(&channels, HexOrder::Argb), "7F0ABC01");
        assert_eq!(format(&channels, HexOrder::Rgba), "0ABC017F");
    }
}
