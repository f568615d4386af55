//! Rendering colors as terminal swatches. <i class=tty-only>TTY only!</i>
//!
//! A [`Swatch`] displays a sequence of colors as adjacent blocks of background
//! color, which makes it easy to eyeball a gradient's samples. How a swatch
//! renders depends on the terminal's [`Fidelity`], which
//! [`Fidelity::from_environment`] determines from environment variables.
//! [`show`] writes a swatch to the terminal.

use std::io::Write;

use prettytty::cmd::{DynSetBackground24, DynSetBackground8, SetDefaultBackground};
use prettytty::{opt::Options, Connection};

use crate::util::{Env, Environment};
use crate::Color;

/// The color fidelity of a terminal.
///
/// Levels are ordered from least to most capable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fidelity {
    /// Plain text, no escape sequences.
    Plain,
    /// Escape sequences but no colors.
    NoColor,
    /// The 16 ANSI colors only.
    Ansi,
    /// 8-bit indexed colors.
    EightBit,
    /// 24-bit RGB colors.
    TwentyFourBit,
}

impl Fidelity {
    /// Determine the fidelity level for terminal output based on environment
    /// variables.
    ///
    /// This method honors [NO_COLOR](https://no-color.org) and
    /// [FORCE_COLOR](https://force-color.org) before checking `TERM` and
    /// `COLORTERM`. Without a terminal, the fidelity is plain.
    pub fn from_environment(has_tty: bool) -> Self {
        fidelity_from_environment(&Env::default(), has_tty)
    }

    /// Determine whether this fidelity supports any colors.
    pub fn has_color(&self) -> bool {
        Self::Ansi <= *self
    }
}

pub(crate) fn fidelity_from_environment<E: Environment>(env: &E, has_tty: bool) -> Fidelity {
    if env.is_non_empty("NO_COLOR") {
        return Fidelity::NoColor;
    } else if env.is_non_empty("FORCE_COLOR") {
        return Fidelity::Ansi;
    } else if !has_tty || env.has_any_value("TERM", &["dumb"]) {
        return Fidelity::Plain;
    } else if env.has_any_value("COLORTERM", &["truecolor", "24bit"])
        || env.has_any_value("TERM", &["xterm-kitty", "xterm-ghostty"])
    {
        return Fidelity::TwentyFourBit;
    }

    let Ok(mut term) = env.read("TERM") else {
        return Fidelity::Plain;
    };
    term.make_ascii_lowercase();

    if term.ends_with("-256") || term.ends_with("-256color") {
        Fidelity::EightBit
    } else if ["screen", "xterm", "vt100", "vt220", "rxvt"]
        .iter()
        .any(|prefix| term.starts_with(prefix))
        || ["color", "ansi", "cygwin", "linux"].contains(&term.as_str())
    {
        Fidelity::Ansi
    } else {
        Fidelity::Plain
    }
}

// ====================================================================================================================

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Map an 8-bit channel to the closest level of the 6x6x6 embedded RGB cube.
fn to_cube_level(channel: u8) -> u8 {
    let mut best = 0;
    for (index, level) in CUBE_LEVELS.iter().enumerate() {
        if channel.abs_diff(*level) < channel.abs_diff(CUBE_LEVELS[best]) {
            best = index;
        }
    }
    best as u8
}

/// Map a color to the closest 8-bit indexed color in the embedded RGB cube.
fn to_eight_bit_index(color: &Color) -> u8 {
    let [r, g, b, _] = color.to_8bit();
    16 + 36 * to_cube_level(r) + 6 * to_cube_level(g) + to_cube_level(b)
}

/// Map a color to the closest of the eight basic ANSI colors, ignoring the
/// bright variants.
fn to_ansi_offset(color: &Color) -> u8 {
    let [r, g, b, _] = color.to_8bit();
    u8::from(127 < r) + 2 * u8::from(127 < g) + 4 * u8::from(127 < b)
}

/// A display adapter for a sequence of colors.
///
/// With colors, each color renders as a block of background color that is
/// `width` columns wide, followed by an escape sequence restoring the default
/// background. Without colors, each color renders as hashed hexadecimal text.
///
/// ```
/// # use colorstops::{Color, swatch::{Fidelity, Swatch}};
/// let colors = [Color::RED, Color::rgb(0.0, 0.5, 1.0)];
/// assert_eq!(
///     format!("{}", Swatch::new(&colors, Fidelity::TwentyFourBit)),
///     "\x1b[48;2;255;0;0m  \x1b[48;2;0;128;255m  \x1b[49m"
/// );
/// assert_eq!(
///     format!("{}", Swatch::new(&colors, Fidelity::Plain)),
///     "#FF0000 #0080FF"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Swatch<'a> {
    colors: &'a [Color],
    fidelity: Fidelity,
    width: usize,
}

impl<'a> Swatch<'a> {
    /// Create a new swatch with blocks two columns wide.
    pub fn new(colors: &'a [Color], fidelity: Fidelity) -> Self {
        Self {
            colors,
            fidelity,
            width: 2,
        }
    }

    /// Set the number of columns per color.
    #[must_use = "method returns a new swatch and does not mutate original value"]
    pub fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }
}

impl std::fmt::Display for Swatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.fidelity.has_color() {
            for (index, color) in self.colors.iter().enumerate() {
                if 0 < index {
                    f.write_str(" ")?;
                }
                write!(f, "#{}", color.to_hex(crate::HexOrder::Rgb))?;
            }
            return Ok(());
        }

        for color in self.colors {
            match self.fidelity {
                Fidelity::TwentyFourBit => {
                    let [r, g, b, _] = color.to_8bit();
                    write!(f, "{}", DynSetBackground24(r, g, b))?;
                }
                Fidelity::EightBit => {
                    write!(f, "{}", DynSetBackground8(to_eight_bit_index(color)))?;
                }
                _ => write!(f, "{}", DynSetBackground8(to_ansi_offset(color)))?,
            }
            write!(f, "{:1$}", "", self.width)?;
        }

        if self.colors.is_empty() {
            Ok(())
        } else {
            write!(f, "{}", SetDefaultBackground)
        }
    }
}

// ====================================================================================================================

/// Show the colors as a swatch on the terminal.
///
/// This function connects to the terminal with the given options, which also
/// determine the connection's logging volume, and then writes the swatch
/// followed by a new line. It determines fidelity from the environment.
///
/// # Errors
///
/// This function fails if it cannot connect to or write to the terminal.
pub fn show(colors: &[Color], options: Options) -> std::io::Result<()> {
    let tty = Connection::with_options(options)?;
    let fidelity = Fidelity::from_environment(true);

    let mut output = tty.output();
    write!(output, "{}\r\n", Swatch::new(colors, fidelity))?;
    output.flush()
}

// ====================================================================================================================
