/// # swatch: Comparing blending spaces
///
/// This example samples the same gradients in sRGB, linear RGB, and HSV and
/// shows each sample as a swatch on the terminal.
use colorstops::blend::{HsvBlending, NanOverride};
use colorstops::swatch::show;
use colorstops::{Blending, Color, Gradient};
use prettytty::opt::Options;

const COUNT: usize = 32;

fn main() -> std::io::Result<()> {
    let navy = Color::from_8bit(0, 0, 128, 255);
    let gold = Color::from_8bit(255, 215, 0, 255);
    let gray = Color::rgb(0.5, 0.5, 0.5);

    let blendings = [
        ("srgb", Blending::srgb()),
        ("linear", Blending::linear_rgb()),
        ("hsv", Blending::hsv()),
        (
            "hsv-",
            Blending::Hsv(HsvBlending::default().decreasing()),
        ),
        (
            "hsv-opp",
            Blending::Hsv(
                HsvBlending::default().with_hue_override(NanOverride::OppositeHue(0.0)),
            ),
        ),
    ];

    for (label, blending) in blendings {
        for (left, right) in [(navy, gold), (gray, Color::RED)] {
            let gradient = Gradient::with_colors(blending.clone(), left, right);
            let colors = gradient
                .evenly_spaced_colors(COUNT)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

            println!("{:<8} {} → {}", label, left, right);
            show(&colors, Options::default())?;
        }
    }

    let rainbow = Gradient::evenly_spaced(
        Blending::hsv(),
        [Color::RED, Color::GREEN, Color::BLUE, Color::RED],
    );
    let colors = rainbow
        .evenly_spaced_padded_colors(COUNT, 0.1)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    println!("rainbow, padded");
    show(&colors, Options::with_log())
}
