use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use colorstops::blend::{ChannelCurves, HsvBlending, NanOverride};
use colorstops::curve::Curve;
use colorstops::{Blending, Color, Gradient};

pub fn run_benchmarks(c: &mut Criterion) {
    let rainbow = Gradient::evenly_spaced(
        Blending::hsv(),
        [Color::RED, Color::GREEN, Color::BLUE, Color::RED],
    );
    let linear = Gradient::evenly_spaced(
        Blending::linear_rgb(),
        [Color::BLACK, Color::rgb(0.8, 0.4, 0.2), Color::WHITE],
    );

    // Compare sampling costs across blending spaces.
    let mut group = c.benchmark_group("gradient-sample");

    group.bench_function("hsv-256", |b| {
        b.iter(|| rainbow.evenly_spaced_colors(black_box(256)))
    });

    group.bench_function("linear-rgb-256", |b| {
        b.iter(|| linear.evenly_spaced_colors(black_box(256)))
    });

    group.bench_function("color-at", |b| {
        b.iter(|| rainbow.color_at(black_box(0.7)))
    });

    group.finish();

    // Gray end points exercise the NaN overrides.
    let mut group = c.benchmark_group("hsv-blend");
    let plain = Blending::hsv();
    let overridden = Blending::Hsv(
        HsvBlending::default()
            .with_hue_override(NanOverride::OppositeHue(0.0))
            .with_saturation_override(NanOverride::EqualVSaturation(0.0))
            .decreasing(),
    );
    let gray = Color::rgb(0.5, 0.5, 0.5);
    let orange = Color::rgb(1.0, 0.5, 0.0);

    group.bench_function("plain", |b| {
        b.iter(|| plain.blend(black_box(&gray), black_box(&orange), 0.3))
    });

    group.bench_function("overridden", |b| {
        b.iter(|| overridden.blend(black_box(&gray), black_box(&orange), 0.3))
    });

    group.bench_function("curved", |b| {
        let curved = Blending::Srgb(ChannelCurves::uniform(Curve::Sin));
        b.iter(|| curved.blend(black_box(&gray), black_box(&orange), 0.3))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
