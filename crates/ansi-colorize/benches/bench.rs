#![allow(clippy::unwrap_used)]

use ansi_colorize::{ColorSpec, Mode, colorize_with};
use criterion::{Criterion, criterion_group, criterion_main};

const TEXT: &str = "the quick brown fox jumps over the lazy dog";

fn names(b: &mut Criterion) {
    let fg = ColorSpec::named("bright_green");
    let bg = ColorSpec::named("black");
    b.bench_function("names", |b| {
        b.iter(|| colorize_with(TEXT, Some(&fg), Some(&bg), Mode::Names).unwrap());
    });
}

fn byte(b: &mut Criterion) {
    let fg = ColorSpec::Byte(208);
    b.bench_function("byte", |b| {
        b.iter(|| colorize_with(TEXT, Some(&fg), None, Mode::Byte).unwrap());
    });
}

fn rgb_hex(b: &mut Criterion) {
    let fg = ColorSpec::hex("0xff8800");
    let bg = ColorSpec::rgb(16, 16, 16);
    b.bench_function("rgb_hex", |b| {
        b.iter(|| colorize_with(TEXT, Some(&fg), Some(&bg), Mode::Rgb).unwrap());
    });
}

fn no_op(b: &mut Criterion) {
    b.bench_function("no_op", |b| {
        b.iter(|| colorize_with(TEXT, None, None, Mode::Names).unwrap());
    });
}

criterion_group!(benches, names, byte, rgb_hex, no_op);
criterion_main!(benches);
