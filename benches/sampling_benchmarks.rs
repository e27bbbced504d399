//! Benchmarks for plan resolution, frame decoding, and extraction.
//!
//! Run with: cargo bench
//!
//! Fixtures are generated on the fly in a temporary directory; no external
//! files are required.

use std::fs::File;
use std::path::Path;

use criterion::Criterion;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use unreel::{Animation, SampleOptions, SamplePlan, extract_frames};

const FRAME_COUNT: u32 = 100;

/// Encode a 32x32 animation with [`FRAME_COUNT`] solid-color frames.
fn write_sample_gif(path: &Path) {
    let file = File::create(path).expect("Failed to create fixture");
    let mut encoder = GifEncoder::new_with_speed(file, 10);
    encoder
        .set_repeat(Repeat::Infinite)
        .expect("Failed to set repeat");

    for index in 0..FRAME_COUNT {
        let shade = (index * 8 % 256) as u8;
        let image = RgbaImage::from_pixel(32, 32, Rgba([255 - shade, shade, 128, 255]));
        let frame = Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(40, 1));
        encoder.encode_frame(frame).expect("Failed to encode frame");
    }
}

fn benchmark_plan_resolution(criterion: &mut Criterion) {
    let input = Path::new("clips/anim.gif");

    criterion.bench_function("resolve plan (default options)", |bencher| {
        let options = SampleOptions::new();
        bencher.iter(|| SamplePlan::resolve(input, 3_000, &options).unwrap());
    });

    criterion.bench_function("resolve plan and list indices", |bencher| {
        let options = SampleOptions::new();
        bencher.iter(|| {
            let plan = SamplePlan::resolve(input, 3_000, &options).unwrap();
            plan.source_indices(3_000)
        });
    });
}

fn benchmark_open(criterion: &mut Criterion) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("sample.gif");
    write_sample_gif(&gif_path);

    criterion.bench_function("open and count frames", |bencher| {
        bencher.iter(|| Animation::open(&gif_path).unwrap());
    });
}

fn benchmark_single_frame(criterion: &mut Criterion) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("sample.gif");
    write_sample_gif(&gif_path);
    let animation = Animation::open(&gif_path).unwrap();

    criterion.bench_function("decode first frame", |bencher| {
        bencher.iter(|| animation.frames().frame(0).unwrap());
    });

    criterion.bench_function("decode frame 75 (mid-animation)", |bencher| {
        bencher.iter(|| animation.frames().frame(75).unwrap());
    });
}

fn benchmark_sampled_iteration(criterion: &mut Criterion) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("sample.gif");
    write_sample_gif(&gif_path);
    let animation = Animation::open(&gif_path).unwrap();
    let plan = SamplePlan::resolve(&gif_path, FRAME_COUNT, &SampleOptions::new()).unwrap();

    criterion.bench_function("iterate 30 sampled frames", |bencher| {
        bencher.iter(|| {
            let iter = animation.frames().sampled(&plan).unwrap();
            for result in iter {
                let _ = result.unwrap();
            }
        });
    });
}

fn benchmark_extraction(criterion: &mut Criterion) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("sample.gif");
    write_sample_gif(&gif_path);
    let output_dir = dir.path().join("stills");

    let mut group = criterion.benchmark_group("extraction");
    group.sample_size(20);

    group.bench_function("extract 30 stills", |bencher| {
        let options = SampleOptions::new().with_output_dir(&output_dir);
        bencher.iter(|| extract_frames(&gif_path, &options).unwrap());
    });

    group.finish();
}

criterion::criterion_group!(
    benches,
    benchmark_plan_resolution,
    benchmark_open,
    benchmark_single_frame,
    benchmark_sampled_iteration,
    benchmark_extraction,
);
criterion::criterion_main!(benches);
