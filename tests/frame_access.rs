//! Single-frame access and metadata tests.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use unreel::{Animation, UnreelError};

/// Encode a 32x32 animation with one solid-color frame per entry.
fn write_color_gif(path: &Path, colors: &[Rgba<u8>], delay_ms: u32) {
    let file = File::create(path).expect("Failed to create fixture");
    let mut encoder = GifEncoder::new_with_speed(file, 10);
    encoder
        .set_repeat(Repeat::Infinite)
        .expect("Failed to set repeat");

    for color in colors {
        let image = RgbaImage::from_pixel(32, 32, *color);
        let frame = Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1));
        encoder.encode_frame(frame).expect("Failed to encode frame");
    }
}

const RED: Rgba<u8> = Rgba([220, 30, 30, 255]);
const GREEN: Rgba<u8> = Rgba([30, 220, 30, 255]);
const BLUE: Rgba<u8> = Rgba([30, 30, 220, 255]);

/// GIF palettes are quantized, so compare channels with a tolerance.
fn assert_close(actual: Rgba<u8>, expected: Rgba<u8>) {
    for channel in 0..4 {
        let difference = actual[channel].abs_diff(expected[channel]);
        assert!(
            difference <= 24,
            "channel {channel} off by {difference}: {actual:?} vs {expected:?}",
        );
    }
}

#[test]
fn metadata_reflects_the_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("colors.gif");
    write_color_gif(&gif_path, &[RED, GREEN, BLUE], 40);

    let animation = Animation::open(&gif_path).expect("Failed to open fixture");
    let metadata = animation.metadata();

    assert_eq!(metadata.width, 32);
    assert_eq!(metadata.height, 32);
    assert_eq!(metadata.frame_count, 3);
    assert_eq!(metadata.duration, Duration::from_millis(120));
}

#[test]
fn frame_by_index_returns_the_right_pixels() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("colors.gif");
    write_color_gif(&gif_path, &[RED, GREEN, BLUE], 40);

    let animation = Animation::open(&gif_path).expect("Failed to open fixture");

    let first = animation.frames().frame(0).expect("Failed to decode frame 0");
    assert_close(*first.get_pixel(16, 16), RED);

    let second = animation.frames().frame(1).expect("Failed to decode frame 1");
    assert_close(*second.get_pixel(16, 16), GREEN);

    let third = animation.frames().frame(2).expect("Failed to decode frame 2");
    assert_close(*third.get_pixel(16, 16), BLUE);
}

#[test]
fn frames_are_fully_opaque() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("colors.gif");
    write_color_gif(&gif_path, &[RED, GREEN], 40);

    let animation = Animation::open(&gif_path).expect("Failed to open fixture");
    let frame = animation.frames().frame(0).expect("Failed to decode frame");

    assert!(frame.pixels().all(|pixel| pixel[3] == 255));
}

#[test]
fn frame_out_of_range() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("colors.gif");
    write_color_gif(&gif_path, &[RED, GREEN, BLUE], 40);

    let animation = Animation::open(&gif_path).expect("Failed to open fixture");
    let error = animation.frames().frame(3).unwrap_err();

    assert!(matches!(
        error,
        UnreelError::FrameOutOfRange {
            index: 3,
            frame_count: 3,
        },
    ));

    let message = error.to_string();
    assert!(
        message.contains("out of range"),
        "Error message should mention out of range: {message}",
    );
}

#[test]
fn save_frame_writes_a_decodable_png() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let gif_path = dir.path().join("colors.gif");
    write_color_gif(&gif_path, &[RED, GREEN], 40);

    let animation = Animation::open(&gif_path).expect("Failed to open fixture");
    let still_path = dir.path().join("green.png");
    animation
        .frames()
        .save_frame(1, &still_path)
        .expect("Failed to save frame");

    let reopened = image::open(&still_path).expect("Failed to reopen still");
    assert_eq!(reopened.width(), 32);
    assert_eq!(reopened.height(), 32);
    assert_close(reopened.to_rgba8()[(16, 16)], GREEN);
}
