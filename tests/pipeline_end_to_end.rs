use image::{ImageFormat, Rgba, RgbaImage};
use img2ascii::{
    convert, convert_banner, convert_with_options, decode, render_file, AspectMode,
    CanonicalImage, ConversionMode, ConversionOptions, ConversionPlan, Img2AsciiError,
};
use std::fs;
use std::path::{Path, PathBuf};

fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

fn make_gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _y| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgba([v, v, v, 255])
    })
}

fn assert_grid(art: &str, width: usize, height: usize) {
    assert!(art.ends_with('\n'));
    let rows: Vec<&str> = art.split_terminator('\n').collect();
    assert_eq!(rows.len(), height);
    for row in rows {
        assert_eq!(row.len(), width, "row {row:?}");
        assert!(row.bytes().all(|b| b.is_ascii() && b != b'\n'));
    }
}

#[test]
fn two_by_two_black_and_white_render_exactly() {
    let options = ConversionOptions {
        aspect_mode: AspectMode::Pixel,
        ..ConversionOptions::default()
    };
    let plan = ConversionPlan::new(&options).unwrap();

    let black = CanonicalImage::filled("black", 2, 2, [0, 0, 0, 255]).unwrap();
    assert_eq!(plan.render(&black).unwrap(), "@@\n@@\n");

    let white = CanonicalImage::filled("white", 2, 2, [255, 255, 255, 255]).unwrap();
    assert_eq!(plan.render(&white).unwrap(), "..\n..\n");
}

#[test]
fn convert_default_mode_fits_full_art_box() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "wide.png", &make_gradient(400, 100));
    let dst = dir.path().join("out.txt");

    convert(&src, &dst, false).unwrap();
    let art = fs::read_to_string(&dst).unwrap();
    assert_grid(&art, 65, 16);
    let first = art.lines().next().unwrap();
    assert!(first.starts_with('@'));
    assert!(first.ends_with(|c: char| c == '-' || c == '.'));
}

#[test]
fn convert_reverse_flips_the_ramp() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(
        dir.path(),
        "black.png",
        &RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])),
    );
    let dst = dir.path().join("out.txt");

    convert(&src, &dst, true).unwrap();
    let art = fs::read_to_string(&dst).unwrap();
    assert_grid(&art, 54, 54);
    assert!(art.lines().all(|row| row.bytes().all(|b| b == b'.')));
}

#[test]
fn convert_banner_uses_banner_ramp_and_box() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(
        dir.path(),
        "white.png",
        &RgbaImage::from_pixel(100, 30, Rgba([255, 255, 255, 255])),
    );
    let dst = dir.path().join("banner.txt");

    convert_banner(&src, &dst, 50, 15).unwrap();
    let art = fs::read_to_string(&dst).unwrap();
    assert_grid(&art, 50, 15);
    assert!(art.lines().all(|row| row.bytes().all(|b| b == b' ')));
}

#[test]
fn pixel_mode_keeps_small_images_and_caps_large_ones() {
    let dir = tempfile::tempdir().unwrap();
    let options = ConversionOptions {
        aspect_mode: AspectMode::Pixel,
        ..ConversionOptions::default()
    };

    let small = write_png(dir.path(), "small.png", &make_gradient(12, 5));
    let dst = dir.path().join("small.txt");
    convert_with_options(&small, &dst, &options).unwrap();
    assert_grid(&fs::read_to_string(&dst).unwrap(), 12, 5);

    let large = write_png(dir.path(), "large.png", &make_gradient(640, 480));
    let dst = dir.path().join("large.txt");
    convert_with_options(&large, &dst, &options).unwrap();
    assert_grid(&fs::read_to_string(&dst).unwrap(), 266, 200);
}

#[test]
fn fixed_mode_ignores_aspect_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "square.png", &make_gradient(64, 64));
    let dst = dir.path().join("fixed.txt");
    let options = ConversionOptions {
        aspect_mode: AspectMode::Fixed,
        fixed_width: 30,
        fixed_height: 4,
        mode: ConversionMode::Banner,
        ..ConversionOptions::default()
    };

    convert_with_options(&src, &dst, &options).unwrap();
    assert_grid(&fs::read_to_string(&dst).unwrap(), 30, 4);
}

#[test]
fn jpeg_input_is_supported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpg");
    image::DynamicImage::ImageRgba8(make_gradient(130, 108))
        .to_rgb8()
        .save_with_format(&path, ImageFormat::Jpeg)
        .unwrap();
    let dst = dir.path().join("photo.txt");

    convert(&path, &dst, false).unwrap();
    assert_grid(&fs::read_to_string(&dst).unwrap(), 65, 54);
}

#[test]
fn corrupt_input_fails_without_creating_output() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("broken.png");
    fs::write(&src, b"\x89PNG\r\n\x1a\n not really a png").unwrap();
    let dst = dir.path().join("out.txt");

    let err = convert(&src, &dst, false).unwrap_err();
    assert!(matches!(err, Img2AsciiError::Decode { .. }));
    assert!(!dst.exists());

    let err = decode("inline", &[0u8; 32]).unwrap_err();
    assert!(matches!(err, Img2AsciiError::Decode { .. }));
}

#[test]
fn failed_conversion_leaves_previous_output_intact() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "ok.png", &make_gradient(10, 10));
    let dst = dir.path().join("out.txt");
    fs::write(&dst, "previous\n").unwrap();

    let options = ConversionOptions {
        aspect_mode: AspectMode::Fixed,
        fixed_width: 0,
        fixed_height: 5,
        ..ConversionOptions::default()
    };
    let err = convert_with_options(&src, &dst, &options).unwrap_err();
    assert_eq!(err, Img2AsciiError::Resize { width: 0, height: 5 });
    assert_eq!(fs::read_to_string(&dst).unwrap(), "previous\n");
}

#[test]
fn missing_source_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("out.txt");
    let err = convert(dir.path().join("nonexistent.jpg"), &dst, false).unwrap_err();
    assert!(matches!(err, Img2AsciiError::Source { .. }));
    assert!(!dst.exists());
}

#[test]
fn unwritable_destination_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "ok.png", &make_gradient(10, 10));
    let dst = dir.path().join("missing-dir").join("out.txt");
    let err = convert(&src, &dst, false).unwrap_err();
    assert!(matches!(err, Img2AsciiError::Write { .. }));
}

#[test]
fn debug_log_is_opt_in() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "ok.png", &make_gradient(20, 20));
    let dst = dir.path().join("out.txt");
    let log = dir.path().join("debug.log");

    convert(&src, &dst, false).unwrap();
    assert!(!log.exists());

    let options = ConversionOptions {
        debug_log: Some(log.clone()),
        ..ConversionOptions::default()
    };
    convert_with_options(&src, &dst, &options).unwrap();
    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        fs::read_to_string(&dst).unwrap()
    );
}

#[test]
fn render_file_matches_written_art_despite_bad_debug_log() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "grad.png", &make_gradient(1200, 1000));
    let dst = dir.path().join("out.txt");
    let log = dir.path().join("missing").join("debug.log");

    convert(&src, &dst, false).unwrap();
    let options = ConversionOptions {
        debug_log: Some(log.clone()),
        ..ConversionOptions::default()
    };
    let art = render_file(&src, &options).unwrap();
    assert_eq!(art, fs::read_to_string(&dst).unwrap());
    assert_grid(&art, 64, 54);
    assert!(!log.exists());
}

#[test]
fn explicit_worker_count_matches_default_output() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_png(dir.path(), "grad.png", &make_gradient(90, 70));
    let default_dst = dir.path().join("default.txt");
    let single_dst = dir.path().join("single.txt");

    convert(&src, &default_dst, false).unwrap();
    let options = ConversionOptions {
        workers: Some(1),
        ..ConversionOptions::default()
    };
    convert_with_options(&src, &single_dst, &options).unwrap();
    assert_eq!(
        fs::read_to_string(default_dst).unwrap(),
        fs::read_to_string(single_dst).unwrap()
    );
}
