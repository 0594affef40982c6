//! End-to-end tests through the decode boundary: encoded bytes in, text out.

use std::io::Cursor;

use asciigram::ascii::{render, render_to_text, RenderOptions};
use asciigram::decode::decode_image;
use asciigram::output::format_message;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

fn encode_png(image: RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encoding");
    bytes
}

#[test]
fn test_decode_preserves_dimensions() {
    let bytes = encode_png(RgbImage::from_pixel(37, 21, Rgb([10, 200, 30])));
    let image = decode_image(&bytes).unwrap();
    assert_eq!((image.width(), image.height()), (37, 21));
}

#[test]
fn test_png_roundtrip_renders_solid_white() {
    let bytes = encode_png(RgbImage::from_pixel(100, 50, Rgb([255, 255, 255])));
    let image = decode_image(&bytes).unwrap();

    let options = RenderOptions {
        max_cols: 10,
        ..Default::default()
    };
    let art = render(&image, &options).unwrap();
    assert_eq!((art.cols, art.rows), (10, 3));
    assert!(art.chars.iter().all(|&c| c == '@'));
}

#[test]
fn test_alpha_channel_is_dropped_at_decode() {
    // Fully transparent white still renders as white: transparency plays no
    // part in brightness.
    let rgba = RgbaImage::from_pixel(20, 10, Rgba([255, 255, 255, 0]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encoding");

    let image = decode_image(&bytes).unwrap();
    let options = RenderOptions {
        max_cols: 5,
        ..Default::default()
    };
    let art = render(&image, &options).unwrap();
    assert!(art.chars.iter().all(|&c| c == '@'));
}

#[test]
fn test_horizontal_gradient_renders_darker_to_brighter() {
    let mut source = RgbImage::new(200, 100);
    for (x, _, pixel) in source.enumerate_pixels_mut() {
        let v = (x * 255 / 199) as u8;
        *pixel = Rgb([v, v, v]);
    }
    let bytes = encode_png(source);
    let image = decode_image(&bytes).unwrap();

    let options = RenderOptions {
        max_cols: 10,
        ..Default::default()
    };
    let art = render(&image, &options).unwrap();

    // Within each row the ramp index never decreases left to right.
    let ramp = &options.ramp;
    for row in art.chars.chunks(art.cols as usize) {
        let mut prev = 0;
        for &glyph in row {
            let idx = ramp.chars().iter().position(|&c| c == glyph).unwrap();
            assert!(idx >= prev, "gradient row not monotonic");
            prev = idx;
        }
        // The row actually spans dark to bright, not one flat glyph.
        let first = ramp.chars().iter().position(|&c| c == row[0]).unwrap();
        let last = ramp
            .chars()
            .iter()
            .position(|&c| c == row[row.len() - 1])
            .unwrap();
        assert!(last > first);
    }
}

#[test]
fn test_jpeg_roundtrip_renders() {
    // JPEG is lossy, so just pin the shape and the alphabet.
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(80, 80, Rgb([200, 60, 60])))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .expect("jpeg encoding");

    let image = decode_image(&bytes).unwrap();
    let options = RenderOptions {
        max_cols: 16,
        ..Default::default()
    };
    let text = render_to_text(&image, &options).unwrap();
    for c in text.chars() {
        assert!(c == '\n' || options.ramp.chars().contains(&c));
    }
}

#[test]
fn test_full_delivery_message_shape() {
    let bytes = encode_png(RgbImage::from_pixel(40, 40, Rgb([128, 128, 128])));
    let image = decode_image(&bytes).unwrap();

    let options = RenderOptions {
        max_cols: 8,
        ..Default::default()
    };
    let text = render_to_text(&image, &options).unwrap();
    let message = format_message(&text, true);

    assert!(message.starts_with("```\n"));
    assert!(message.ends_with("\n```"));
    assert!(message.contains(&text));
}
