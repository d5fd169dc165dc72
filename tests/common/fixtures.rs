//! Test fixtures: synthetic images and encoded files.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Reference colors
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const GRAY: [u8; 3] = [128, 128, 128];
    /// Light warm skin tone
    pub const WARM_SKIN: [u8; 3] = [235, 190, 150];
    /// Cool, pale skin tone
    pub const COOL_SKIN: [u8; 3] = [200, 200, 215];
}

/// Row-major RGB samples of a uniform image
pub fn solid_samples(rgb: [u8; 3], width: u32, height: u32) -> Vec<u8> {
    rgb.repeat((width * height) as usize)
}

/// Same as [`solid_samples`] but in BGR order
pub fn solid_samples_bgr(rgb: [u8; 3], width: u32, height: u32) -> Vec<u8> {
    solid_samples([rgb[2], rgb[1], rgb[0]], width, height)
}

/// Image with `face` color inside `(x, y, w, h)` and `background` elsewhere
pub fn framed_samples(
    background: [u8; 3],
    face: [u8; 3],
    width: u32,
    height: u32,
    (x, y, w, h): (u32, u32, u32, u32),
) -> Vec<u8> {
    let mut samples = Vec::with_capacity((width * height * 3) as usize);
    for row in 0..height {
        for col in 0..width {
            let inside = col >= x && col < x + w && row >= y && row < y + h;
            samples.extend_from_slice(if inside { &face } else { &background });
        }
    }
    samples
}

/// Encode a uniform image in memory
pub fn encoded_solid(rgb: [u8; 3], width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(rgb));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

/// Write a uniform image file into `dir`
pub fn write_solid(dir: &Path, name: &str, rgb: [u8; 3], format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encoded_solid(rgb, 32, 32, format)).unwrap();
    path
}
