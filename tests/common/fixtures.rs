//! Test fixtures and constants.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Catalog colors used across tests
pub mod colors {
    pub const BLACK: [u8; 3] = [46, 47, 50];
    pub const WHITE: [u8; 3] = [241, 241, 241];
    pub const YELLOW: [u8; 3] = [236, 216, 0];
    pub const ORANGE: [u8; 3] = [237, 97, 32];
}

/// Write a single-color PNG and return its path
pub fn solid_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(&path)
        .expect("write fixture image");
    path
}

/// Write a PNG whose left half is `left` and right half is `right`
pub fn split_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    left: [u8; 3],
    right: [u8; 3],
) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    })
    .save(&path)
    .expect("write fixture image");
    path
}
