//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert `path` is a PNG page of the given size and return it decoded
pub fn assert_png_page(path: &Path, width: u32, height: u32) -> image::RgbImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );

    let img = image::load_from_memory(&bytes)
        .expect("decode output PNG")
        .to_rgb8();
    assert_eq!(img.dimensions(), (width, height), "Unexpected page size");
    img
}

/// Assert the materials list has exactly these (name, count) lines, in order
pub fn assert_materials(doc: &beadsheet::services::SheetDocument, expected: &[(&str, usize)]) {
    let actual: Vec<(&str, usize)> = doc
        .materials
        .iter()
        .map(|m| (m.name.as_str(), m.count))
        .collect();
    assert_eq!(actual, expected);
}

/// Assert nothing was written at `path`
pub fn assert_no_output(path: &Path) {
    assert!(
        !path.exists(),
        "Expected no output at {}, but the file exists",
        path.display()
    );
}
