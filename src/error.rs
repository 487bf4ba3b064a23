use std::path::PathBuf;

use bead_match::{PaletteError, ScanError};
use thiserror::Error;

use crate::services::template_service::TemplateError;

/// Failure of a whole image-to-sheet conversion.
///
/// Any of these aborts the run before the output file is written.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Invalid sheet layout: {field} = {value}")]
    InvalidLayout { field: &'static str, value: u32 },

    #[error("Grid of {columns}x{rows} beads does not fit a {width}x{height} page")]
    GridTooLarge {
        columns: usize,
        rows: usize,
        width: u32,
        height: u32,
    },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
