use crate::error::RenderError;
use crate::models::SheetConfig;

/// Pixel dimensions of the printed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSpec {
    pub width: u32,
    pub height: u32,
}

impl SheetSpec {
    /// US Letter at 300 dpi: 2550x3300
    pub const LETTER_300_DPI: Self = Self {
        width: 2550,
        height: 3300,
    };

    /// A4 at 300 dpi: 2480x3508
    pub const A4_300_DPI: Self = Self {
        width: 2480,
        height: 3508,
    };

    /// Largest side accepted; keeps the RGBA pixmap within a few hundred MB
    pub const MAX_SIDE: u32 = 10_000;

    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || width > Self::MAX_SIDE || height > Self::MAX_SIDE {
            return Err(RenderError::UnsupportedDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn from_config(sheet: &SheetConfig) -> Result<Self, RenderError> {
        Self::from_dimensions(sheet.width, sheet.height)
    }
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self::LETTER_300_DPI
    }
}
