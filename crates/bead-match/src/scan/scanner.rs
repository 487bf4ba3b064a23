//! PatternScanner: matches every pixel of an image against a palette.

use super::error::ScanError;
use super::grid::{PixelMatch, ResultGrid, UsageCounts};
use crate::color::Color;
use crate::matcher::NearestColorMatcher;
use crate::palette::Palette;

/// Everything a completed scan produces.
#[derive(Debug, Clone)]
pub struct ScanResult<'p> {
    grid: ResultGrid<'p>,
    usage: UsageCounts,
}

impl<'p> ScanResult<'p> {
    #[inline]
    pub fn grid(&self) -> &ResultGrid<'p> {
        &self.grid
    }

    #[inline]
    pub fn usage(&self) -> &UsageCounts {
        &self.usage
    }
}

/// Scans images into bead grids.
///
/// The scanner owns a [`NearestColorMatcher`] built once for its palette
/// and is reusable across images: [`scan()`](Self::scan) takes `&self`.
///
/// # Example
///
/// ```
/// use bead_match::{Color, PaletteSubset, PatternScanner};
///
/// let scanner = PatternScanner::new(PaletteSubset::Starter.palette());
/// let pixels = vec![Color::new(241, 241, 241); 6];
/// let result = scanner.scan(&pixels, 3, 2).unwrap();
///
/// assert_eq!(result.grid().width(), 3);
/// assert_eq!(result.usage().get("White"), 6);
/// ```
#[derive(Debug, Clone)]
pub struct PatternScanner<'p> {
    matcher: NearestColorMatcher<'p>,
}

impl<'p> PatternScanner<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            matcher: NearestColorMatcher::new(palette),
        }
    }

    /// Set whether pixels equal to a palette color map straight to it.
    #[inline]
    pub fn preserve_exact_matches(mut self, enabled: bool) -> Self {
        self.matcher = self.matcher.preserve_exact_matches(enabled);
        self
    }

    #[inline]
    pub fn palette(&self) -> &'p Palette {
        self.matcher.palette()
    }

    #[inline]
    pub fn matcher(&self) -> &NearestColorMatcher<'p> {
        &self.matcher
    }

    /// Match `pixels` (row-major, top-left origin) against the palette.
    ///
    /// The matcher runs exactly once per pixel. Either every pixel is
    /// matched or an error is returned; there is no partial result.
    ///
    /// # Errors
    ///
    /// - [`ScanError::EmptyImage`] if `width` or `height` is zero
    /// - [`ScanError::PixelCountMismatch`] if `pixels.len() != width * height`
    /// - [`ScanError::Match`] if the matcher fails on any pixel
    pub fn scan(
        &self,
        pixels: &[Color],
        width: usize,
        height: usize,
    ) -> Result<ScanResult<'p>, ScanError> {
        if width == 0 || height == 0 {
            return Err(ScanError::EmptyImage { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(ScanError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let mut cells = Vec::with_capacity(expected);
        let mut usage = UsageCounts::default();
        for (i, &color) in pixels.iter().enumerate() {
            let (row, column) = (i / width, i % width);
            let entry = self
                .matcher
                .find_match(color)
                .map_err(|source| ScanError::Match {
                    row,
                    column,
                    source,
                })?;
            usage.record(entry.name());
            cells.push(PixelMatch::new(entry, row, column));
        }

        Ok(ScanResult {
            grid: ResultGrid::new(cells, width, height),
            usage,
        })
    }
}
