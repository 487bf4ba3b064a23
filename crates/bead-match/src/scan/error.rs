//! Error type for image scans.

use std::fmt;

use crate::matcher::MatchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Width or height is zero
    EmptyImage {
        width: usize,
        height: usize,
    },
    /// Pixel slice does not hold width * height pixels
    PixelCountMismatch {
        expected: usize,
        actual: usize,
    },
    /// Matching a pixel failed; the scan was aborted
    Match {
        row: usize,
        column: usize,
        source: MatchError,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            ScanError::PixelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel count mismatch: expected {} pixels, got {}",
                    expected, actual
                )
            }
            ScanError::Match { row, column, .. } => {
                write!(f, "failed to match pixel at row {}, column {}", row, column)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Match { source, .. } => Some(source),
            _ => None,
        }
    }
}
