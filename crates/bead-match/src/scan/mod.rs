//! Image scanning
//!
//! [`PatternScanner`] drives the matcher over a whole image and collects a
//! [`ResultGrid`] plus [`UsageCounts`].

mod error;
mod grid;
mod scanner;

pub use error::ScanError;
pub use grid::{PixelMatch, ResultGrid, UsageCounts};
pub use scanner::{PatternScanner, ScanResult};
