#![allow(clippy::module_inception)]

//! bead-match: palette matching for fuse-bead patterns
//!
//! This library maps the pixels of a small image onto a fixed palette of
//! bead colors and counts how many beads of each color the pattern needs.
//!
//! # Quick Start
//!
//! ```
//! use bead_match::{Color, PaletteSubset, PatternScanner};
//!
//! let scanner = PatternScanner::new(PaletteSubset::Full.palette());
//! let pixels = vec![Color::new(46, 47, 50); 4];
//! let result = scanner.scan(&pixels, 2, 2).unwrap();
//!
//! assert_eq!(result.usage().get("Black"), 4);
//! assert_eq!(result.grid().get(1, 1).unwrap().entry().code(), "18");
//! ```
//!
//! # Matching
//!
//! [`NearestColorMatcher`] does not compute color distances. It keeps the
//! palette sorted three times, once per channel, and runs one cursor per
//! channel outward from where the pixel's value would sit:
//!
//! ```text
//! red   order:  ... [e-1] [e] [e+1] ...   proposes R-votes
//! green order:  ... [e-1] [e] [e+1] ...   proposes G-votes
//! blue  order:  ... [e-1] [e] [e+1] ...   proposes B-votes
//!
//! visit order per cursor:  e, e-1, e+1, e-2, e+2, ...
//! ```
//!
//! The first palette entry that has been proposed by all three cursors wins.
//! When a cursor's next step would leave its array it stops alternating and
//! walks one index at a time away from that end. Every round visits a new
//! index on every channel, so a palette of `n` colors needs at most `n`
//! rounds.
//!
//! The winner is close on all three channels but is not always the
//! Euclidean nearest color. A pixel that equals a palette color is matched
//! to that color directly unless
//! [`preserve_exact_matches(false)`](NearestColorMatcher::preserve_exact_matches)
//! is set.
//!
//! # Palettes
//!
//! [`PaletteSubset`] exposes the built-in catalog as shared
//! `&'static Palette` values; [`Palette::new`] validates custom palettes.

pub mod color;
pub mod matcher;
pub mod palette;
pub mod scan;

#[cfg(test)]
mod domain_tests;

pub use color::{Channel, Color};
pub use matcher::{MatchError, NearestColorMatcher};
pub use palette::{Palette, PaletteEntry, PaletteError, PaletteSubset};
pub use scan::{PatternScanner, PixelMatch, ResultGrid, ScanError, ScanResult, UsageCounts};
