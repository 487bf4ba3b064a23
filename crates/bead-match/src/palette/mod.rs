//! Palette types
//!
//! A [`Palette`] is an ordered, validated list of [`PaletteEntry`] values.
//! The built-in catalog is exposed through [`PaletteSubset`].

mod catalog;
mod error;
mod palette;

pub use catalog::PaletteSubset;
pub use error::PaletteError;
pub use palette::{Palette, PaletteEntry};
