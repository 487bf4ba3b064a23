//! Color types
//!
//! Everything in this crate works on plain 8-bit sRGB triples. There is no
//! color-space conversion: the matcher compares raw channel values.

mod rgb;

pub use rgb::{Channel, Color};
