//! Beadsheet - printable fuse-bead patterns from pixel art
//!
//! Matches every pixel of a small image to the nearest bead color of a
//! palette and renders a letter-size sheet with the bead grid and the list
//! of colors to buy. This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
