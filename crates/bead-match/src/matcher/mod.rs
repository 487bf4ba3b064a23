//! Nearest-color matching
//!
//! [`NearestColorMatcher`] maps a pixel to one palette entry with the
//! per-channel tri-search. See the `matcher` module source for the search
//! itself and `cursor` for the per-channel walk.

mod cursor;
mod error;
mod matcher;

pub use error::MatchError;
pub use matcher::NearestColorMatcher;
