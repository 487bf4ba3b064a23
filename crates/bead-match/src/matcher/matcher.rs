//! Tri-search palette matcher.
//!
//! Instead of computing a distance to every palette entry, the matcher
//! looks at each channel on its own. Per channel, the palette is sorted by
//! that channel's value and a cursor starts where the pixel's value would
//! be inserted. The cursors then spread outward in lockstep, each one
//! proposing the entry under it. The first entry proposed by all three
//! channels is the match.
//!
//! The result is not always the Euclidean nearest color, but it is
//! deterministic and stays close on every channel at once.

use std::collections::HashMap;

use super::cursor::ChannelCursor;
use super::error::MatchError;
use crate::color::{Channel, Color};
use crate::palette::{Palette, PaletteEntry};

/// Channels that have proposed one palette entry during a search.
///
/// Entries are identified by their palette index; codes are unique within a
/// palette, so this is the same as tracking codes.
#[derive(Debug, Clone, Copy, Default)]
struct Votes(u8);

impl Votes {
    const ALL: u8 = 0b111;

    /// Record a proposal from `channel`. Returns true once all three
    /// channels have proposed this entry.
    #[inline]
    fn cast(&mut self, channel: Channel) -> bool {
        self.0 |= 1 << channel.index();
        self.0 == Self::ALL
    }
}

/// Maps pixel colors to palette entries.
///
/// Construction pre-sorts the palette once per channel; matching reads
/// only these immutable tables, so a matcher can be shared across threads
/// and reused for any number of pixels.
///
/// # Example
///
/// ```
/// use bead_match::{Color, NearestColorMatcher, PaletteSubset};
///
/// let matcher = NearestColorMatcher::new(PaletteSubset::Full.palette());
///
/// let entry = matcher.find_match(Color::new(46, 47, 50)).unwrap();
/// assert_eq!(entry.name(), "Black");
/// ```
#[derive(Debug, Clone)]
pub struct NearestColorMatcher<'p> {
    palette: &'p Palette,
    /// Palette indices sorted by red, green and blue respectively.
    sorted: [Vec<usize>; 3],
    exact: HashMap<Color, usize>,
    preserve_exact: bool,
}

impl<'p> NearestColorMatcher<'p> {
    /// Build a matcher for `palette`.
    ///
    /// Exact-match preservation is enabled by default.
    pub fn new(palette: &'p Palette) -> Self {
        let entries = palette.entries();
        let sorted = Channel::ALL.map(|channel| {
            let mut order: Vec<usize> = (0..entries.len()).collect();
            // Stable: equal channel values keep declaration order.
            order.sort_by_key(|&i| entries[i].color().channel(channel));
            order
        });
        let exact = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.color(), i))
            .collect();

        Self {
            palette,
            sorted,
            exact,
            preserve_exact: true,
        }
    }

    /// Set whether a pixel equal to a palette color short-circuits to that
    /// entry.
    ///
    /// When disabled every pixel goes through the tri-search, which can
    /// pick a different entry for an exact palette color if several entries
    /// share channel values.
    #[inline]
    pub fn preserve_exact_matches(mut self, enabled: bool) -> Self {
        self.preserve_exact = enabled;
        self
    }

    #[inline]
    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Palette entries in the order used for `channel`.
    pub fn channel_order(&self, channel: Channel) -> impl Iterator<Item = &'p PaletteEntry> + '_ {
        let entries = self.palette.entries();
        self.sorted[channel.index()].iter().map(move |&i| &entries[i])
    }

    /// Find the palette entry for one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if the search leaves the sorted arrays or runs
    /// out of rounds. Neither happens for a validated palette.
    pub fn find_match(&self, color: Color) -> Result<&'p PaletteEntry, MatchError> {
        let index = self.find_index(color)?;
        Ok(&self.palette.entries()[index])
    }

    /// Like [`find_match`](Self::find_match), returning the palette index.
    pub fn find_index(&self, color: Color) -> Result<usize, MatchError> {
        if self.preserve_exact {
            if let Some(&index) = self.exact.get(&color) {
                return Ok(index);
            }
        }
        self.tri_search(color)
    }

    /// First position in `channel`'s order whose value is >= `value`,
    /// clamped to the last position.
    fn entry_point(&self, channel: Channel, value: u8) -> usize {
        let entries = self.palette.entries();
        let order = &self.sorted[channel.index()];
        order
            .partition_point(|&i| entries[i].color().channel(channel) < value)
            .min(order.len() - 1)
    }

    fn tri_search(&self, color: Color) -> Result<usize, MatchError> {
        let len = self.palette.len();
        let mut cursors =
            Channel::ALL.map(|channel| ChannelCursor::new(self.entry_point(channel, color.channel(channel))));
        let mut votes = vec![Votes::default(); len];

        for round in 0..len {
            if round > 0 {
                for channel in Channel::ALL {
                    cursors[channel.index()].advance(round, len).ok_or(
                        MatchError::CursorOutOfRange {
                            color,
                            channel,
                            round,
                        },
                    )?;
                }
            }

            for channel in Channel::ALL {
                let position = cursors[channel.index()].position();
                let index = self.sorted[channel.index()][position];
                if votes[index].cast(channel) {
                    return Ok(index);
                }
            }
        }

        Err(MatchError::SearchExhausted { color, rounds: len })
    }
}
