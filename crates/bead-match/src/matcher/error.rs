//! Error type for the tri-search matcher.

use std::fmt;

use crate::color::{Channel, Color};

/// The tri-search failed to settle on a palette entry.
///
/// With a validated palette every round visits a fresh index on each
/// channel, so this indicates a bug rather than bad input. It is still
/// surfaced as an error so that a faulty search aborts instead of spinning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A channel cursor ran off the end of its sorted array
    CursorOutOfRange {
        /// The pixel being matched
        color: Color,
        /// The channel whose cursor escaped
        channel: Channel,
        /// Search round in which it happened
        round: usize,
    },
    /// All rounds were used without a three-way agreement
    SearchExhausted {
        /// The pixel being matched
        color: Color,
        /// Number of rounds attempted
        rounds: usize,
    },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::CursorOutOfRange {
                color,
                channel,
                round,
            } => write!(
                f,
                "{} cursor left the palette in round {} while matching {}",
                channel, round, color
            ),
            MatchError::SearchExhausted { color, rounds } => write!(
                f,
                "no palette entry agreed on by all channels for {} after {} rounds",
                color, rounds
            ),
        }
    }
}

impl std::error::Error for MatchError {}
