//! Per-channel search cursor.
//!
//! Each channel walks its sorted index array outward from the entry point.
//! While both directions are open the cursor alternates around the entry
//! point with a growing step; once a step would leave the array the cursor
//! is clamped and walks one index at a time away from the wall it hit.

/// Movement mode of a [`ChannelCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sweep {
    /// Alternating around the entry point: e, e-1, e+1, e-2, e+2, ...
    Bidirectional,
    /// Hit the low end; walks towards higher indices.
    ClampedForward,
    /// Hit the high end; walks towards lower indices.
    ClampedBackward,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ChannelCursor {
    position: usize,
    sweep: Sweep,
}

/// Signed step applied in bidirectional mode before round `round` (1-based).
///
/// Odd rounds step down, even rounds step up, each by the round number,
/// which alternates the cursor around the entry point.
#[inline]
fn round_offset(round: usize) -> isize {
    let step = round as isize;
    if round % 2 == 1 {
        -step
    } else {
        step
    }
}

impl ChannelCursor {
    pub(crate) fn new(entry_point: usize) -> Self {
        Self {
            position: entry_point,
            sweep: Sweep::Bidirectional,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    #[cfg(test)]
    pub(crate) fn sweep(&self) -> Sweep {
        self.sweep
    }

    /// Move the cursor for search round `round` (1-based) over an array of
    /// `len` entries.
    ///
    /// Returns the new position, or `None` if the cursor would leave
    /// `0..len`. The latter only happens once every index has been visited.
    pub(crate) fn advance(&mut self, round: usize, len: usize) -> Option<usize> {
        let last = len.checked_sub(1)?;
        let next = match self.sweep {
            Sweep::ClampedForward => self.position + 1,
            Sweep::ClampedBackward => self.position.checked_sub(1)?,
            Sweep::Bidirectional => {
                let candidate = self.position as isize + round_offset(round);
                if candidate > last as isize {
                    self.sweep = Sweep::ClampedBackward;
                    self.position.checked_sub(1)?
                } else if candidate < 0 {
                    self.sweep = Sweep::ClampedForward;
                    self.position + 1
                } else {
                    candidate as usize
                }
            }
        };

        if next > last {
            return None;
        }
        self.position = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(entry_point: usize, len: usize, rounds: usize) -> Vec<Option<usize>> {
        let mut cursor = ChannelCursor::new(entry_point);
        (1..=rounds).map(|r| cursor.advance(r, len)).collect()
    }

    #[test]
    fn test_bidirectional_alternates_around_entry_point() {
        // 5, 4, 6, 3, 7, 2, 8
        let visited = walk(5, 11, 6);
        assert_eq!(
            visited,
            vec![Some(4), Some(6), Some(3), Some(7), Some(2), Some(8)]
        );
    }

    #[test]
    fn test_low_wall_switches_to_forward() {
        // 1, 0, 2, then -1 is out of range: step inward from 2
        let mut cursor = ChannelCursor::new(1);
        assert_eq!(cursor.advance(1, 6), Some(0));
        assert_eq!(cursor.advance(2, 6), Some(2));
        assert_eq!(cursor.advance(3, 6), Some(3));
        assert_eq!(cursor.sweep(), Sweep::ClampedForward);
        assert_eq!(cursor.advance(4, 6), Some(4));
        assert_eq!(cursor.advance(5, 6), Some(5));
        assert_eq!(cursor.advance(6, 6), None);
    }

    #[test]
    fn test_high_wall_switches_to_backward() {
        // Entry point at the last index: the first step is downward and
        // the second would overshoot.
        let mut cursor = ChannelCursor::new(4);
        assert_eq!(cursor.advance(1, 5), Some(3));
        assert_eq!(cursor.advance(2, 5), Some(2));
        assert_eq!(cursor.sweep(), Sweep::ClampedBackward);
        assert_eq!(cursor.advance(3, 5), Some(1));
        assert_eq!(cursor.advance(4, 5), Some(0));
        assert_eq!(cursor.advance(5, 5), None);
    }

    #[test]
    fn test_entry_at_zero_clamps_immediately() {
        let mut cursor = ChannelCursor::new(0);
        assert_eq!(cursor.advance(1, 3), Some(1));
        assert_eq!(cursor.sweep(), Sweep::ClampedForward);
        assert_eq!(cursor.advance(2, 3), Some(2));
        assert_eq!(cursor.advance(3, 3), None);
    }

    #[test]
    fn test_every_index_visited_exactly_once() {
        for len in 1..20 {
            for entry in 0..len {
                let mut seen = vec![entry];
                let mut cursor = ChannelCursor::new(entry);
                for round in 1..len {
                    seen.push(cursor.advance(round, len).unwrap());
                }
                seen.sort_unstable();
                assert_eq!(seen, (0..len).collect::<Vec<_>>(), "len {} entry {}", len, entry);
            }
        }
    }

    #[test]
    fn test_single_entry_has_nowhere_to_go() {
        let mut cursor = ChannelCursor::new(0);
        assert_eq!(cursor.advance(1, 1), None);
        assert_eq!(cursor.position(), 0);
    }
}
