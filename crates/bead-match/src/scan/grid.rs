//! Scan results: the matched grid and per-color usage counts.

use std::collections::HashMap;

use crate::palette::{Palette, PaletteEntry};

/// The palette entry chosen for one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelMatch<'p> {
    entry: &'p PaletteEntry,
    row: usize,
    column: usize,
}

impl<'p> PixelMatch<'p> {
    pub(crate) fn new(entry: &'p PaletteEntry, row: usize, column: usize) -> Self {
        Self { entry, row, column }
    }

    #[inline]
    pub fn entry(&self) -> &'p PaletteEntry {
        self.entry
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Row-major grid of matches, one per source pixel.
///
/// Every cell is filled: a grid only exists for a scan that completed.
#[derive(Debug, Clone)]
pub struct ResultGrid<'p> {
    cells: Vec<PixelMatch<'p>>,
    width: usize,
    height: usize,
}

impl<'p> ResultGrid<'p> {
    pub(crate) fn new(cells: Vec<PixelMatch<'p>>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            cells.len(),
            width * height,
            "cells length ({}) must match width * height ({}x{})",
            cells.len(),
            width,
            height,
        );
        Self {
            cells,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[PixelMatch<'p>] {
        &self.cells
    }

    /// The cell at (`row`, `column`), if inside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<&PixelMatch<'p>> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.cells.get(row * self.width + column)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[PixelMatch<'p>]> + '_ {
        self.cells.chunks(self.width)
    }
}

/// Number of beads needed per palette entry, keyed by entry name.
///
/// Only entries that were matched at least once appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageCounts {
    counts: HashMap<String, usize>,
}

impl UsageCounts {
    pub(crate) fn record(&mut self, name: &str) {
        // Only the first hit per entry allocates the key.
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
            }
        }
    }

    /// Count for `name`; zero if the entry was never matched.
    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct entries used.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total beads across all entries.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }

    /// Used entries with their counts, in palette declaration order.
    pub fn in_palette_order<'a>(
        &'a self,
        palette: &'a Palette,
    ) -> impl Iterator<Item = (&'a PaletteEntry, usize)> + 'a {
        palette
            .entries()
            .iter()
            .map(move |entry| (entry, self.get(entry.name())))
            .filter(|&(_, count)| count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_usage_counts_accumulate() {
        let mut usage = UsageCounts::default();
        usage.record("Black");
        usage.record("White");
        usage.record("Black");

        assert_eq!(usage.get("Black"), 2);
        assert_eq!(usage.get("White"), 1);
        assert_eq!(usage.get("Red"), 0);
        assert_eq!(usage.len(), 2);
        assert_eq!(usage.total(), 3);
    }

    #[test]
    fn test_usage_in_palette_order_skips_unused() {
        let palette = Palette::new(vec![
            PaletteEntry::new("White", "01", Color::new(241, 241, 241)),
            PaletteEntry::new("Red", "05", Color::new(191, 46, 64)),
            PaletteEntry::new("Black", "18", Color::new(46, 47, 50)),
        ])
        .unwrap();
        let mut usage = UsageCounts::default();
        usage.record("Black");
        usage.record("White");

        let listed: Vec<(&str, usize)> = usage
            .in_palette_order(&palette)
            .map(|(entry, count)| (entry.name(), count))
            .collect();
        assert_eq!(listed, vec![("White", 1), ("Black", 1)]);
    }

    #[test]
    fn test_grid_lookup_out_of_bounds() {
        let entry = PaletteEntry::new("Black", "18", Color::new(46, 47, 50));
        let cells = (0..6).map(|i| PixelMatch::new(&entry, i / 3, i % 3)).collect();
        let grid = ResultGrid::new(cells, 3, 2);

        assert_eq!(grid.get(1, 2).map(|m| (m.row(), m.column())), Some((1, 2)));
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 3).is_none());
        assert_eq!(grid.rows().count(), 2);
    }
}
