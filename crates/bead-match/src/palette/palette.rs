//! Palette entries and the validated palette.

use std::collections::{HashMap, HashSet};

use super::error::PaletteError;
use crate::color::Color;

/// One bead color: a display name, the manufacturer code, and its RGB value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    name: String,
    code: String,
    color: Color,
}

impl PaletteEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, code: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            color,
        }
    }

    /// Display name, unique within a palette.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Code printed on the pattern sheet, unique within a palette.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// An ordered, validated set of bead colors.
///
/// Declaration order is preserved and is meaningful: it breaks ties when the
/// matcher sorts entries by channel, and it orders the materials list.
///
/// A palette is immutable once built. The name to code lookup is computed
/// once during construction.
///
/// # Example
///
/// ```
/// use bead_match::{Color, Palette, PaletteEntry};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new("Yellow", "03", Color::new(236, 216, 0)),
///     PaletteEntry::new("Orange", "04", Color::new(237, 97, 32)),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.code_for("Orange"), Some("04"));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    codes: HashMap<String, String>,
}

impl Palette {
    /// Build a palette from entries in declaration order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::DuplicateName`] if two entries share a name
    /// - [`PaletteError::DuplicateCode`] if two entries share a code
    /// - [`PaletteError::DuplicateColor`] if two entries share a color
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut names = HashSet::new();
        let mut codes = HashSet::new();
        let mut colors = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if !names.insert(entry.name()) {
                return Err(PaletteError::DuplicateName {
                    index,
                    name: entry.name.clone(),
                });
            }
            if !codes.insert(entry.code()) {
                return Err(PaletteError::DuplicateCode {
                    index,
                    code: entry.code.clone(),
                });
            }
            if !colors.insert(entry.color()) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        let codes = entries
            .iter()
            .map(|e| (e.name.clone(), e.code.clone()))
            .collect();

        Ok(Self { entries, codes })
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry at `index` in declaration order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Look up an entry by its display name.
    pub fn find_by_name(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Code for the entry with the given name.
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    /// The full name to code lookup.
    #[inline]
    pub fn code_map(&self) -> &HashMap<String, String> {
        &self.codes
    }
}
