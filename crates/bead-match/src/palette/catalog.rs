//! Built-in bead catalog.
//!
//! The catalog lists the standard fuse-bead colors with their published
//! codes and RGB values. Palettes built from it are constructed once per
//! process and handed out as `&'static Palette`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::error::PaletteError;
use super::palette::{Palette, PaletteEntry};
use crate::color::Color;

/// (name, code, [r, g, b]) in catalog order.
const CATALOG: &[(&str, &str, [u8; 3])] = &[
    ("White", "01", [241, 241, 241]),
    ("Cream", "02", [224, 222, 169]),
    ("Yellow", "03", [236, 216, 0]),
    ("Orange", "04", [237, 97, 32]),
    ("Red", "05", [191, 46, 64]),
    ("Bubblegum", "06", [221, 102, 155]),
    ("Purple", "07", [96, 64, 137]),
    ("Dark Blue", "08", [43, 63, 135]),
    ("Light Blue", "09", [51, 112, 192]),
    ("Dark Green", "10", [28, 117, 62]),
    ("Pearl Coral", "100", [249, 126, 121]),
    ("Pearl Light Blue", "101", [122, 174, 162]),
    ("Pearl Green", "102", [132, 183, 145]),
    ("Pearl Yellow", "103", [202, 192, 51]),
    ("Pearl Light Pink", "104", [215, 168, 162]),
    ("Silver", "105", [119, 123, 129]),
    ("Light Green", "11", [86, 186, 159]),
    ("Brown", "12", [81, 57, 49]),
    ("Grey", "17", [138, 141, 145]),
    ("Black", "18", [46, 47, 50]),
    ("Rust", "20", [140, 55, 44]),
    ("Light Brown", "21", [129, 93, 52]),
    ("Peach", "33", [238, 186, 178]),
    ("Tan", "35", [188, 147, 113]),
    ("Magenta", "38", [242, 42, 123]),
    ("Neon Yellow", "47", [220, 224, 2]),
    ("Neon Orange", "48", [255, 119, 0]),
    ("Neon Green", "49", [1, 158, 67]),
    ("Neon Pink", "50", [255, 57, 145]),
    ("Pastel Blue", "52", [83, 144, 209]),
    ("Pastel Green", "53", [118, 200, 130]),
    ("Pastel Lavender", "54", [138, 114, 193]),
    ("Pastel Yellow", "56", [254, 248, 117]),
    ("Cheddar", "57", [241, 170, 12]),
    ("Toothpaste", "58", [147, 200, 212]),
    ("Hot Coral", "59", [255, 56, 81]),
    ("Plum", "60", [62, 75, 156]),
    ("Kiwi Lime", "61", [108, 190, 19]),
    ("Cyan", "62", [43, 137, 198]),
    ("Blush", "63", [255, 130, 133]),
    ("Periwinkle Blue", "70", [100, 124, 190]),
    ("Light Pink", "79", [246, 179, 221]),
    ("Bright Green", "80", [79, 173, 66]),
    ("Light Gray", "81", [177, 181, 178]),
    ("Evergreen", "179", [53, 83, 67]),
    ("Lavender", "82", [173, 152, 212]),
    ("Pink", "83", [228, 72, 146]),
    ("Gold", "85", [187, 118, 52]),
    ("Raspberry", "88", [165, 48, 97]),
    ("Butterscotch", "90", [212, 132, 55]),
    ("Parrot Green", "91", [6, 124, 129]),
    ("Dark Grey", "92", [77, 81, 86]),
    ("Blueberry Cream", "93", [130, 151, 217]),
];

/// Names of the starter-kit colors, in the kit's own order.
const STARTER: &[&str] = &[
    "Pink",
    "Magenta",
    "Red",
    "Cheddar",
    "Neon Orange",
    "Yellow",
    "Light Green",
    "Kiwi Lime",
    "Parrot Green",
    "Light Blue",
    "Plum",
    "Purple",
    "Light Brown",
    "Black",
    "White",
];

/// A named built-in palette.
///
/// # Example
///
/// ```
/// use bead_match::PaletteSubset;
///
/// let subset: PaletteSubset = "starter".parse().unwrap();
/// assert_eq!(subset.palette().len(), 15);
/// assert_eq!(PaletteSubset::Full.palette().len(), 53);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteSubset {
    /// Every catalog color, in catalog order
    #[default]
    Full,
    /// The 15 colors of a common starter kit
    Starter,
}

static FULL: LazyLock<Palette> = LazyLock::new(|| build(CATALOG.iter().copied()));

static STARTER_PALETTE: LazyLock<Palette> = LazyLock::new(|| {
    build(STARTER.iter().filter_map(|name| {
        CATALOG
            .iter()
            .copied()
            .find(|(catalog_name, _, _)| catalog_name == name)
    }))
});

// The tables above are fixed and covered by tests, so validation cannot fail.
fn build<'a>(rows: impl Iterator<Item = (&'a str, &'a str, [u8; 3])>) -> Palette {
    let entries = rows
        .map(|(name, code, rgb)| PaletteEntry::new(name, code, Color::from_bytes(rgb)))
        .collect();
    Palette::new(entries).unwrap_or_else(|err| panic!("built-in palette is invalid: {}", err))
}

impl PaletteSubset {
    /// All subsets, for listings.
    pub const ALL: [PaletteSubset; 2] = [PaletteSubset::Full, PaletteSubset::Starter];

    /// The shared palette for this subset.
    ///
    /// Built on first use and reused for the lifetime of the process.
    pub fn palette(self) -> &'static Palette {
        match self {
            PaletteSubset::Full => &FULL,
            PaletteSubset::Starter => &STARTER_PALETTE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteSubset::Full => "full",
            PaletteSubset::Starter => "starter",
        }
    }
}

impl fmt::Display for PaletteSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteSubset {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(PaletteSubset::Full),
            "starter" => Ok(PaletteSubset::Starter),
            _ => Err(PaletteError::UnknownSubset(s.to_string())),
        }
    }
}
