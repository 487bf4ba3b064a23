//! Error types for palette construction and lookup.

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette cannot be built from the supplied entries, or
/// when a built-in palette is requested by an unknown name.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No entries provided
    EmptyPalette,
    /// An entry name appears twice
    DuplicateName {
        /// Index of the second occurrence
        index: usize,
        /// The repeated name
        name: String,
    },
    /// An entry code appears twice
    DuplicateCode {
        /// Index of the second occurrence
        index: usize,
        /// The repeated code
        code: String,
    },
    /// Two entries share the same color
    DuplicateColor {
        /// Index of the second occurrence
        index: usize,
    },
    /// No built-in palette with this name
    UnknownSubset(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::DuplicateName { index, name } => {
                write!(f, "duplicate name '{}' at index {}", name, index)
            }
            PaletteError::DuplicateCode { index, code } => {
                write!(f, "duplicate code '{}' at index {}", code, index)
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
            PaletteError::UnknownSubset(name) => {
                write!(
                    f,
                    "unknown palette '{}' (expected one of: full, starter)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}
