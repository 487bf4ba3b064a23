//! Places the bead grid, title and materials list on the page.
//!
//! The result is a [`SheetDocument`]: plain positioned values that the SVG
//! template turns into markup. All coordinates are page pixels.

use bead_match::{Palette, ScanResult};
use serde::Serialize;

use crate::error::RenderError;
use crate::models::{SheetConfig, SheetSpec};

pub const MATERIALS_HEADING: &str = "You will need the following bead colors:";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub x: u32,
    pub y: u32,
    pub font_size: u32,
    pub text: String,
}

/// One bead circle with its code label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeadMark {
    pub row: usize,
    pub column: usize,
    pub cx: u32,
    pub cy: u32,
    /// Baseline of the code label
    pub code_y: u32,
    pub code: String,
    pub name: String,
    /// `#RRGGBB`
    pub fill: String,
}

/// One materials list entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialLine {
    pub x: u32,
    pub y: u32,
    pub name: String,
    pub code: String,
    pub count: usize,
    pub text: String,
}

/// Template context for a complete sheet
#[derive(Debug, Clone, Serialize)]
pub struct SheetDocument {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub bead_radius: u32,
    pub inner_radius: u32,
    pub code_font_size: u32,
    pub list_font_size: u32,
    pub title: TextLine,
    pub heading: TextLine,
    pub beads: Vec<BeadMark>,
    pub materials: Vec<MaterialLine>,
}

impl SheetDocument {
    /// Total beads listed in the materials
    pub fn total_beads(&self) -> usize {
        self.materials.iter().map(|m| m.count).sum()
    }
}

pub struct SheetLayout {
    config: SheetConfig,
    spec: SheetSpec,
}

impl SheetLayout {
    /// Validate `config` and fix the page size.
    ///
    /// Every length must be at most [`SheetSpec::MAX_SIDE`], which keeps
    /// all position arithmetic inside `u32`. The bead radius must be
    /// non-zero and the border no wider than the radius.
    pub fn new(config: SheetConfig) -> Result<Self, RenderError> {
        let spec = SheetSpec::from_config(&config)?;

        let lengths = [
            ("bead_radius", config.bead_radius),
            ("bead_border", config.bead_border),
            ("grid_top", config.grid_top),
            ("title_y", config.title_y),
            ("title_font_size", config.title_font_size),
            ("list_x", config.list_x),
            ("list_y", config.list_y),
            ("list_row_height", config.list_row_height),
            ("list_column_width", config.list_column_width),
            ("list_font_size", config.list_font_size),
        ];
        if let Some(&(field, value)) = lengths.iter().find(|(_, v)| *v > SheetSpec::MAX_SIDE) {
            return Err(RenderError::InvalidLayout { field, value });
        }
        if config.bead_radius == 0 {
            return Err(RenderError::InvalidLayout {
                field: "bead_radius",
                value: 0,
            });
        }
        if config.bead_border > config.bead_radius {
            return Err(RenderError::InvalidLayout {
                field: "bead_border",
                value: config.bead_border,
            });
        }

        Ok(Self { config, spec })
    }

    pub fn spec(&self) -> SheetSpec {
        self.spec
    }

    #[inline]
    fn diameter(&self) -> u32 {
        self.config.bead_radius * 2
    }

    /// Lay out a scanned image.
    ///
    /// `source_name` is shown in the title. Materials follow palette
    /// declaration order and wrap into a new column every
    /// `list_rows_per_column` lines.
    pub fn layout(
        &self,
        source_name: &str,
        scan: &ScanResult<'_>,
        palette: &Palette,
    ) -> Result<SheetDocument, RenderError> {
        let cfg = &self.config;
        let grid = scan.grid();
        let (columns, rows) = (grid.width(), grid.height());
        let diameter = self.diameter();

        let too_large = || RenderError::GridTooLarge {
            columns,
            rows,
            width: self.spec.width,
            height: self.spec.height,
        };
        let grid_width = u32::try_from(columns)
            .ok()
            .and_then(|c| c.checked_mul(diameter))
            .filter(|&w| w <= self.spec.width)
            .ok_or_else(too_large)?;
        let grid_bottom = u32::try_from(rows)
            .ok()
            .and_then(|r| r.checked_mul(diameter))
            .and_then(|h| h.checked_add(cfg.grid_top))
            .filter(|&b| b <= self.spec.height)
            .ok_or_else(too_large)?;

        let heading_y = cfg.list_y.saturating_sub(cfg.list_row_height);
        if grid_bottom > heading_y.saturating_sub(cfg.list_font_size) {
            tracing::warn!(
                grid_bottom,
                heading_y,
                "Bead grid overlaps the materials list"
            );
        }

        let start_x = (self.spec.width - grid_width) / 2;
        let code_font_size = diameter / 3;
        let beads = grid
            .cells()
            .iter()
            .map(|cell| {
                // Both fit in u32: checked against the page size above.
                let cx = start_x + diameter * cell.column() as u32 + cfg.bead_radius;
                let cy = cfg.grid_top + diameter * cell.row() as u32 + cfg.bead_radius;
                let entry = cell.entry();
                BeadMark {
                    row: cell.row(),
                    column: cell.column(),
                    cx,
                    cy,
                    code_y: cy + code_font_size / 3,
                    code: entry.code().to_string(),
                    name: entry.name().to_string(),
                    fill: entry.color().to_hex(),
                }
            })
            .collect();

        let per_column = cfg.list_rows_per_column.max(1);
        let materials: Vec<MaterialLine> = scan
            .usage()
            .in_palette_order(palette)
            .enumerate()
            .map(|(i, (entry, count))| {
                // Long lists on tiny columns run off the page; saturate.
                let column = u32::try_from(i / per_column).unwrap_or(u32::MAX);
                let row = u32::try_from(i % per_column).unwrap_or(u32::MAX);
                MaterialLine {
                    x: cfg
                        .list_x
                        .saturating_add(column.saturating_mul(cfg.list_column_width)),
                    y: cfg
                        .list_y
                        .saturating_add(row.saturating_mul(cfg.list_row_height)),
                    name: entry.name().to_string(),
                    code: entry.code().to_string(),
                    count,
                    text: format!("{} ({}) - {} beads", entry.name(), entry.code(), count),
                }
            })
            .collect();

        if let Some(last) = materials.last() {
            if last.x >= self.spec.width {
                tracing::warn!(
                    colors = materials.len(),
                    "Materials list runs past the right edge of the page"
                );
            }
        }

        Ok(SheetDocument {
            width: self.spec.width,
            height: self.spec.height,
            font_family: cfg.font_family.clone(),
            bead_radius: cfg.bead_radius,
            inner_radius: cfg.bead_radius.saturating_sub(cfg.bead_border),
            code_font_size,
            list_font_size: cfg.list_font_size,
            title: TextLine {
                x: self.spec.width / 2,
                y: cfg.title_y,
                font_size: cfg.title_font_size,
                text: format!("Bead Pattern for {source_name}"),
            },
            heading: TextLine {
                x: cfg.list_x,
                y: heading_y,
                font_size: cfg.list_font_size,
                text: MATERIALS_HEADING.to_string(),
            },
            beads,
            materials,
        })
    }
}
