use crate::assets::AssetLoader;
use bead_match::{PaletteError, PaletteSubset};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Built-in palette to match against ("full" or "starter")
    #[serde(default = "default_palette")]
    pub palette: String,

    /// Where the rendered sheet is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Map pixels that equal a bead color straight to that bead
    #[serde(default = "default_true")]
    pub preserve_exact: bool,

    /// Expected input size; other sizes are converted with a warning
    #[serde(default)]
    pub pegboard: PegboardConfig,

    /// Page layout
    #[serde(default)]
    pub sheet: SheetConfig,
}

fn default_palette() -> String {
    PaletteSubset::Full.name().to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("BeadTemplate.png")
}

fn default_true() -> bool {
    true
}

/// Pegboard dimensions in beads
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PegboardConfig {
    #[serde(default = "default_pegboard_side")]
    pub width: u32,
    #[serde(default = "default_pegboard_side")]
    pub height: u32,
}

fn default_pegboard_side() -> u32 {
    29
}

impl Default for PegboardConfig {
    fn default() -> Self {
        Self {
            width: default_pegboard_side(),
            height: default_pegboard_side(),
        }
    }
}

/// Layout of the printed sheet, in pixels at print resolution.
///
/// Defaults describe a US Letter page at 300 dpi.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    pub width: u32,
    pub height: u32,

    /// Radius of one bead circle
    pub bead_radius: u32,
    /// Width of the dark ring around each bead
    pub bead_border: u32,
    /// Top edge of the bead grid
    pub grid_top: u32,

    /// Baseline of the title line
    pub title_y: u32,
    pub title_font_size: u32,

    /// Left edge of the first materials column
    pub list_x: u32,
    /// Baseline of the first materials line
    pub list_y: u32,
    pub list_row_height: u32,
    pub list_column_width: u32,
    /// Materials lines per column before wrapping
    pub list_rows_per_column: usize,
    pub list_font_size: u32,

    pub font_family: String,

    /// SVG template name, resolved through TEMPLATES_DIR or the embedded set
    pub template: String,

    /// Recompress the PNG with oxipng
    pub optimize: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            width: 2550,
            height: 3300,
            bead_radius: 29,
            bead_border: 3,
            grid_top: 250,
            title_y: 150,
            title_font_size: 30,
            list_x: 200,
            list_y: 2200,
            list_row_height: 100,
            list_column_width: 600,
            list_rows_per_column: 10,
            list_font_size: 30,
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            template: "sheet.svg".to_string(),
            optimize: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        palette = %config.palette,
                        output = %config.output.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// The configured built-in palette
    pub fn palette_subset(&self) -> Result<PaletteSubset, PaletteError> {
        self.palette.parse()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            output: default_output(),
            preserve_exact: true,
            pegboard: PegboardConfig::default(),
            sheet: SheetConfig::default(),
        }
    }
}
