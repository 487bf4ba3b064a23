use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bead_match::{Palette, PatternScanner};

use crate::assets::AssetLoader;
use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::rendering::SvgRenderer;
use crate::services::image_loader::SourceImage;
use crate::services::sheet_layout::{SheetDocument, SheetLayout};
use crate::services::TemplateService;

/// Output of rendering one image, before anything touches the disk
pub struct RenderedSheet {
    pub document: SheetDocument,
    pub svg: String,
    pub png: Vec<u8>,
}

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub columns: u32,
    pub rows: u32,
    pub colors_used: usize,
    pub total_beads: usize,
    pub bytes_written: usize,
}

/// Orchestrates load → scan → layout → template → rasterize → write
pub struct ConversionPipeline {
    config: Arc<AppConfig>,
    template_service: TemplateService,
    renderer: Arc<SvgRenderer>,
}

impl ConversionPipeline {
    /// Build a pipeline with fonts from the loader's FONTS_DIR
    pub fn new(config: Arc<AppConfig>, loader: Arc<AssetLoader>) -> Self {
        let renderer = Arc::new(SvgRenderer::with_fonts(loader.get_fonts()));
        Self::with_renderer(config, loader, renderer)
    }

    /// Build a pipeline sharing an existing renderer
    pub fn with_renderer(
        config: Arc<AppConfig>,
        loader: Arc<AssetLoader>,
        renderer: Arc<SvgRenderer>,
    ) -> Self {
        Self {
            config,
            template_service: TemplateService::new(loader),
            renderer,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The built-in palette named by the config
    pub fn palette(&self) -> Result<&'static Palette, ConvertError> {
        Ok(self.config.palette_subset()?.palette())
    }

    /// Match `image` against `palette` and render the sheet in memory
    pub fn render_sheet(
        &self,
        image: &SourceImage,
        palette: &Palette,
    ) -> Result<RenderedSheet, ConvertError> {
        let pegboard = self.config.pegboard;
        if (image.width, image.height) != (pegboard.width, pegboard.height) {
            tracing::warn!(
                image = %image.name,
                width = image.width,
                height = image.height,
                expected_width = pegboard.width,
                expected_height = pegboard.height,
                "Image size differs from the pegboard"
            );
        }

        let scanner = PatternScanner::new(palette).preserve_exact_matches(self.config.preserve_exact);
        let scan = scanner.scan(&image.pixels, image.width as usize, image.height as usize)?;
        tracing::debug!(
            colors = scan.usage().len(),
            beads = scan.usage().total(),
            "Matched image against palette"
        );

        let layout = SheetLayout::new(self.config.sheet.clone())?;
        let document = layout.layout(&image.name, &scan, palette)?;
        let svg = self
            .template_service
            .render(&self.config.sheet.template, &document)?;
        let png = self
            .renderer
            .render_to_png(svg.as_bytes(), layout.spec(), self.config.sheet.optimize)?;

        Ok(RenderedSheet { document, svg, png })
    }

    /// Convert the image at `input` and write the sheet to `output`.
    ///
    /// A `.svg` output gets the SVG markup; anything else gets the PNG.
    /// Nothing is written unless every earlier stage succeeded.
    pub fn convert(
        &self,
        input: &Path,
        output: &Path,
        palette: &Palette,
    ) -> Result<ConversionReport, ConvertError> {
        let image = SourceImage::open(input)?;
        let sheet = self.render_sheet(&image, palette)?;

        let bytes: &[u8] = if is_svg_path(output) {
            sheet.svg.as_bytes()
        } else {
            &sheet.png
        };
        write_atomically(output, bytes).map_err(|source| ConvertError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        let report = ConversionReport {
            output: output.to_path_buf(),
            columns: image.width,
            rows: image.height,
            colors_used: sheet.document.materials.len(),
            total_beads: sheet.document.total_beads(),
            bytes_written: bytes.len(),
        };
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            colors = report.colors_used,
            beads = report.total_beads,
            bytes = report.bytes_written,
            "Wrote bead sheet"
        );
        Ok(report)
    }
}

/// Write through a temp file in the target directory, then rename it over
/// `path`. A failed write leaves any existing file untouched.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::Builder::new()
        .prefix(".beadsheet-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_extension_detection() {
        assert!(is_svg_path(Path::new("out/sheet.svg")));
        assert!(is_svg_path(Path::new("SHEET.SVG")));
        assert!(!is_svg_path(Path::new("BeadTemplate.png")));
        assert!(!is_svg_path(Path::new("svg")));
    }

    #[test]
    fn test_write_atomically_replaces_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        std::fs::write(&path, b"old contents that are longer").unwrap();

        write_atomically(&path, b"new").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("sheet.png")]);
    }

    #[test]
    fn test_write_atomically_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope/sheet.png");
        assert!(write_atomically(&path, b"data").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_config_palette_is_a_palette_error() {
        let config = AppConfig {
            palette: "neon".to_string(),
            ..AppConfig::default()
        };
        let pipeline = ConversionPipeline::new(
            Arc::new(config),
            Arc::new(AssetLoader::new(None, None, None)),
        );
        assert!(matches!(
            pipeline.palette(),
            Err(ConvertError::Palette(_))
        ));
    }

    #[test]
    fn test_configured_palette_resolves() {
        let config = AppConfig {
            palette: "starter".to_string(),
            ..AppConfig::default()
        };
        let pipeline = ConversionPipeline::new(
            Arc::new(config),
            Arc::new(AssetLoader::new(None, None, None)),
        );
        assert_eq!(
            pipeline.palette().unwrap().len(),
            bead_match::PaletteSubset::Starter.palette().len()
        );
    }
}
