use crate::error::RenderError;
use crate::models::SheetSpec;
use resvg::usvg::{self, fontdb, Transform};
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Rasterizes sheet SVG to an RGB PNG page.
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a new SVG renderer with fonts loaded from the provided data
    pub fn with_fonts(fonts: Vec<(String, std::borrow::Cow<'static, [u8]>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data.into_owned());
            tracing::debug!(font = %name, "Loaded font");
        }

        // System fonts cover the default Helvetica/Arial/sans-serif stack
        fontdb.load_system_fonts();

        tracing::debug!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );
        if fontdb.len() == 0 {
            tracing::warn!("No fonts available; bead codes and the materials list will be blank");
        }

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a new SVG renderer with no custom fonts (system fonts only)
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Render SVG to a PNG of exactly `spec` pixels.
    ///
    /// With `optimize` the PNG is recompressed by oxipng; if that fails the
    /// plain encoding is returned.
    pub fn render_to_png(
        &self,
        svg_data: &[u8],
        spec: SheetSpec,
        optimize: bool,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data, spec)?;
        let rgb = rgba_to_rgb(pixmap.data());

        let png_bytes = encode_png(spec, &rgb)?;
        if !optimize {
            return Ok(png_bytes);
        }

        // Re-compress with oxipng (zopfli + adaptive filter selection)
        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        );
        match optimized {
            Ok(bytes) => {
                tracing::debug!(
                    before = png_bytes.len(),
                    after = bytes.len(),
                    "Optimized PNG"
                );
                Ok(bytes)
            }
            Err(e) => {
                tracing::warn!(%e, "PNG optimization failed, keeping plain encoding");
                Ok(png_bytes)
            }
        }
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(&self, svg_data: &[u8], spec: SheetSpec) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };

        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = spec.width as f32 / svg_size.width();
        let scale_y = spec.height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let scaled_width = svg_size.width() * scale;
        let scaled_height = svg_size.height() * scale;
        let offset_x = (spec.width as f32 - scaled_width) / 2.0;
        let offset_y = (spec.height as f32 - scaled_height) / 2.0;

        let mut pixmap =
            Pixmap::new(spec.width, spec.height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten premultiplied RGBA onto white.
///
/// The pixmap is filled white before rendering, so in practice every pixel
/// is already opaque.
fn rgba_to_rgb(rgba_data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba_data.len() / 4 * 3);
    for pixel in rgba_data.chunks_exact(4) {
        let inv = 255 - pixel[3] as u16;
        for &channel in &pixel[..3] {
            rgb.push((channel as u16 + inv).min(255) as u8);
        }
    }
    rgb
}

/// Encode 8-bit RGB rows as a PNG (fast settings; oxipng may re-compress)
fn encode_png(spec: SheetSpec, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, spec.width, spec.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);

        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
