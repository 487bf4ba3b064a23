use crate::assets::AssetLoader;
use serde::Serialize;
use std::io;
use std::sync::Arc;
use tera::{Context, Tera};

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to read template: {0}")]
    Io(#[from] io::Error),
}

/// Service for rendering SVG templates with Tera
///
/// Templates come from the [`AssetLoader`]: TEMPLATES_DIR when set, embedded
/// otherwise. Output is XML-escaped, so file and color names are safe to
/// place in text nodes and attributes.
pub struct TemplateService {
    loader: Arc<AssetLoader>,
}

impl TemplateService {
    /// Create a new template service
    pub fn new(loader: Arc<AssetLoader>) -> Self {
        tracing::debug!(
            templates = loader.list_templates().len(),
            "Template service initialized"
        );
        Self { loader }
    }

    /// Render the named template with `data` as its context
    ///
    /// Templates are loaded fresh on every call so edits in TEMPLATES_DIR
    /// apply to the next conversion.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, TemplateError> {
        let content = self.loader.read_template_string(name).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                TemplateError::NotFound(name.to_string())
            } else {
                TemplateError::Io(e)
            }
        })?;
        Self::render_str(name, &content, data)
    }

    /// Render template source directly
    pub fn render_str<T: Serialize>(
        name: &str,
        content: &str,
        data: &T,
    ) -> Result<String, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".svg", ".xml"]);
        tera.add_raw_template(name, content)?;

        let context = Context::from_serialize(data)?;
        let svg = tera.render(name, &context)?;
        Ok(svg)
    }
}
