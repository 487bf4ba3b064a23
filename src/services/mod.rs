pub mod converter;
pub mod image_loader;
pub mod sheet_layout;
pub mod template_service;

pub use converter::{ConversionPipeline, ConversionReport, RenderedSheet};
pub use image_loader::SourceImage;
pub use sheet_layout::{SheetDocument, SheetLayout};
pub use template_service::{TemplateError, TemplateService};
