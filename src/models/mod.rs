pub mod config;
pub mod sheet_spec;

pub use config::{AppConfig, PegboardConfig, SheetConfig};
pub use sheet_spec::SheetSpec;
