use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bead_match::PaletteSubset;
use beadsheet::assets::{AssetCategory, AssetLoader};
use beadsheet::models::AppConfig;
use beadsheet::services::ConversionPipeline;

#[derive(Parser)]
#[command(name = "beadsheet")]
#[command(about = "Turn pixel art into printable fuse-bead pattern sheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image into a bead pattern sheet
    Convert {
        /// Input image (PNG, JPEG, GIF or BMP), ideally 29x29 pixels
        input: PathBuf,

        /// Output file; a .svg extension writes the SVG source instead of PNG
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bead palette: "full" or "starter"
        #[arg(short, long)]
        palette: Option<String>,

        /// Run every pixel through the search, even exact bead colors
        #[arg(long)]
        no_exact: bool,
    },
    /// List the bead colors of a palette
    Palettes {
        /// Bead palette: "full" or "starter"
        #[arg(short, long, default_value = "full")]
        palette: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract SVG templates
        #[arg(long)]
        templates: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            palette,
            no_exact,
        }) => run_convert_command(input, output, palette, no_exact),
        Some(Commands::Palettes { palette, json }) => run_palettes_command(&palette, json),
        Some(Commands::Init {
            config,
            templates,
            all,
            force,
            list,
        }) => run_init_command(config, templates, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadsheet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Convert one image to a sheet
fn run_convert_command(
    input: PathBuf,
    output: Option<PathBuf>,
    palette: Option<String>,
    no_exact: bool,
) -> anyhow::Result<()> {
    init_tracing();

    let asset_loader = Arc::new(AssetLoader::from_env());
    let mut config = AppConfig::load_from_assets(&asset_loader);

    // CLI flags win over config.yaml
    if let Some(name) = palette {
        config.palette = name;
    }
    if no_exact {
        config.preserve_exact = false;
    }
    let output = output.unwrap_or_else(|| config.output.clone());

    let pipeline = ConversionPipeline::new(Arc::new(config), asset_loader);
    let palette = pipeline.palette()?;
    tracing::info!(
        input = %input.display(),
        palette = %pipeline.config().palette,
        colors = palette.len(),
        "Converting image"
    );

    let report = pipeline
        .convert(&input, &output, palette)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!(
        "Wrote {} ({}x{} beads, {} colors, {} bytes)",
        report.output.display(),
        report.columns,
        report.rows,
        report.colors_used,
        report.bytes_written
    );
    Ok(())
}

#[derive(Serialize)]
struct PaletteListing<'a> {
    name: &'a str,
    code: &'a str,
    hex: String,
    rgb: [u8; 3],
}

/// Print the entries of a built-in palette
fn run_palettes_command(name: &str, json: bool) -> anyhow::Result<()> {
    let subset: PaletteSubset = name.parse()?;
    let listing: Vec<PaletteListing<'_>> = subset
        .palette()
        .entries()
        .iter()
        .map(|entry| PaletteListing {
            name: entry.name(),
            code: entry.code(),
            hex: entry.color().to_hex(),
            rgb: entry.color().to_bytes(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Palette '{subset}' ({} colors):\n", listing.len());
    for entry in &listing {
        println!("  {:>3}  {}  {}", entry.code, entry.hex, entry.name);
    }
    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    config: bool,
    templates: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Templates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || templates {
        categories.push(AssetCategory::Templates);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --templates, or --config");
        eprintln!("\nRun 'beadsheet init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }

    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let templates_dir = std::env::var("TEMPLATES_DIR").ok();
    let fonts_dir = std::env::var("FONTS_DIR").ok();

    println!("Beadsheet v{VERSION}");
    println!("Fuse-bead pattern sheets from pixel art\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  TEMPLATES_DIR = {}",
        templates_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  FONTS_DIR     = {}",
        fonts_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");
    let loader = AssetLoader::from_env();

    let config_source = match loader.config_file() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:    {config_source}");

    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "file"
        } else {
            "files"
        }
    }

    let templates_count = loader.list_templates().len();
    let embedded_count = AssetLoader::list_embedded(AssetCategory::Templates).len();
    match loader.templates_dir() {
        Some(path) if path.exists() => println!(
            "  Templates: {} ({templates_count} {}, {embedded_count} embedded)",
            path.display(),
            plural(templates_count)
        ),
        _ => println!(
            "  Templates: embedded ({embedded_count} {})",
            plural(embedded_count)
        ),
    }

    let fonts_count = loader.get_fonts().len();
    match loader.fonts_dir() {
        Some(path) if path.exists() => println!(
            "  Fonts:     {} ({fonts_count} {}) + system fonts",
            path.display(),
            plural(fonts_count)
        ),
        _ => println!("  Fonts:     system fonts"),
    }

    let config = AppConfig::load_from_assets(&loader);
    println!("\nConfiguration:");
    println!("  Palette:   {}", config.palette);
    println!(
        "  Pegboard:  {}x{}",
        config.pegboard.width, config.pegboard.height
    );
    println!("  Output:    {}", config.output.display());

    println!("\nCommands:");
    println!("  beadsheet convert   Convert an image to a bead sheet");
    println!("  beadsheet palettes  List bead colors");
    println!("  beadsheet init      Extract embedded assets");
    println!("\nRun 'beadsheet --help' for more details.");
}
