use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use koalify::assets::{AssetLoader, CONFIG_ENV};
use koalify::models::AppConfig;
use koalify::services::{ConvertJob, ConvertService, OutputPaths};
use tile_dither::palette::COLOR_NAMES;
use tile_dither::MasterPalette;

#[derive(Parser)]
#[command(name = "koalify")]
#[command(about = "Convert images to Commodore 64 multicolor Koala Painter files")]
struct Cli {
    /// Config file (defaults to $KOALIFY_CONFIG, then the built-in config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a 320x200 image to a Koala file and a preview PNG
    Convert {
        /// Input image (PNG, JPEG or GIF)
        input: PathBuf,

        /// Koala output path (default: <stem>.koa next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview PNG path (default: <stem>-dithered.png next to the input)
        #[arg(short, long)]
        preview: Option<PathBuf>,

        /// Do not write a preview
        #[arg(long, conflicts_with = "preview")]
        no_preview: bool,

        /// Master palette preset: ntsc, pepto or colodore
        #[arg(long)]
        palette: Option<String>,

        /// Fixed background color index (0-15) instead of searching
        #[arg(short, long)]
        background: Option<usize>,
    },
    /// Render a Koala file to a preview PNG
    View {
        /// Koala input file
        input: PathBuf,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Master palette preset: ntsc, pepto or colodore
        #[arg(long)]
        palette: Option<String>,
    },
    /// List the built-in master palettes
    Palettes,
    /// Write the built-in config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            preview,
            no_preview,
            palette,
            background,
        }) => run_convert_command(
            cli.config, input, output, preview, no_preview, palette, background,
        ),
        Some(Commands::View {
            input,
            output,
            palette,
        }) => run_view_command(cli.config, input, output, palette),
        Some(Commands::Palettes) => {
            run_palettes_command();
            Ok(())
        }
        Some(Commands::Init { force }) => run_init_command(cli.config, force),
        None => {
            run_status_command(cli.config);
            Ok(())
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Load config and apply command-line overrides
fn resolve_config(
    config: Option<PathBuf>,
    palette: Option<String>,
    background: Option<usize>,
) -> AppConfig {
    let loader = AssetLoader::from_env(config);
    let mut config = AppConfig::load_from_assets(&loader);
    if let Some(name) = palette {
        config = config.with_palette(name);
    }
    if let Some(index) = background {
        config = config.with_background(index);
    }
    config
}

/// Convert an image file to Koala format
fn run_convert_command(
    config: Option<PathBuf>,
    input: PathBuf,
    output: Option<PathBuf>,
    preview: Option<PathBuf>,
    no_preview: bool,
    palette: Option<String>,
    background: Option<usize>,
) -> anyhow::Result<()> {
    init_tracing("koalify=info");

    let config = resolve_config(config, palette, background);
    let defaults = OutputPaths::for_input(&input, &config.output);
    let outputs = OutputPaths {
        data: output.unwrap_or(defaults.data),
        preview: if no_preview {
            None
        } else {
            preview.or(defaults.preview)
        },
    };

    let service = ConvertService::new(&config)?;
    let report = service.convert(&ConvertJob { input, outputs })?;

    println!(
        "Wrote {} ({} bytes), background {} ({}), {} overflowing tiles",
        report.data_path.display(),
        report.data_bytes,
        report.background,
        COLOR_NAMES[report.background as usize],
        report.overflow_tiles
    );
    if let Some(path) = report.preview_path {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Render a Koala file to PNG
fn run_view_command(
    config: Option<PathBuf>,
    input: PathBuf,
    output: PathBuf,
    palette: Option<String>,
) -> anyhow::Result<()> {
    init_tracing("koalify=warn");

    let config = resolve_config(config, palette, None);
    let service = ConvertService::new(&config)?;
    let bitmap = service.view(&input, &output)?;
    println!(
        "Rendered {} ({}x{}, background {})",
        output.display(),
        bitmap.preview_width(),
        bitmap.height(),
        COLOR_NAMES[bitmap.background() as usize]
    );
    Ok(())
}

/// Print every preset with its colors
fn run_palettes_command() {
    for name in MasterPalette::PRESETS {
        let Ok(palette) = MasterPalette::from_name(name) else {
            continue;
        };
        println!("{name}:");
        for (i, color) in palette.colors().iter().enumerate() {
            println!("  {i:>2}  {color}  {}", COLOR_NAMES[i]);
        }
    }
}

/// Extract the embedded config to the filesystem
fn run_init_command(config: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env(config);
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }
    Ok(())
}

/// Display version and configuration information
fn run_status_command(config: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let env_config = std::env::var(CONFIG_ENV).ok();
    let loader = AssetLoader::from_env(config);

    println!("Koalify v{VERSION}");
    println!("C64 multicolor bitmap converter\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        env_config.as_deref().unwrap_or("(not set)")
    );

    println!("\nConfig:  {}", loader.config_source());
    println!("Palettes: {}", MasterPalette::PRESETS.join(", "));

    println!("\nCommands:");
    println!("  koalify convert   Convert an image to a Koala file");
    println!("  koalify view      Render a Koala file to PNG");
    println!("  koalify palettes  List built-in palettes");
    println!("  koalify init      Extract the default config.yaml");
    println!("\nRun 'koalify --help' for more details.");
}
