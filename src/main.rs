use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use personal_color::assets::{AssetCategory, AssetLoader};
use personal_color::ingest;
use personal_color::models::{AnalysisResponse, EngineConfig, PaletteCatalog, StrategyKind};
use personal_color::services::{
    AnalysisRequest, ColorEngine, DemoState, FaceLocalizer, FaceRegion, FixedFaceLocalizer,
    NoFaceLocalizer,
};

#[derive(Parser)]
#[command(name = "personal-color")]
#[command(about = "Seasonal personal-color classification from face photographs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a JPEG or PNG image
    Analyze {
        /// Image file (max 10 MiB)
        image: PathBuf,

        /// Strategy: deterministic, heuristic or demo (default from config)
        #[arg(short, long)]
        strategy: Option<StrategyKind>,

        /// Face box as x,y,width,height[@score], e.g. "120,80,200,240@0.87"
        #[arg(long)]
        face: Option<FaceRegion>,

        /// Include raw color statistics
        #[arg(short, long)]
        debug: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a sequence of demo-mode seasons
    Demo {
        /// Number of seasons to draw
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// List the palette catalog
    Palettes {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract palettes.yaml
        #[arg(long)]
        palettes: bool,

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
        Some(Commands::Analyze {
            image,
            strategy,
            face,
            debug,
            json,
        }) => run_analyze_command(&image, strategy, face, debug, json),
        Some(Commands::Demo { count }) => run_demo_command(count),
        Some(Commands::Palettes { json }) => run_palettes_command(json),
        Some(Commands::Init {
            config,
            palettes,
            all,
            force,
            list,
        }) => run_init_command(config, palettes, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "personal_color=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Decode an image and classify it
fn run_analyze_command(
    path: &Path,
    strategy: Option<StrategyKind>,
    face: Option<FaceRegion>,
    debug: bool,
    json: bool,
) -> anyhow::Result<()> {
    init_logging();

    let loader = AssetLoader::from_env();
    let config = EngineConfig::load_from_assets(&loader);
    let catalog = Arc::new(PaletteCatalog::load_from_assets(&loader));

    let localizer: Arc<dyn FaceLocalizer> = match face {
        Some(face) => Arc::new(FixedFaceLocalizer::new(face)),
        None => Arc::new(NoFaceLocalizer),
    };
    let engine = ColorEngine::new(&config, catalog, localizer);

    let decoded = ingest::load_image(path)?;
    let buffer = decoded.as_buffer()?;
    let result = engine.analyze(&buffer, AnalysisRequest { strategy, debug })?;
    let response = AnalysisResponse::from(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "Season:       {} ({})",
        response.personal_color, response.personal_color_en
    );
    println!("Confidence:   {:.1}", response.confidence);
    println!("Best colors:  {}", response.best_colors.join(" "));
    println!("Worst colors: {}", response.worst_colors.join(" "));
    if let Some(description) = &response.description {
        println!("\n{description}");
    }

    if let Some(debug) = &response.debug {
        let v = &debug.color_values;
        println!("\nDebug:");
        println!("  detected season: {}", debug.detected_season);
        println!("  method:          {:?}", debug.method);
        match debug.detection_confidence {
            Some(score) => println!("  face detected:   yes (score {score:.2})"),
            None => println!("  face detected:   {}", if debug.face_detected { "yes" } else { "no" }),
        }
        println!(
            "  warmth {:.3}  brightness {:.3}  saturation {:.3}",
            v.warmth, v.brightness, v.saturation
        );
        println!("  rgb  {:.1} {:.1} {:.1}", v.rgb.r, v.rgb.g, v.rgb.b);
        if let Some(hsv) = &v.hsv {
            println!("  hsv  {:.1} {:.1} {:.1}", hsv.h, hsv.s, hsv.v);
        }
    }

    Ok(())
}

/// Draw seasons from a fresh demo state
fn run_demo_command(count: usize) -> anyhow::Result<()> {
    init_logging();

    let loader = AssetLoader::from_env();
    let catalog = PaletteCatalog::load_from_assets(&loader);
    let state = DemoState::new();

    for i in 1..=count {
        let season = state.next();
        let palette = catalog.get(season);
        println!("{i:>3}  {:<7} {} ({})", season.key(), palette.localized_name, palette.name);
    }

    Ok(())
}

/// Print every season's palette
fn run_palettes_command(json: bool) -> anyhow::Result<()> {
    init_logging();

    let loader = AssetLoader::from_env();
    let catalog = PaletteCatalog::load_from_assets(&loader);

    if json {
        let map: serde_json::Map<String, serde_json::Value> = catalog
            .iter()
            .map(|(season, palette)| Ok((season.key().to_string(), serde_json::to_value(palette)?)))
            .collect::<Result<_, serde_json::Error>>()?;
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (season, palette) in catalog.iter() {
        println!("{season}: {} ({})", palette.localized_name, palette.name);
        println!("  best:  {}", palette.best_colors.join(" "));
        println!("  worst: {}", palette.worst_colors.join(" "));
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    config: bool,
    palettes: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || config {
        categories.push(AssetCategory::Config);
    }
    if all || palettes {
        categories.push(AssetCategory::Palettes);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --config, or --palettes");
        eprintln!("\nRun 'personal-color init --list' to see embedded assets.");
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

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    init_logging();
    let loader = AssetLoader::from_env();
    let config = EngineConfig::load_from_assets(&loader);

    println!("personal-color v{VERSION}");
    println!("Seasonal personal-color classification\n");

    fn shown(path: Option<&Path>) -> String {
        path.map_or_else(|| "(not set)".to_string(), |p| p.display().to_string())
    }

    fn source(path: Option<&Path>) -> String {
        match path {
            Some(p) if p.exists() => p.display().to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    println!("Environment Variables:");
    println!("  CONFIG_FILE   = {}", shown(loader.config_file()));
    println!("  PALETTES_FILE = {}", shown(loader.palettes_file()));

    println!("\nAsset Sources:");
    println!("  Config:   {}", source(loader.config_file()));
    println!("  Palettes: {}", source(loader.palettes_file()));

    println!("\nEngine:");
    println!("  strategy             = {:?}", config.strategy);
    println!("  whole_image_fallback = {}", config.whole_image_fallback);

    println!("\nCommands:");
    println!("  personal-color analyze    Classify an image");
    println!("  personal-color demo       Print demo-mode seasons");
    println!("  personal-color palettes   List the palette catalog");
    println!("  personal-color init       Extract embedded assets");
    println!("\nRun 'personal-color --help' for more details.");
}
