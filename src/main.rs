use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tonal::assets::AssetLoader;
use tonal::catalog::{Catalog, VariantPalettes};
use tonal::models::CatalogConfig;
use tonal::report::{ColorReport, ContrastReport};
use tonal_color::{
    generate, Algorithm, Color, GenerateOptions, GradientOptions, HsvLadderOptions,
    Interpolation, PaletteGenerator, Theme, DEFAULT_MIX_AMOUNT,
};

#[derive(Parser)]
#[command(name = "tonal")]
#[command(about = "Tonal - color inspection and tonal palette generation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every representation of a color as JSON
    Inspect {
        /// Any supported color notation (hex, rgb(), hsl(), hsv(), name)
        color: Color,
    },
    /// Generate a palette from a seed color
    Generate(GenerateArgs),
    /// WCAG contrast ratio between two colors
    Contrast {
        foreground: Color,
        background: Color,

        /// Print a JSON report with AA/AAA levels
        #[arg(long)]
        json: bool,
    },
    /// Apply transformations to a color, in the order listed
    Adjust(AdjustArgs),
    /// Show preset palettes from a catalog
    Presets {
        /// Catalog name (omit to list catalogs)
        catalog: Option<String>,

        /// Only this variant
        #[arg(short, long)]
        variant: Option<String>,

        /// List catalogs and their variants
        #[arg(long)]
        list: bool,

        /// Print palettes as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Seed color
    color: Color,

    /// Algorithm: hsv-ladder, oklch-ladder, oklch-gradient (or ant-design, tailwind, oklch)
    #[arg(short, long, default_value_t = Algorithm::HsvLadder)]
    algorithm: Algorithm,

    /// HSV ladder theme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Dark theme background color
    #[arg(long)]
    background: Option<Color>,

    /// Gradient step count
    #[arg(long)]
    steps: Option<usize>,

    /// Gradient start lightness (0..1)
    #[arg(long)]
    start_l: Option<f64>,

    /// Gradient end lightness (0..1)
    #[arg(long)]
    end_l: Option<f64>,

    /// Gradient interpolation
    #[arg(long, value_enum)]
    interpolation: Option<InterpolationArg>,

    /// Print the palette as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AdjustArgs {
    color: Color,

    #[arg(long)]
    lighten: Option<f64>,

    #[arg(long)]
    darken: Option<f64>,

    #[arg(long)]
    saturate: Option<f64>,

    #[arg(long)]
    desaturate: Option<f64>,

    /// Mix with white
    #[arg(long)]
    tint: Option<f64>,

    /// Mix with black
    #[arg(long)]
    shade: Option<f64>,

    /// Mix with another color
    #[arg(long)]
    mix: Option<Color>,

    /// Weight of the --mix color in percent
    #[arg(long, default_value_t = DEFAULT_MIX_AMOUNT)]
    amount: f64,

    #[arg(long)]
    grayscale: bool,

    /// Print a full JSON report of the result
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum InterpolationArg {
    Linear,
    EaseInOut,
}

impl From<InterpolationArg> for Interpolation {
    fn from(arg: InterpolationArg) -> Self {
        match arg {
            InterpolationArg::Linear => Interpolation::Linear,
            InterpolationArg::EaseInOut => Interpolation::EaseInOut,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonal=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Inspect { color }) => print_json(&ColorReport::from(&color)),
        Some(Commands::Generate(args)) => run_generate_command(&args),
        Some(Commands::Contrast {
            foreground,
            background,
            json,
        }) => {
            let report = ContrastReport::new(&foreground, &background);
            if json {
                print_json(&report)
            } else {
                println!("{:.2}", report.ratio);
                Ok(())
            }
        }
        Some(Commands::Adjust(args)) => {
            let color = adjust(&args);
            if args.json {
                print_json(&ColorReport::from(&color))
            } else {
                println!("{}", color.to_hex_string());
                Ok(())
            }
        }
        Some(Commands::Presets {
            catalog,
            variant,
            list,
            json,
        }) => run_presets_command(catalog.as_deref(), variant.as_deref(), list, json),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Translate generate flags into generator options
///
/// Flags that do not belong to the chosen algorithm are ignored with a warning.
fn generate_options(args: &GenerateArgs) -> GenerateOptions {
    let hsv_flags = args.theme.is_some() || args.background.is_some();
    let gradient_flags = args.steps.is_some()
        || args.start_l.is_some()
        || args.end_l.is_some()
        || args.interpolation.is_some();

    match args.algorithm {
        Algorithm::HsvLadder => {
            if gradient_flags {
                tracing::warn!("Gradient flags have no effect on the HSV ladder");
            }
            let mut options = HsvLadderOptions::new();
            if let Some(theme) = args.theme {
                options = options.theme(theme.into());
            }
            if let Some(ref background) = args.background {
                options = options.background_color(background.clone());
            }
            options.into()
        }
        Algorithm::OklchLadder => {
            if hsv_flags || gradient_flags {
                tracing::warn!("The Oklch ladder takes no options");
            }
            GenerateOptions::OklchLadder
        }
        Algorithm::OklchGradient => {
            if hsv_flags {
                tracing::warn!("Theme flags have no effect on the Oklch gradient");
            }
            let defaults = GradientOptions::default();
            let mut options = GradientOptions::new().lightness(
                args.start_l.unwrap_or(defaults.start_l),
                args.end_l.unwrap_or(defaults.end_l),
            );
            if let Some(steps) = args.steps {
                options = options.steps(steps);
            }
            if let Some(interpolation) = args.interpolation {
                options = options.interpolation(interpolation.into());
            }
            options.into()
        }
    }
}

fn run_generate_command(args: &GenerateArgs) -> anyhow::Result<()> {
    let options = generate_options(args);

    if args.json {
        return print_json(&options.palette(&args.color));
    }

    for hex in generate(&args.color, &options) {
        println!("{hex}");
    }
    Ok(())
}

/// Apply adjust flags in a fixed order
fn adjust(args: &AdjustArgs) -> Color {
    let mut color = args.color.clone();
    if let Some(amount) = args.lighten {
        color = color.lighten(amount);
    }
    if let Some(amount) = args.darken {
        color = color.darken(amount);
    }
    if let Some(amount) = args.saturate {
        color = color.saturate(amount);
    }
    if let Some(amount) = args.desaturate {
        color = color.desaturate(amount);
    }
    if let Some(amount) = args.tint {
        color = color.tint(amount);
    }
    if let Some(amount) = args.shade {
        color = color.shade(amount);
    }
    if let Some(ref other) = args.mix {
        color = color.mix(other, args.amount);
    }
    if args.grayscale {
        color = color.grayscale();
    }
    color
}

fn run_presets_command(
    catalog: Option<&str>,
    variant: Option<&str>,
    list: bool,
    json: bool,
) -> anyhow::Result<()> {
    let loader = AssetLoader::new();

    let Some(name) = catalog.filter(|_| !list) else {
        println!("Catalogs:");
        for name in loader.list_catalogs() {
            match CatalogConfig::load_from_assets(&loader, &name) {
                Ok(config) => {
                    let variants: Vec<&str> = config.variants.keys().map(String::as_str).collect();
                    println!(
                        "  {name:<12} {} seeds, variants: {}",
                        config.seeds.len(),
                        variants.join(", ")
                    );
                    if let Some(description) = config.description {
                        println!("  {:<12} {description}", "");
                    }
                }
                Err(e) => println!("  {name:<12} (invalid: {e})"),
            }
        }
        return Ok(());
    };

    let config = CatalogConfig::load_from_assets(&loader, name)?;

    if let Some(variant) = variant {
        let palettes = Catalog::build_variant(&config, variant)?;
        return if json {
            print_json(&palettes)
        } else {
            print_variant(variant, &palettes);
            Ok(())
        };
    }

    let catalog = Catalog::build(&config)?;
    if json {
        return print_json(&catalog);
    }
    for (variant, palettes) in &catalog.palettes {
        print_variant(variant, palettes);
    }
    Ok(())
}

fn print_variant(variant: &str, palettes: &VariantPalettes) {
    println!("[{variant}]");
    for (seed, palette) in palettes {
        let colors: Vec<&str> = palette.iter().collect();
        println!("  {seed:<10} {}", colors.join(" "));
    }
}

/// Display version and available catalogs
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Tonal v{VERSION}");
    println!("Color inspection and tonal palette generation\n");

    println!("Catalogs: {}", AssetLoader::new().list_catalogs().join(", "));

    println!("\nRun 'tonal --help' for commands.");
}
