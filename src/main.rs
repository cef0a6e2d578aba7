use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromakit::color_core::generate::{
    adjust_hue, adjust_lightness, adjust_saturation, generate_harmony, generate_smart_palette,
    mix_colors, shades,
};
use chromakit::color_core::{
    extract_clusters, simulate_palette, suggest_accessible_color,
    suggest_nearest_accessible_color, Deficiency, Gradient, GradientStop, Harmony, Mood, Rgb,
};
use chromakit::models::{
    build_locks, parse_lock, parse_stop, AppConfig, ClusterReport, ColorReport, ContrastReport,
    SimulationReport, SuggestionReport,
};
use chromakit::services::load_png;

#[derive(Parser)]
#[command(name = "chromakit")]
#[command(about = "Color science toolkit - palettes, contrast, color-vision simulation")]
struct Cli {
    /// Config file (defaults to $CONFIG_FILE when set)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every supported model
    Convert { color: Rgb },
    /// WCAG contrast between a foreground and a background
    Contrast { foreground: Rgb, background: Rgb },
    /// Find an accessible variant of a foreground color
    Suggest {
        foreground: Rgb,
        background: Rgb,

        /// Target contrast ratio (defaults to config, then 4.5)
        #[arg(short, long)]
        ratio: Option<f64>,

        /// Search outward from the original lightness instead of taking
        /// the darkest passing shade
        #[arg(long)]
        nearest: bool,
    },
    /// Simulate a color-vision deficiency
    Simulate {
        /// protanopia, deuteranopia, tritanopia or achromatopsia
        deficiency: Deficiency,
        #[arg(required = true)]
        colors: Vec<Rgb>,
    },
    /// Generate a palette
    Generate {
        /// Number of swatches (defaults to config, then 5)
        #[arg(short, long)]
        count: Option<usize>,

        /// Mood name; unknown moods fall back to random colors
        #[arg(short, long)]
        mood: Option<String>,

        /// Keep a slot fixed, as INDEX=HEX (repeatable)
        #[arg(short, long = "lock", value_parser = lock_arg)]
        locks: Vec<(usize, Rgb)>,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Colors in a harmonic relation to a base color
    Harmony { color: Rgb, kind: Harmony },
    /// Light-to-dark ladder of a color
    Shades {
        color: Rgb,
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
    /// Mix two colors in HSL
    Mix {
        a: Rgb,
        b: Rgb,
        /// 0.0 is the first color, 1.0 the second
        #[arg(short, long, default_value_t = 0.5)]
        ratio: f64,
    },
    /// Shift hue, saturation or lightness
    Adjust {
        color: Rgb,
        /// Hue rotation in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        hue: f64,
        /// Saturation delta (-1.0..1.0)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        saturation: f64,
        /// Lightness delta (-1.0..1.0)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lightness: f64,
    },
    /// Sample a multi-stop gradient
    Gradient {
        /// Stops as HEX@POSITION, position in percent
        #[arg(required = true, num_args = 2.., value_parser = stop_arg)]
        stops: Vec<GradientStop>,
        #[arg(short, long, default_value_t = 5)]
        steps: usize,
    },
    /// Dominant colors of a PNG image
    Extract {
        image: PathBuf,
        /// Number of clusters (defaults to config, then 5)
        #[arg(short = 'k', long)]
        clusters: Option<usize>,
        /// Most populated cluster first
        #[arg(long)]
        by_population: bool,
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// List the available moods, harmonies and deficiencies
    List,
}

fn lock_arg(s: &str) -> Result<(usize, Rgb), String> {
    parse_lock(s).map_err(|e| e.to_string())
}

fn stop_arg(s: &str) -> Result<GradientStop, String> {
    parse_stop(s).map_err(|e| e.to_string())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Print `value` as JSON, or as the given text.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn lines(colors: &[Rgb]) -> String {
    colors
        .iter()
        .map(|c| c.to_hex())
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromakit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());
    let json = cli.json;

    match cli.command {
        Commands::Convert { color } => {
            let report = ColorReport::from(color);
            emit(json, &report, || report.to_string())
        }
        Commands::Contrast {
            foreground,
            background,
        } => {
            let report = ContrastReport::new(foreground, background);
            emit(json, &report, || report.to_string())
        }
        Commands::Suggest {
            foreground,
            background,
            ratio,
            nearest,
        } => {
            let target = ratio.unwrap_or(config.contrast.target_ratio);
            let suggestion = if nearest {
                suggest_nearest_accessible_color(foreground, background, target)
            } else {
                suggest_accessible_color(foreground, background, target)
            };
            let report = SuggestionReport::new(foreground, background, target, suggestion);
            emit(json, &report, || report.to_string())
        }
        Commands::Simulate {
            deficiency,
            colors,
        } => {
            let report = SimulationReport {
                deficiency,
                simulated: simulate_palette(&colors, deficiency),
                original: colors,
            };
            emit(json, &report, || report.to_string())
        }
        Commands::Generate {
            count,
            mood,
            locks,
            seed,
        } => {
            let count = count.unwrap_or(config.palette.count);
            let mood = match mood {
                Some(name) => match name.parse::<Mood>() {
                    Ok(mood) => Some(mood),
                    Err(e) => {
                        tracing::warn!(%e, "Unknown mood, using random palette");
                        None
                    }
                },
                None => config.palette.mood(),
            };
            let locks = build_locks(count, &locks);
            let mut rng = rng_for(seed.or(config.seed));
            let palette = generate_smart_palette(&mut rng, count, mood, &locks);
            emit(json, &palette, || lines(&palette))
        }
        Commands::Harmony { color, kind } => {
            let colors = generate_harmony(color, kind);
            emit(json, &colors, || lines(&colors))
        }
        Commands::Shades { color, count } => {
            let colors = shades(color, count);
            emit(json, &colors, || lines(&colors))
        }
        Commands::Mix { a, b, ratio } => {
            let mixed = mix_colors(a, b, ratio);
            emit(json, &mixed, || mixed.to_hex())
        }
        Commands::Adjust {
            color,
            hue,
            saturation,
            lightness,
        } => {
            let adjusted = adjust_lightness(
                adjust_saturation(adjust_hue(color, hue), saturation),
                lightness,
            );
            emit(json, &adjusted, || adjusted.to_hex())
        }
        Commands::Gradient { stops, steps } => {
            let colors = Gradient::new(stops).sample(steps);
            emit(json, &colors, || lines(&colors))
        }
        Commands::Extract {
            image,
            clusters,
            by_population,
            seed,
        } => {
            let mut settings = config.extract.clone();
            settings.by_population |= by_population;
            let k = clusters.unwrap_or(settings.clusters);
            let pixels = load_png(&image)?;
            let mut rng = rng_for(seed.or(config.seed));
            let report = ClusterReport(extract_clusters(&pixels, k, &settings.options(), &mut rng));
            emit(json, &report, || report.to_string())
        }
        Commands::List => {
            let names = serde_json::json!({
                "moods": Mood::ALL.map(Mood::name),
                "harmonies": Harmony::ALL.map(Harmony::name),
                "deficiencies": Deficiency::ALL.map(Deficiency::name),
            });
            emit(json, &names, || {
                format!(
                    "Moods:        {}\nHarmonies:    {}\nDeficiencies: {}",
                    Mood::ALL.map(Mood::name).join(", "),
                    Harmony::ALL.map(Harmony::name).join(", "),
                    Deficiency::ALL.map(Deficiency::name).join(", "),
                )
            })
        }
    }
}
