use clap::Parser;
use graykit::filter::rayon::blur_par;
use graykit::ops::{self, LevelRange};
use graykit::{
    blur, load_pgm, locate, save_pgm, Anchor, AnchorRange, Counters, LocateConfig, PixelBuffer,
    Region,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "GrayKit CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AnchorRangeConfig {
    #[default]
    Inclusive,
    Exclusive,
}

impl From<AnchorRangeConfig> for AnchorRange {
    fn from(value: AnchorRangeConfig) -> Self {
        match value {
            AnchorRangeConfig::Inclusive => AnchorRange::Inclusive,
            AnchorRangeConfig::Exclusive => AnchorRange::Exclusive,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum OpConfig {
    Negative,
    Threshold {
        thr: u8,
    },
    Brighten {
        factor: f64,
    },
    Rotate,
    Mirror,
    Crop {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    Blur {
        dx: usize,
        dy: usize,
    },
    Paste {
        x: usize,
        y: usize,
        path: PathBuf,
    },
    Blend {
        x: usize,
        y: usize,
        path: PathBuf,
        alpha: f64,
    },
}

#[derive(Debug, Deserialize)]
struct LocateJson {
    pattern: PathBuf,
    #[serde(default)]
    anchors: AnchorRangeConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    input: PathBuf,
    ops: Vec<OpConfig>,
    locate: Option<LocateJson>,
    parallel: bool,
    output: Option<PathBuf>,
    report_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AnchorRecord {
    x: usize,
    y: usize,
}

impl From<Anchor> for AnchorRecord {
    fn from(value: Anchor) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatsRecord {
    min: u8,
    max: u8,
}

impl From<LevelRange> for StatsRecord {
    fn from(value: LevelRange) -> Self {
        Self {
            min: value.min,
            max: value.max,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    width: usize,
    height: usize,
    maxval: u8,
    stats: Option<StatsRecord>,
    located: Option<AnchorRecord>,
    pixel_accesses: u64,
    comparisons: u64,
}

fn ensure_fits(
    image: &PixelBuffer,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    what: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !image.valid_rect(x, y, width, height) {
        return Err(format!(
            "{what}: {width}x{height} at ({x}, {y}) does not fit in {}x{} image",
            image.width(),
            image.height()
        )
        .into());
    }
    Ok(())
}

fn apply(
    image: PixelBuffer,
    op: &OpConfig,
    parallel: bool,
    counters: &Counters,
) -> Result<PixelBuffer, Box<dyn std::error::Error>> {
    let mut image = image;
    match op {
        OpConfig::Negative => ops::negative(&mut image),
        OpConfig::Threshold { thr } => ops::threshold(&mut image, *thr),
        OpConfig::Brighten { factor } => {
            if !factor.is_finite() || *factor < 0.0 {
                return Err(format!("brighten: factor must be non-negative, got {factor}").into());
            }
            ops::brighten(&mut image, *factor)
        }
        OpConfig::Rotate => image = ops::rotate(&image, counters)?,
        OpConfig::Mirror => image = ops::mirror(&image, counters)?,
        OpConfig::Crop {
            x,
            y,
            width,
            height,
        } => {
            ensure_fits(&image, *x, *y, *width, *height, "crop")?;
            image = ops::crop(&image, Region::new(*x, *y, *width, *height), counters)?;
        }
        OpConfig::Blur { dx, dy } => {
            if parallel {
                blur_par(&mut image, *dx, *dy, counters)?;
            } else {
                blur(&mut image, *dx, *dy, counters)?;
            }
        }
        OpConfig::Paste { x, y, path } => {
            let overlay = load_pgm(path)?;
            ensure_fits(&image, *x, *y, overlay.width(), overlay.height(), "paste")?;
            if overlay.maxval() > image.maxval() {
                return Err(format!(
                    "paste: overlay maxval {} exceeds image maxval {}",
                    overlay.maxval(),
                    image.maxval()
                )
                .into());
            }
            ops::paste(&mut image, *x, *y, &overlay, counters);
        }
        OpConfig::Blend { x, y, path, alpha } => {
            let overlay = load_pgm(path)?;
            ensure_fits(&image, *x, *y, overlay.width(), overlay.height(), "blend")?;
            ops::blend(&mut image, *x, *y, &overlay, *alpha, counters);
        }
    }
    Ok(image)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("graykit=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input.as_os_str().is_empty() {
        return Err("input must be set in the config".into());
    }

    let counters = Counters::new();
    let mut image = load_pgm(&config.input)?;
    for op in &config.ops {
        tracing::debug!(?op, "applying");
        image = apply(image, op, config.parallel, &counters)?;
    }

    let located = match &config.locate {
        Some(cfg) => {
            let pattern = load_pgm(&cfg.pattern)?;
            let locate_cfg = LocateConfig {
                anchors: cfg.anchors.into(),
            };
            locate(&image, &pattern, &locate_cfg, &counters).map(AnchorRecord::from)
        }
        None => None,
    };

    if let Some(path) = &config.output {
        save_pgm(&image, path)?;
    }

    let totals = counters.snapshot();
    let report = Report {
        width: image.width(),
        height: image.height(),
        maxval: image.maxval(),
        stats: ops::stats(&image).map(StatsRecord::from),
        located,
        pixel_accesses: totals.pixel_accesses,
        comparisons: totals.comparisons,
    };
    let json = serde_json::to_string_pretty(&report)?;

    match config.report_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
