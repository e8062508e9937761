use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lcg_sweep::{sweep_with, write_report, InternalModulus, SweepConfig, DEFAULT_SAMPLE_LEN};

/// Sweeps the parameters of a linear congruential generator and
/// reports, per external modulus, the average sampled value and an
/// approximate (window-bounded) cycle length.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Args {
    /// Destination file for the report table. Overwritten if present.
    #[arg(long)]
    path: PathBuf,

    /// Additive constant of the recurrence.
    #[arg(long, default_value_t = 5, value_parser = parse_extent)]
    inc: u64,

    /// Multiplier of the recurrence.
    #[arg(long, default_value_t = 9, value_parser = parse_extent)]
    mul: u64,

    /// First seed tested per modulus.
    #[arg(long, default_value_t = 0, value_parser = parse_extent)]
    seed_min: u64,

    /// Last seed tested per modulus (inclusive).
    #[arg(long, default_value_t = 10, value_parser = parse_extent)]
    seed_max: u64,

    /// Distance between tested seeds.
    #[arg(long, default_value_t = 1, value_parser = parse_extent)]
    seed_step: u64,

    /// First external modulus tested.
    #[arg(long, default_value_t = 100, value_parser = parse_extent)]
    ext_min: u64,

    /// End of the external modulus range (exclusive).
    #[arg(long, default_value_t = 1_000_000, value_parser = parse_extent)]
    ext_max: u64,

    /// Distance between tested moduli.
    #[arg(long, default_value_t = 100, value_parser = parse_extent)]
    ext_step: u64,

    /// Fixed internal modulus applied to every state transition.
    /// When absent, the external modulus under test is mirrored.
    #[arg(long, value_parser = parse_extent)]
    int_max: Option<u64>,

    /// Generator steps sampled per seed.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_LEN)]
    samples: usize,
}

/// Plain u64, or the literal `max` for the largest representable value.
fn parse_extent(text: &str) -> Result<u64, String> {
    if text == "max" {
        return Ok(u64::MAX);
    }
    text.parse()
        .map_err(|err| format!("expected an unsigned integer or `max`, got {text:?}: {err}"))
}

impl Args {
    fn config(&self) -> SweepConfig {
        SweepConfig {
            increment: self.inc,
            multiplier: self.mul,
            seed_min: self.seed_min,
            seed_max: self.seed_max,
            seed_step: self.seed_step,
            modulus_min: self.ext_min,
            modulus_max: self.ext_max,
            modulus_step: self.ext_step,
            internal_modulus: match self.int_max {
                Some(value) => InternalModulus::Fixed(value),
                None => InternalModulus::Mirror,
            },
            sample_len: self.samples,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.config();
    config.validate().context("invalid sweep configuration")?;

    // Fail on an unwritable path before hours of generation, and
    // truncate any previous report while we are at it.
    let file = File::create(&args.path)
        .with_context(|| format!("failed to open export path {:?}", args.path))?;

    let bar = ProgressBar::new(config.modulus_count() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40} {pos}/{len} moduli ({percent}%) {elapsed}",
    )?);

    let results = sweep_with(&config, |_, _| bar.inc(1))?;
    bar.finish();

    info!(rows = results.len(), path = ?args.path, "exporting sweep table");
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, &config, &results)
        .and_then(|_| writer.flush())
        .with_context(|| format!("failed to export to {:?}", args.path))?;
    info!("export finished");

    Ok(())
}
