//! Changemaker command line front end.
//!
//! Reads a transaction file, writes the change report next to it (or to
//! `--output`) and prints the summary line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use changemaker_core::{ConfigOverrides, CurrencyConfigLoader, FileResult, process_file};
use changemaker_shared::AppConfig;

/// Computes change for every transaction in a file
#[derive(Parser, Debug)]
#[command(name = "changemaker")]
#[command(version)]
#[command(about = "Computes change for every transaction in a file")]
pub struct Args {
    /// Transaction file: optional `CURRENCY:<code>` header, then `<owed>,<paid>` lines
    pub input: PathBuf,

    /// Randomize change when owed whole units are divisible by this
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub divisor: Option<u32>,

    /// Withdraw pennies and round change to the nearest five
    #[arg(long)]
    pub no_pennies: bool,

    /// Hand out half-dollar coins
    #[arg(long)]
    pub half_dollars: bool,

    /// Report file (defaults to `<input stem>-output.txt` beside the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory holding the currency documents
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// Overrides for the flags that were given. Absent flags leave the
    /// documents in charge.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            use_pennies: self.no_pennies.then_some(false),
            use_half_dollars: self.half_dollars.then_some(true),
            random_divisor: self.divisor,
        }
    }

    /// Where the report is written.
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// `<dir>/<stem>-output.txt` for an input at `<dir>/<stem>.<ext>`.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "transactions".into(), |stem| stem.to_string_lossy());
    input.with_file_name(format!("{stem}-output.txt"))
}

/// Processes the input file and writes the report.
fn run(args: &Args, currencies_dir: PathBuf) -> anyhow::Result<FileResult> {
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let loader = CurrencyConfigLoader::new(currencies_dir);
    let result = process_file(&content, &loader, &args.overrides())?;

    let output = args.output_path();
    fs::write(&output, result.render())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(output = %output.display(), "Wrote change report");

    Ok(result)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "changemaker=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let currencies_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => AppConfig::load()?.currencies.dir,
    };

    let result = run(&args, currencies_dir)?;

    println!("{}", result.summary_line());
    println!(
        "{} transactions ({} rejected) written to {}",
        result.entries.len(),
        result.rejected().count(),
        args.output_path().display()
    );

    Ok(())
}
