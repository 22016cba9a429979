//! Sample transaction file generator.
//!
//! Writes a transaction file for one currency: owed amounts up to the
//! currency's `max_value`, each paid with a payment denomination that covers
//! it.
//!
//! Usage: cargo run --bin generator -- --currency EUR --count 50 --seed 7

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use changemaker_core::register::{generate_transactions, render_sample_file};
use changemaker_core::{ConfigOverrides, CurrencyConfigLoader};
use changemaker_shared::{AppConfig, CurrencyCode};

/// Generates a sample transaction file
#[derive(Parser, Debug)]
#[command(name = "generator")]
#[command(version)]
#[command(about = "Generates a sample transaction file")]
pub struct Args {
    /// Currency code of the generated file
    #[arg(short, long, default_value = CurrencyCode::DEFAULT)]
    pub currency: String,

    /// Number of transactions
    #[arg(short = 'n', long, default_value = "20")]
    pub count: usize,

    /// Seed for a reproducible file
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// File to write (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory holding the currency documents
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

/// Renders the sample file described by `args`.
fn generate(args: &Args, loader: &CurrencyConfigLoader) -> anyhow::Result<String> {
    let config = loader.resolve(&args.currency, &ConfigOverrides::default())?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let transactions = generate_transactions(&config, args.count, &mut rng);

    info!(
        currency = %config.code,
        count = transactions.len(),
        seed = ?args.seed,
        "Generated sample transactions"
    );
    Ok(render_sample_file(&config, &transactions))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generator=info,changemaker=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => AppConfig::load()?.currencies.dir,
    };
    let file = generate(&args, &CurrencyConfigLoader::new(dir))?;

    match &args.output {
        Some(path) => fs::write(path, &file)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{file}"),
    }

    Ok(())
}
