mod config;
mod demo;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use grove_blocks::BlockRegistry;
use grove_growth::GrowthScheduler;
use grove_structures::RandSource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{GroveConfig, load_config_from_path};
use crate::demo::Plot;

/// Plants one sapling of every variant on a flat plot and ticks them.
#[derive(Debug, Parser)]
#[command(name = "grove", version)]
struct Args {
    /// Block registry TOML.
    #[arg(long, value_name = "PATH", default_value = "assets/blocks.toml")]
    blocks: PathBuf,
    /// Growth settings TOML; defaults apply when absent.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    ticks: Option<u32>,
    /// Distance between saplings along x.
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=64))]
    spacing: Option<i32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let reg = Arc::new(BlockRegistry::load_from_path(&args.blocks)?);
    log::info!("loaded {} block types from {}", reg.len(), args.blocks.display());

    let mut cfg = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => GroveConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.demo.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        cfg.demo.ticks = ticks;
    }
    if let Some(spacing) = args.spacing {
        cfg.demo.spacing = spacing;
    }

    let scheduler = GrowthScheduler::from_registry(&reg, &cfg.roles, cfg.growth)?;
    let missing = scheduler.dispatcher().generators().missing();
    if !missing.is_empty() {
        log::warn!("{} forms have no generator: {:?}", missing.len(), missing);
    }

    let mut plot = Plot::plant(reg.clone(), &scheduler, &cfg.demo);
    let mut rng = RandSource(ChaCha8Rng::seed_from_u64(cfg.demo.seed));
    let tallies = plot.run(&scheduler, &mut rng, cfg.demo.ticks);

    println!(
        "{:<14} {:>6} {:>7} {:>7} {:>7}",
        "variant", "grown", "failed", "closed", "dark"
    );
    for (variant, t) in &tallies {
        let grown = match (t.grown_at, t.removed) {
            (Some(tick), _) => format!("@{}", tick),
            (None, true) => "gone".to_string(),
            (None, false) => "-".to_string(),
        };
        println!(
            "{:<14} {:>6} {:>7} {:>7} {:>7}",
            variant.name(),
            grown,
            t.failed,
            t.gate_closed,
            t.too_dark
        );
    }
    let stats = plot.grid.stats();
    log::info!(
        "{} blocks stored across {} chunks, {} chunks dirty",
        stats.stored_blocks,
        stats.chunk_entries,
        plot.grid.dirty_chunks().len()
    );
    Ok(())
}
