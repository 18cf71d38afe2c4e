//! navigate — turn-by-turn directions between two named places.
//!
//! ```text
//! navigate demos/navigate/data/westwood.txt "Diddy Riese" "Whole Foods"
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`);
//! `RUST_LOG=nav_route=debug` shows per-query search statistics.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_route::{RouteConfig, RouteEngine};

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn-by-turn directions between points of interest")]
struct Cli {
    /// Map data file.
    map: PathBuf,

    /// Starting point of interest (case-insensitive).
    from: String,

    /// Destination point of interest (case-insensitive).
    to: String,

    /// Search deadline in milliseconds; 0 disables it.
    #[arg(long, default_value_t = RouteConfig::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Print the steps as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = if cli.timeout_ms == 0 {
        RouteConfig::unbounded()
    } else {
        RouteConfig::with_timeout_ms(cli.timeout_ms)
    };

    let engine = RouteEngine::load(&cli.map, config)
        .with_context(|| format!("failed to load map from {}", cli.map.display()))?;

    let started = Instant::now();
    let route = engine.route(&cli.from, &cli.to)?;
    info!(
        steps      = route.steps.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "route computed"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    if route.is_trivial() {
        println!("You are already at {}.", cli.to);
        return Ok(());
    }

    for step in &route.steps {
        println!("{step}");
    }
    println!(
        "Total: {:.2} miles, {} turn(s)",
        route.total_distance_miles(),
        route.turn_count()
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}
