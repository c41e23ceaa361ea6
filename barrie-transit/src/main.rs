use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use barrie_transit::agency::BarrieTransit;
use barrie_transit::convert::{convert, read_snapshot};

const DEFAULT_INPUT: &str = "input/feed.json";

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

/// `barrie-transit [INPUT] [OUTPUT]`; writes to stdout without an output path.
fn run(input: PathBuf, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    info!(input = %input.display(), "Generating Barrie Transit bus data...");

    let snapshot = read_snapshot(&input)?;
    let feed = convert(&BarrieTransit::default(), &snapshot)?;
    let json = serde_json::to_string_pretty(&feed)?;

    match output {
        Some(path) => std::fs::write(&path, json)?,
        None => println!("{json}"),
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Generating Barrie Transit bus data... DONE"
    );
    Ok(())
}

fn main() -> ExitCode {
    init_logger();

    let mut args = std::env::args_os().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = args.next().map(PathBuf::from);

    match run(input, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
