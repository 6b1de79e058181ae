use std::fs;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod archive;
mod cli;
mod collector;
mod models;
mod registry;

use cli::Args;
use collector::ReportCollector;
use models::TaskFinishEvent;
use registry::ReportRegistry;

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging(args.verbose)?;

    let registry = ReportRegistry::load(&args.registry)?;
    info!(
        "Loaded report registry with {} entries from {}",
        registry.len(),
        args.registry.display()
    );

    let collector = ReportCollector::new(registry, &args.target_dir);
    let event_count = replay_events(&collector, &args)?;
    info!(
        "Replayed {} events, {} failed tasks recorded",
        event_count,
        collector.recorded()
    );

    let summary = collector.close();
    info!(
        "Published {} reports to {} ({} missing, {} failed)",
        summary.published,
        args.target_dir.display(),
        summary.skipped,
        summary.failed
    );
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}

/// Feed every event from the JSON-lines file into the collector.
fn replay_events(collector: &ReportCollector, args: &Args) -> Result<usize> {
    let file = fs::File::open(&args.events)
        .context(format!("Failed to open event stream {}", args.events.display()))?;
    let reader = BufReader::new(file);

    let mut count = 0;
    for line in reader.lines() {
        let line = line.context("Failed to read event stream")?;
        if line.trim().is_empty() {
            continue;
        }
        let event: TaskFinishEvent = serde_json::from_str(&line)
            .context(format!("Malformed event on line {}", count + 1))?;
        collector.on_task_finish(&event);
        count += 1;
    }
    Ok(count)
}
