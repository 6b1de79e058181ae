use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the report-publishing tool.
///
/// The tool replays a recorded build-event stream against a report registry
/// and publishes the reports of every failed task into the target directory.
#[derive(Parser, Debug)]
#[clap(
    name = "ci-report-collector",
    about = "Publish failed build tasks' reports for CI artifact pickup"
)]
pub struct Args {
    /// JSON file mapping task paths to their report locations
    #[clap(short, long)]
    pub registry: PathBuf,

    /// JSON-lines file of task-finish events, one event per line
    #[clap(short, long)]
    pub events: PathBuf,

    /// Directory to publish artifacts into (created if missing)
    #[clap(short, long)]
    pub target_dir: PathBuf,

    /// Enable verbose (debug) output
    #[clap(short, long)]
    pub verbose: bool,
}
