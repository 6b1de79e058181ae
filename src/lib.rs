//! # ci-report-collector
//!
//! Collects the HTML reports of failed build tasks during a single build run
//! and publishes them into a stable directory so a CI server can archive
//! them as build artifacts.
//!
//! The host build system delivers task-finish events to a [`ReportCollector`]
//! and, before the build starts, hands it an immutable [`ReportRegistry`]
//! mapping task paths to the report each task writes. When the build ends the
//! collector is closed and every recorded failure's report is copied (single
//! files) or zipped (report directories) into the target directory, named so
//! that reports from different projects never collide.
//!
//! ## Usage
//!
//! ```no_run
//! use ci_report_collector::collector::ReportCollector;
//! use ci_report_collector::models::{TaskFinishEvent, TaskOutcome};
//! use ci_report_collector::registry::ReportRegistry;
//!
//! let registry = ReportRegistry::new([
//!     (":moduleA:test", "/builds/moduleA/test-report"),
//! ]);
//! let collector = ReportCollector::new(registry, "/builds/artifacts");
//!
//! collector.on_task_finish(&TaskFinishEvent {
//!     task_path: ":moduleA:test".to_string(),
//!     outcome: TaskOutcome::Failure,
//! });
//!
//! let summary = collector.close();
//! println!("published {} reports", summary.published);
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Task-finish events and project-name extraction
//! - [`registry`]: The frozen task path → report location mapping
//! - [`collector`]: The stateful listener driving collection and publishing
//! - [`archive`]: Copying and zipping individual reports
//! - [`cli`]: Command-line interface for replaying a recorded event stream

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Task-finish event types and owner-name extraction
pub mod models;

/// Immutable mapping from task paths to report locations
pub mod registry;

/// Failed-task report collection and finalization
pub mod collector;

/// Report packaging: file copy and directory zipping
pub mod archive;

pub use collector::{PublishSummary, ReportCollector};
pub use registry::ReportRegistry;
