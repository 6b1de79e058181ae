use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use log::{debug, info, warn};

use crate::archive::publish_report;
use crate::models::{project_name, TaskFinishEvent, TaskOutcome};
use crate::registry::ReportRegistry;

/// Counts from one finalization pass over the recorded failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    /// Reports copied or zipped into the target directory.
    pub published: usize,
    /// Recorded failures whose report path did not exist at publish time.
    pub skipped: usize,
    /// Publishes that hit an I/O error (the rest of the batch still ran).
    pub failed: usize,
}

enum CollectorState {
    /// Accepting events; holds the failed-task record table.
    Collecting(HashMap<String, PathBuf>),
    /// Finalized; the record table has been consumed and discarded.
    Closed,
}

/// Collects all failed tasks' reports over one build and, on close, publishes
/// them into the target directory so CI can pick them up as artifacts.
///
/// The host delivers task-finish events from however many executor threads it
/// runs; recording takes `&self` and serializes through an internal lock.
/// `close` must only be called once the host guarantees no more events will
/// arrive.
pub struct ReportCollector {
    registry: ReportRegistry,
    target_dir: PathBuf,
    state: Mutex<CollectorState>,
}

impl ReportCollector {
    /// Create a collector for one build run.
    ///
    /// # Arguments
    ///
    /// * `registry` - Snapshot of task path → report location, frozen before
    ///   the build starts
    /// * `target_dir` - Root directory to publish artifacts into; created
    ///   lazily on first publish
    pub fn new(registry: ReportRegistry, target_dir: impl Into<PathBuf>) -> Self {
        ReportCollector {
            registry,
            target_dir: target_dir.into(),
            state: Mutex::new(CollectorState::Collecting(HashMap::new())),
        }
    }

    /// Record a task-finish event.
    ///
    /// Only failures of tasks with a registered report leave a record; every
    /// other event is a no-op. A second failure for the same task path
    /// overwrites the earlier record. Events arriving after `close` are a
    /// host protocol slip and are ignored with a warning.
    pub fn on_task_finish(&self, event: &TaskFinishEvent) {
        if event.outcome != TaskOutcome::Failure {
            return;
        }
        let Some(report) = self.registry.report_for(&event.task_path) else {
            debug!("No report registered for failed task {}", event.task_path);
            return;
        };

        let mut state = self.state.lock().unwrap();
        match &mut *state {
            CollectorState::Collecting(records) => {
                debug!(
                    "Recording failed task {} with report {}",
                    event.task_path,
                    report.display()
                );
                records.insert(event.task_path.clone(), report.to_path_buf());
            }
            CollectorState::Closed => {
                warn!(
                    "Ignoring event for task {} after collector close",
                    event.task_path
                );
            }
        }
    }

    /// Number of failures currently recorded. Zero after close.
    pub fn recorded(&self) -> usize {
        match &*self.state.lock().unwrap() {
            CollectorState::Collecting(records) => records.len(),
            CollectorState::Closed => 0,
        }
    }

    /// Finalize: publish every recorded report and discard the record table.
    ///
    /// One publish failing is logged and counted but never stops the rest of
    /// the batch. Calling `close` again is a no-op returning an empty
    /// summary; nothing is ever published twice.
    pub fn close(&self) -> PublishSummary {
        let records = {
            let mut state = self.state.lock().unwrap();
            match std::mem::replace(&mut *state, CollectorState::Closed) {
                CollectorState::Collecting(records) => records,
                CollectorState::Closed => return PublishSummary::default(),
            }
        };

        let mut summary = PublishSummary::default();
        for (task_path, report) in records {
            let Some(project) = project_name(&task_path) else {
                warn!("Cannot derive project name from task path {:?}", task_path);
                summary.failed += 1;
                continue;
            };
            match publish_report(&report, &self.target_dir, project) {
                Ok(Some(_)) => summary.published += 1,
                Ok(None) => summary.skipped += 1,
                Err(e) => {
                    warn!("Failed to publish report for task {}: {:#}", task_path, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Report publishing done: {} published, {} missing, {} failed",
            summary.published, summary.skipped, summary.failed
        );
        summary
    }
}
