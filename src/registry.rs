use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Immutable snapshot mapping task paths to the report each task generates.
///
/// The host build system knows, before any task runs, which report location
/// every reporting task will write to. That mapping is captured here once
/// and never changes for the duration of the build.
#[derive(Debug, Clone, Default)]
pub struct ReportRegistry {
    reports: HashMap<String, PathBuf>,
}

impl ReportRegistry {
    /// Build a registry from (task path, report location) pairs.
    pub fn new<I, S, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<PathBuf>,
    {
        let reports = entries
            .into_iter()
            .map(|(task_path, report)| (task_path.into(), report.into()))
            .collect();
        ReportRegistry { reports }
    }

    /// Load a registry from a JSON object file mapping task paths to
    /// report locations, e.g. `{":moduleA:test": "/builds/moduleA/reports"}`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read report registry {}", path.display()))?;
        let reports: HashMap<String, PathBuf> = serde_json::from_str(&content)
            .context(format!("Failed to parse report registry {}", path.display()))?;
        Ok(ReportRegistry { reports })
    }

    /// Report location registered for a task path, if any.
    pub fn report_for(&self, task_path: &str) -> Option<&Path> {
        self.reports.get(task_path).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
