use serde::{Serialize, Deserialize};

/// Terminal outcome of a build task.
///
/// Only `Failure` is relevant for report publishing; the other variants
/// exist so replayed event streams can carry the host's full vocabulary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutcome {
    Success,
    Failure,
    Skipped,
    UpToDate,
}

/// A task-finished notification from the host build system.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TaskFinishEvent {
    /// Hierarchical `:`-delimited task path, e.g. `:moduleA:test`.
    pub task_path: String,
    pub outcome: TaskOutcome,
}

/// Extract the owning project's name from a task path.
///
/// The project name is the first non-empty `:`-delimited segment, so
/// `:moduleA:test` yields `moduleA`. Returns `None` when the path has no
/// non-empty segment at all.
pub fn project_name(task_path: &str) -> Option<&str> {
    task_path.split(':').find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_leading_colon() {
        assert_eq!(project_name(":moduleA:test"), Some("moduleA"));
    }

    #[test]
    fn test_project_name_no_leading_colon() {
        assert_eq!(project_name("moduleB:lint"), Some("moduleB"));
    }

    #[test]
    fn test_project_name_single_segment() {
        assert_eq!(project_name(":help"), Some("help"));
    }

    #[test]
    fn test_project_name_empty_path() {
        assert_eq!(project_name(""), None);
        assert_eq!(project_name("::"), None);
    }

    #[test]
    fn test_outcome_serde_round_trip() {
        let event = TaskFinishEvent {
            task_path: ":moduleA:test".to_string(),
            outcome: TaskOutcome::Failure,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"failure\""));

        let parsed: TaskFinishEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.task_path, ":moduleA:test");
        assert_eq!(parsed.outcome, TaskOutcome::Failure);
    }

    #[test]
    fn test_up_to_date_spelling() {
        let parsed: TaskOutcome = serde_json::from_str("\"up_to_date\"").unwrap();
        assert_eq!(parsed, TaskOutcome::UpToDate);
    }
}
