//! Wizard Configuration
//!
//! The aggregate edited across wizard steps, its deterministic defaults
//! factory, and the completion handoff payload. Every section is always
//! present; the wizard session owns the single mutable instance for the
//! lifetime of the wizard and discards it on cancel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete workflow-creation configuration, one section per wizard step
/// family. Serialized camelCase to match the workflow API payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardConfig {
    /// Project step: where the workflow runs
    #[serde(default)]
    pub project: ProjectSection,

    /// Basic step: workflow name and declared task count
    #[serde(default)]
    pub basic: BasicSection,

    /// Tasks step: one draft per task slot, in order
    #[serde(default)]
    pub tasks: Vec<TaskDraft>,

    /// Models step: one model selection per task slot, in order
    #[serde(default)]
    pub models: Vec<ModelSelection>,

    /// Terminals step: one terminal selection per task slot, in order
    #[serde(default)]
    pub terminals: Vec<TerminalSelection>,

    /// Git step: branch layout for task worktrees
    #[serde(default)]
    pub git: GitSection,

    /// Advanced step: orchestrator and merge terminal settings
    #[serde(default)]
    pub advanced: AdvancedSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    /// Absolute or relative path the workflow operates in
    #[serde(default)]
    pub working_directory: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicSection {
    #[serde(default)]
    pub name: String,

    /// Declared number of tasks; drives the task/model/terminal slot count
    #[serde(default)]
    pub task_count: usize,
}

/// One task being drafted in the Tasks step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Model assignment for a single task slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSelection {
    #[serde(default)]
    pub model_config_id: String,
}

/// Terminal assignment for a single task slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalSelection {
    #[serde(default)]
    pub cli_type_id: String,
    #[serde(default)]
    pub model_config_id: String,
}

/// Branch layout for per-task worktrees feeding the merge terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSection {
    /// Branch task branches fork from and merge back into (default: "main")
    #[serde(default = "default_base_branch")]
    pub base_branch: String,

    /// Prefix for generated task branch names (default: "task/")
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,
}

fn default_base_branch() -> String {
    "main".to_string()
}

fn default_branch_prefix() -> String {
    "task/".to_string()
}

impl Default for GitSection {
    fn default() -> Self {
        Self {
            base_branch: default_base_branch(),
            branch_prefix: default_branch_prefix(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSection {
    #[serde(default)]
    pub orchestrator: OrchestratorSettings,

    #[serde(default)]
    pub merge_terminal: MergeTerminalSettings,
}

/// Model driving the orchestrator that coordinates task terminals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorSettings {
    #[serde(default)]
    pub model_config_id: String,
}

/// Terminal that merges finished task branches back into the base branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeTerminalSettings {
    #[serde(default)]
    pub cli_type_id: String,
    #[serde(default)]
    pub model_config_id: String,
}

impl WizardConfig {
    /// Resize the task, model, and terminal slot lists to the declared task
    /// count. Existing entries keep their positions; new slots start empty.
    /// Called when leaving the Basic step so later steps see one slot per
    /// declared task.
    pub fn sync_task_slots(&mut self) {
        let count = self.basic.task_count;
        self.tasks.resize_with(count, TaskDraft::default);
        self.models.resize_with(count, ModelSelection::default);
        self.terminals.resize_with(count, TerminalSelection::default);
    }

    /// Consume the finished configuration into the handoff payload the host
    /// submits to the workflow-creation API.
    pub fn into_draft(self) -> WorkflowDraft {
        WorkflowDraft {
            id: crate::utils::short_id(),
            created_at: Utc::now(),
            config: self,
        }
    }
}

/// Completion handoff: a finished configuration stamped with an id and a
/// creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDraft {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub config: WizardConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_deterministic_and_fully_populated() {
        let a = WizardConfig::default();
        let b = WizardConfig::default();
        assert_eq!(a, b);

        assert_eq!(a.project.working_directory, "");
        assert_eq!(a.basic.name, "");
        assert_eq!(a.basic.task_count, 0);
        assert!(a.tasks.is_empty());
        assert!(a.models.is_empty());
        assert!(a.terminals.is_empty());
        assert_eq!(a.git.base_branch, "main");
        assert_eq!(a.git.branch_prefix, "task/");
        assert_eq!(a.advanced.orchestrator.model_config_id, "");
        assert_eq!(a.advanced.merge_terminal.cli_type_id, "");
        assert_eq!(a.advanced.merge_terminal.model_config_id, "");
    }

    #[test]
    fn test_sync_task_slots_grows_to_count() {
        let mut config = WizardConfig::default();
        config.basic.task_count = 3;
        config.sync_task_slots();
        assert_eq!(config.tasks.len(), 3);
        assert_eq!(config.models.len(), 3);
        assert_eq!(config.terminals.len(), 3);
    }

    #[test]
    fn test_sync_task_slots_preserves_existing_entries() {
        let mut config = WizardConfig::default();
        config.basic.task_count = 1;
        config.sync_task_slots();
        config.tasks[0].name = "first".to_string();
        config.models[0].model_config_id = "mc-1".to_string();

        config.basic.task_count = 3;
        config.sync_task_slots();
        assert_eq!(config.tasks[0].name, "first");
        assert_eq!(config.models[0].model_config_id, "mc-1");
        assert_eq!(config.tasks[2], TaskDraft::default());
    }

    #[test]
    fn test_sync_task_slots_truncates() {
        let mut config = WizardConfig::default();
        config.basic.task_count = 4;
        config.sync_task_slots();
        config.basic.task_count = 2;
        config.sync_task_slots();
        assert_eq!(config.tasks.len(), 2);
        assert_eq!(config.terminals.len(), 2);
    }

    #[test]
    fn test_payload_uses_camel_case_keys() {
        let mut config = WizardConfig::default();
        config.project.working_directory = "/srv/demo".to_string();
        config.basic.task_count = 1;
        config.sync_task_slots();

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["project"]["workingDirectory"], "/srv/demo");
        assert_eq!(value["basic"]["taskCount"], 1);
        assert!(value["advanced"]["mergeTerminal"]["cliTypeId"].is_string());
    }

    #[test]
    fn test_into_draft_stamps_id_and_keeps_config() {
        let mut config = WizardConfig::default();
        config.basic.name = "nightly triage".to_string();
        let draft = config.clone().into_draft();
        assert_eq!(draft.id.len(), 8);
        assert_eq!(draft.config, config);

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["id"].is_string());
        assert!(value["createdAt"].is_string());
        // Flattened config sits beside the stamp fields.
        assert_eq!(value["basic"]["name"], "nightly triage");
    }
}
