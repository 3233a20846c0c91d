//! Workflow-Creation Wizard
//!
//! A multi-step wizard for assembling a new workflow: project directory,
//! basic info, task list, model and terminal assignments, branch settings,
//! and orchestrator options. Navigation, validation, and the configuration
//! aggregate live here; rendering belongs to the host.

pub mod config;
pub mod navigator;
pub mod session;
pub mod validate;

pub use config::{WizardConfig, WorkflowDraft};
pub use navigator::StepNavigator;
pub use session::WizardSession;
pub use validate::{ValidationErrors, validate_step};

use serde::{Deserialize, Serialize};

/// A step in the workflow-creation wizard, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Project,
    Basic,
    Tasks,
    Models,
    Terminals,
    Git,
    Advanced,
}

impl WizardStep {
    /// All steps in wizard order. `Project` is first, `Advanced` is last.
    pub const ALL: [WizardStep; 7] = [
        Self::Project,
        Self::Basic,
        Self::Tasks,
        Self::Models,
        Self::Terminals,
        Self::Git,
        Self::Advanced,
    ];

    /// Zero-based position in the step order
    pub fn index(self) -> usize {
        match self {
            Self::Project => 0,
            Self::Basic => 1,
            Self::Tasks => 2,
            Self::Models => 3,
            Self::Terminals => 4,
            Self::Git => 5,
            Self::Advanced => 6,
        }
    }

    /// Step at the given zero-based position, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Step number (1-based) for progress display
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Total number of steps
    pub fn total() -> usize {
        Self::ALL.len()
    }

    /// Step title
    pub fn title(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Basic => "Basics",
            Self::Tasks => "Tasks",
            Self::Models => "Models",
            Self::Terminals => "Terminals",
            Self::Git => "Branches",
            Self::Advanced => "Advanced",
        }
    }

    /// Step subtitle
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Project => "Where the workflow runs",
            Self::Basic => "Name it and size it",
            Self::Tasks => "What each task should do",
            Self::Models => "Pick a model per task",
            Self::Terminals => "Pick a terminal per task",
            Self::Git => "Base branch and task branch prefix",
            Self::Advanced => "Orchestrator and merge terminal",
        }
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() == Self::ALL.len() - 1
    }
}
