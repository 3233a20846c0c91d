//! Crabflow - Workflow Wizard Core for Terminal Kanban Orchestration
//!
//! The state and validation core behind a kanban-style workflow dashboard:
//! a multi-step creation wizard that collects a project directory, workflow
//! basics, a task list, model and terminal assignments, branch settings, and
//! orchestrator options, then hands the finished configuration off to the
//! host for submission.
//!
//! ## Features
//!
//! - **Step Navigation:** Fixed, totally ordered step sequence with
//!   saturating cursor moves and unconditional jumps
//! - **Pure Validators:** One side-effect-free validator per step, returning
//!   field-keyed message keys for the host to localize
//! - **Single-Owner Config:** Fully-populated `WizardConfig` aggregate with a
//!   deterministic defaults factory
//! - **Gated Sessions:** `WizardSession` blocks advancement on validation
//!   errors the way the host UI does
//! - **Process Preferences:** Explicit-init theme/language settings with TOML
//!   persistence
//!
//! ## Quick Start
//!
//! ```
//! use crabflow::wizard::{WizardSession, WizardStep};
//!
//! let mut session = WizardSession::new();
//! assert_eq!(session.current_step(), WizardStep::Project);
//!
//! // Default config is incomplete, so the gate holds.
//! assert!(!session.try_next());
//! assert!(session.errors().contains_key("workingDirectory"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;
pub mod wizard;

// Re-export commonly used types
pub use error::{CrabflowError, ErrorCode};
pub use wizard::{StepNavigator, WizardConfig, WizardSession, WizardStep};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
