//! Wizard Session
//!
//! Owns a navigator, the single mutable `WizardConfig`, and the last
//! validation result, and applies the gating the host UI expects: `next` is
//! blocked while the current step's validator reports errors, `back` and
//! direct jumps are never gated, and completion re-checks every step before
//! handing off the draft.

use tracing::{debug, info};

use super::config::{WizardConfig, WorkflowDraft};
use super::navigator::StepNavigator;
use super::validate::{self, ValidationErrors};
use super::WizardStep;

/// A single wizard run, from first step to handoff or cancel
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    navigator: StepNavigator,
    config: WizardConfig,
    errors: ValidationErrors,
}

impl WizardSession {
    /// Start a session at the first step with a default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session at an explicit step, e.g. when resuming
    pub fn starting_at(step: WizardStep) -> Self {
        Self {
            navigator: StepNavigator::starting_at(step),
            ..Self::default()
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.navigator.current()
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Mutable access for the active step's edits
    pub fn config_mut(&mut self) -> &mut WizardConfig {
        &mut self.config
    }

    /// Errors from the most recent blocked advance or completion attempt
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn can_go_next(&self) -> bool {
        self.navigator.can_go_next()
    }

    pub fn can_go_previous(&self) -> bool {
        self.navigator.can_go_previous()
    }

    /// Validate the current step without touching session state
    pub fn validate_current(&self) -> ValidationErrors {
        validate::validate_step(self.navigator.current(), &self.config)
    }

    /// Validate the current step and advance when it passes. Returns whether
    /// the cursor moved; on failure the errors are retained for the host to
    /// render. A passing last step stays put.
    pub fn try_next(&mut self) -> bool {
        let step = self.navigator.current();
        let errors = self.validate_current();
        if !errors.is_empty() {
            debug!(step = step.title(), fields = errors.len(), "wizard advance blocked");
            self.errors = errors;
            return false;
        }
        self.errors.clear();

        // Leaving Basic fixes the slot count the later steps edit.
        if step == WizardStep::Basic {
            self.config.sync_task_slots();
        }

        if !self.navigator.can_go_next() {
            return false;
        }
        self.navigator.next();
        debug!(from = step.title(), to = self.navigator.current().title(), "wizard step advanced");
        true
    }

    /// Step back without validation
    pub fn back(&mut self) {
        self.errors.clear();
        self.navigator.previous();
    }

    /// Jump straight to a step without validating the one being left
    pub fn go_to(&mut self, step: WizardStep) {
        self.errors.clear();
        self.navigator.go_to(step);
    }

    /// Validate every step in order and hand off the draft when all pass.
    /// Direct jumps make skipping ahead possible, so completion cannot trust
    /// the path taken; on the first failing step the session jumps there,
    /// retains the errors, and reports the step.
    pub fn finish(&mut self) -> Result<WorkflowDraft, WizardStep> {
        for step in WizardStep::ALL {
            let errors = validate::validate_step(step, &self.config);
            if !errors.is_empty() {
                debug!(step = step.title(), fields = errors.len(), "workflow completion blocked");
                self.navigator.go_to(step);
                self.errors = errors;
                return Err(step);
            }
        }
        self.errors.clear();
        let draft = self.config.clone().into_draft();
        info!(id = %draft.id, name = %draft.config.basic.name, "workflow draft completed");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Config that passes every step
    fn complete_config() -> WizardConfig {
        let mut config = WizardConfig::default();
        config.project.working_directory = "/srv/flows/demo".to_string();
        config.basic.name = "release check".to_string();
        config.basic.task_count = 2;
        config.sync_task_slots();
        for (i, task) in config.tasks.iter_mut().enumerate() {
            task.name = format!("task {i}");
            task.description = format!("does thing {i}");
        }
        for model in &mut config.models {
            model.model_config_id = "mc-default".to_string();
        }
        config.advanced.orchestrator.model_config_id = "mc-orchestrator".to_string();
        config.advanced.merge_terminal.cli_type_id = "claude-code".to_string();
        config.advanced.merge_terminal.model_config_id = "mc-merge".to_string();
        config
    }

    #[test]
    fn test_blocked_advance_retains_errors_and_position() {
        let mut session = WizardSession::new();
        assert!(!session.try_next());
        assert_eq!(session.current_step(), WizardStep::Project);
        assert!(session.errors().contains_key("workingDirectory"));
    }

    #[test]
    fn test_valid_advance_clears_errors() {
        let mut session = WizardSession::new();
        assert!(!session.try_next());
        session.config_mut().project.working_directory = "/srv/flows/demo".to_string();
        assert!(session.try_next());
        assert_eq!(session.current_step(), WizardStep::Basic);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_leaving_basic_syncs_task_slots() {
        let mut session = WizardSession::starting_at(WizardStep::Basic);
        session.config_mut().basic.name = "sync demo".to_string();
        session.config_mut().basic.task_count = 3;
        assert!(session.try_next());
        assert_eq!(session.current_step(), WizardStep::Tasks);
        assert_eq!(session.config().tasks.len(), 3);
        assert_eq!(session.config().models.len(), 3);
        assert_eq!(session.config().terminals.len(), 3);
    }

    #[test]
    fn test_back_is_never_gated() {
        let mut session = WizardSession::starting_at(WizardStep::Tasks);
        session.back();
        assert_eq!(session.current_step(), WizardStep::Basic);
        session.back();
        session.back(); // no-op at Project
        assert_eq!(session.current_step(), WizardStep::Project);
    }

    #[test]
    fn test_go_to_skips_without_validation() {
        let mut session = WizardSession::new();
        session.go_to(WizardStep::Advanced);
        assert_eq!(session.current_step(), WizardStep::Advanced);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_try_next_at_last_step_stays_put() {
        let mut session = WizardSession::starting_at(WizardStep::Advanced);
        *session.config_mut() = complete_config();
        assert!(!session.try_next());
        assert_eq!(session.current_step(), WizardStep::Advanced);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_full_walk_to_handoff() {
        let mut session = WizardSession::new();
        *session.config_mut() = complete_config();
        let mut hops = 0;
        while session.try_next() {
            hops += 1;
        }
        assert_eq!(hops, WizardStep::total() - 1);
        assert_eq!(session.current_step(), WizardStep::Advanced);

        let draft = session.finish().expect("all steps valid");
        assert_eq!(draft.config.basic.name, "release check");
    }

    #[test]
    fn test_finish_jumps_to_first_invalid_step() {
        let mut session = WizardSession::new();
        *session.config_mut() = complete_config();
        session.config_mut().basic.name.clear();
        session.go_to(WizardStep::Advanced);

        assert_eq!(session.finish(), Err(WizardStep::Basic));
        assert_eq!(session.current_step(), WizardStep::Basic);
        assert!(session.errors().contains_key("name"));
    }

    #[test]
    fn test_finish_on_untouched_session_reports_first_step() {
        let mut session = WizardSession::new();
        assert_eq!(session.finish(), Err(WizardStep::Project));
    }
}
