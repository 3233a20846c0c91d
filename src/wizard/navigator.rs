//! Step Navigation
//!
//! Holds the wizard's current-position cursor over the fixed step order.
//! Transitions are pure state changes: moves past either bound degrade to
//! no-ops, and jumps are unconditional. Validation gating is the session's
//! concern, not the navigator's.

use super::WizardStep;

/// Current-position cursor over the wizard step sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    current: WizardStep,
}

impl StepNavigator {
    /// Create a navigator positioned at the first step
    pub fn new() -> Self {
        Self {
            current: WizardStep::Project,
        }
    }

    /// Create a navigator positioned at an explicit step
    pub fn starting_at(step: WizardStep) -> Self {
        Self { current: step }
    }

    /// The step the wizard is currently on
    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Advance by one step. No-op at the last step.
    pub fn next(&mut self) {
        if let Some(step) = WizardStep::from_index(self.current.index() + 1) {
            self.current = step;
        }
    }

    /// Retreat by one step. No-op at the first step.
    pub fn previous(&mut self) {
        if let Some(index) = self.current.index().checked_sub(1)
            && let Some(step) = WizardStep::from_index(index)
        {
            self.current = step;
        }
    }

    /// Jump straight to the given step, regardless of adjacency
    pub fn go_to(&mut self, step: WizardStep) {
        self.current = step;
    }

    pub fn can_go_next(&self) -> bool {
        !self.current.is_last()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.current.is_first()
    }
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self::new()
    }
}
