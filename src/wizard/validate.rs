//! Step Validators
//!
//! One pure function per wizard step, mapping a configuration snapshot to
//! field-keyed error-message keys. An empty map means the step is valid.
//! The host renders message keys through its localization layer and decides
//! whether a non-empty map blocks navigation; nothing here mutates the
//! config, performs I/O, or panics.
//!
//! Field keys use the camelCase spelling of the serialized payload
//! (`workingDirectory`, `tasks.0.name`) so hosts can address inputs
//! uniformly.

use std::collections::BTreeMap;

use super::config::WizardConfig;
use super::WizardStep;

/// Field key -> error-message key. Absent key == field valid.
pub type ValidationErrors = BTreeMap<String, String>;

/// Run the validator for the given step
pub fn validate_step(step: WizardStep, config: &WizardConfig) -> ValidationErrors {
    match step {
        WizardStep::Project => validate_project(config),
        WizardStep::Basic => validate_basic(config),
        WizardStep::Tasks => validate_tasks(config),
        WizardStep::Models => validate_models(config),
        // No required fields; defaults are always acceptable.
        WizardStep::Terminals | WizardStep::Git => ValidationErrors::new(),
        WizardStep::Advanced => validate_advanced(config),
    }
}

/// Project step: a working directory must be given
pub fn validate_project(config: &WizardConfig) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if config.project.working_directory.trim().is_empty() {
        errors.insert(
            "workingDirectory".to_string(),
            "workingDirectoryRequired".to_string(),
        );
    }
    errors
}

/// Basic step: the workflow needs a name and a positive task count
pub fn validate_basic(config: &WizardConfig) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if config.basic.name.trim().is_empty() {
        errors.insert("name".to_string(), "nameRequired".to_string());
    }
    if config.basic.task_count == 0 {
        errors.insert("taskCount".to_string(), "taskCountInvalid".to_string());
    }
    errors
}

/// Tasks step: at least one task, and every task named and described.
/// An empty list short-circuits to a single `tasks` error; per-task keys
/// are namespaced by index so multiple tasks report independently.
pub fn validate_tasks(config: &WizardConfig) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if config.tasks.is_empty() {
        errors.insert("tasks".to_string(), "tasks.required".to_string());
        return errors;
    }
    for (i, task) in config.tasks.iter().enumerate() {
        if task.name.trim().is_empty() {
            errors.insert(format!("tasks.{i}.name"), "tasks.nameRequired".to_string());
        }
        if task.description.trim().is_empty() {
            errors.insert(
                format!("tasks.{i}.description"),
                "tasks.descriptionRequired".to_string(),
            );
        }
    }
    errors
}

/// Models step: at least one model selection
pub fn validate_models(config: &WizardConfig) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if config.models.is_empty() {
        errors.insert("models".to_string(), "models.required".to_string());
    }
    errors
}

/// Advanced step: orchestrator model, merge CLI, and merge model are each
/// checked independently
pub fn validate_advanced(config: &WizardConfig) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if config.advanced.orchestrator.model_config_id.is_empty() {
        errors.insert(
            "orchestratorModel".to_string(),
            "orchestratorModelRequired".to_string(),
        );
    }
    if config.advanced.merge_terminal.cli_type_id.is_empty() {
        errors.insert("mergeCli".to_string(), "mergeCliRequired".to_string());
    }
    if config.advanced.merge_terminal.model_config_id.is_empty() {
        errors.insert("mergeModel".to_string(), "mergeModelRequired".to_string());
    }
    errors
}
