//! Static checks over a migration step list.
//!
//! Every step is validated on its own, then reference placeholders in its
//! match specification are compared against the identifiers set by the
//! steps before it. Nothing is executed.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mstep_core::{ExecutorOptions, TrashAction, placeholders, validate_step};
use mstep_model::Step;
use tracing::debug;

/// Issues found for one step of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Position of the step in the file, starting at 1.
    pub index: usize,
    pub step_type: String,
    pub action: String,
    pub issues: Vec<String>,
}

impl StepReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Reads a JSON array of steps.
pub fn load_steps(path: &Path) -> Result<Vec<Step>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read steps {}", path.display()))?;
    let steps: Vec<Step> = serde_json::from_str(&content)
        .with_context(|| format!("parse steps {}", path.display()))?;
    debug!(path = %path.display(), count = steps.len(), "loaded steps");
    Ok(steps)
}

/// Checks `steps` in order and returns one report per step.
pub fn check_steps(steps: &[Step], options: &ExecutorOptions) -> Vec<StepReport> {
    let mut defined = BTreeSet::new();
    steps
        .iter()
        .enumerate()
        .map(|(position, step)| check_step(position + 1, step, options, &mut defined))
        .collect()
}

fn check_step(
    index: usize,
    step: &Step,
    options: &ExecutorOptions,
    defined: &mut BTreeSet<String>,
) -> StepReport {
    let mut issues = Vec::new();
    match validate_step(step) {
        Ok(TrashAction::Purge) => {}
        Ok(_) => {
            if let Some(spec) = &step.match_spec {
                for identifier in placeholders(&options.reference_syntax, spec) {
                    if !defined.contains(&identifier) {
                        issues.push(format!(
                            "reference '{identifier}' is not set by an earlier step"
                        ));
                    }
                }
            }
            for definition in step.reference_definitions() {
                let overwrite = definition.overwrite && options.allow_overwrite;
                if !defined.insert(definition.identifier.clone()) && !overwrite {
                    issues.push(format!(
                        "reference '{}' is already set by an earlier step",
                        definition.identifier
                    ));
                }
            }
        }
        Err(error) => issues.push(error.kind().to_string()),
    }
    StepReport {
        index,
        step_type: step.step_type.clone(),
        action: step.action.clone(),
        issues,
    }
}
