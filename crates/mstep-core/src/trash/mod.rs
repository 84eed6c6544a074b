//! Trash steps: purge the trash, recover trashed items, or delete them for good.
//!
//! | Action | Needs `match` | Effect | References read from |
//! |--------|---------------|--------|----------------------|
//! | `purge` | no | empties the whole trash | never set |
//! | `recover` | yes | restores each matched item | the restored locations |
//! | `delete` | yes | permanently deletes each matched item | the matched items |
//!
//! References can only be set when the match yields exactly one item; a
//! step asking for references on a wider match fails before anything is
//! changed.

mod delete;
mod executor;
mod purge;
mod recover;

pub use executor::TrashExecutor;

use std::fmt;
use std::str::FromStr;

use mstep_model::{Location, Step, TrashedItem};

use crate::attributes;
use crate::error::{MigrationError, Result, StepError};

/// Step type handled by [`TrashExecutor`].
pub const TRASH_STEP_TYPE: &str = "trash";

/// Closed set of trash actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrashAction {
    Purge,
    Recover,
    Delete,
}

impl TrashAction {
    pub const ALL: [TrashAction; 3] = [TrashAction::Purge, TrashAction::Recover, TrashAction::Delete];
    pub const NAMES: [&'static str; 3] = [
        Self::ALL[0].as_str(),
        Self::ALL[1].as_str(),
        Self::ALL[2].as_str(),
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TrashAction::Purge => "purge",
            TrashAction::Recover => "recover",
            TrashAction::Delete => "delete",
        }
    }

    pub fn requires_match(&self) -> bool {
        !matches!(self, TrashAction::Purge)
    }
}

impl fmt::Display for TrashAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrashAction {
    type Err = MigrationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(unsupported)
    }
}

fn unsupported() -> MigrationError {
    MigrationError::UnsupportedAction {
        supported: format!(
            "{TRASH_STEP_TYPE} steps with mode {}",
            TrashAction::NAMES.join(", ")
        ),
    }
}

/// Result collection of a trash step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Purged,
    /// Restored locations, in match order.
    Recovered(Vec<Location>),
    /// The items that were deleted, as matched.
    Deleted(Vec<TrashedItem>),
}

impl StepOutcome {
    /// Number of entities acted upon; zero for a purge.
    pub fn len(&self) -> usize {
        match self {
            StepOutcome::Purged => 0,
            StepOutcome::Recovered(locations) => locations.len(),
            StepOutcome::Deleted(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Checks a step description without touching the repository.
///
/// Verifies the step type, the action, the presence of a match condition
/// where one is needed and the reference attribute names.
pub fn validate_step(step: &Step) -> std::result::Result<TrashAction, StepError> {
    check_step(step).map_err(|kind| StepError::new(&step.step_type, &step.action, kind))
}

fn check_step(step: &Step) -> Result<TrashAction> {
    if step.step_type != TRASH_STEP_TYPE {
        return Err(unsupported());
    }
    let action: TrashAction = step.action.parse()?;
    if !action.requires_match() {
        return Ok(action);
    }
    if step.match_spec.is_none() {
        return Err(MigrationError::MissingMatchCondition);
    }
    for definition in step.reference_definitions() {
        attributes::ensure_supported(&definition.attribute)?;
    }
    Ok(action)
}

/// Refuses to act on several items when references were requested.
fn ensure_unambiguous(matched: usize, wants_references: bool) -> Result<()> {
    if wants_references && matched > 1 {
        return Err(MigrationError::AmbiguousReferenceTarget { count: matched });
    }
    Ok(())
}
