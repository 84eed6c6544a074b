//! Error types for step execution.

use thiserror::Error;

/// Failure reported by the repository or the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{operation} failed: {message}")]
    Backend { operation: String, message: String },
}

impl RepositoryError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn backend(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// What went wrong while executing a step.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Action or step type not handled by the executor.
    #[error("unsupported step (supported: {supported})")]
    UnsupportedAction { supported: String },

    #[error("a match condition is required")]
    MissingMatchCondition,

    #[error("no reference named '{identifier}' has been set")]
    UnresolvedReference { identifier: String },

    #[error(
        "references can only be set when exactly one item matches, but {count} items matched"
    )]
    AmbiguousReferenceTarget { count: usize },

    #[error("reference '{identifier}' holds '{value}', which reads as a placeholder")]
    PlaceholderValue { identifier: String, value: String },

    #[error("references were requested but no item matched")]
    EmptyResult,

    #[error("setting references for attribute '{attribute}' is not supported")]
    UnsupportedReferenceAttribute { attribute: String },

    #[error("a reference named '{identifier}' already exists")]
    ReferenceAlreadyExists { identifier: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A [`MigrationError`] tagged with the step that raised it.
#[derive(Debug, Error)]
#[error("{step_type} step '{action}' failed: {kind}")]
pub struct StepError {
    pub step_type: String,
    pub action: String,
    pub kind: MigrationError,
}

impl StepError {
    pub fn new(
        step_type: impl Into<String>,
        action: impl Into<String>,
        kind: MigrationError,
    ) -> Self {
        Self {
            step_type: step_type.into(),
            action: action.into(),
            kind,
        }
    }

    pub fn kind(&self) -> &MigrationError {
        &self.kind
    }
}

pub type Result<T> = std::result::Result<T, MigrationError>;
