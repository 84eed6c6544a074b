//! Declarative migration-step execution: match, act, extract.
//!
//! A step names an action, a match specification and optional reference
//! definitions. Executing it resolves reference placeholders in the match
//! specification, asks a [`TrashMatcher`] for the matching entities, performs
//! the action through a [`TrashRepository`], and stores the requested
//! attributes of the result in the run's [`ReferenceStore`].

pub mod attributes;
pub mod error;
pub mod options;
pub mod reference;
pub mod registry;
pub mod repository;
pub mod trash;

pub use attributes::{ReferenceAttribute, extract, single_of, supported_attributes};
pub use error::{MigrationError, RepositoryError, Result, StepError};
pub use options::{ConfigError, ExecutorOptions, ReferenceSyntax};
pub use reference::{PendingReference, ReferenceResolver, ReferenceStore, placeholders};
pub use registry::{ExecutorRegistry, StepExecutor};
pub use repository::{TrashMatcher, TrashRepository};
pub use trash::{StepOutcome, TRASH_STEP_TYPE, TrashAction, TrashExecutor, validate_step};
