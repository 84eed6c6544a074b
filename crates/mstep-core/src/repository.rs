//! Contracts with the content repository.

use mstep_model::{ContentType, Location, MatchSpec, Section, TrashedItem};

use crate::error::RepositoryError;

/// Trash operations and the lookups needed by reference extraction.
///
/// Every call is synchronous; a failure aborts the current step.
pub trait TrashRepository {
    /// Irreversibly removes every item from the trash.
    fn empty_trash(&self) -> Result<(), RepositoryError>;

    /// Restores `item` to its original parent and returns the new location.
    fn recover(&self, item: &TrashedItem) -> Result<Location, RepositoryError>;

    /// Permanently deletes `item` and its content.
    fn delete_trash_item(&self, item: &TrashedItem) -> Result<(), RepositoryError>;

    fn load_content_type(&self, id: i64) -> Result<ContentType, RepositoryError>;

    fn load_section(&self, id: i64) -> Result<Section, RepositoryError>;
}

/// Translates a resolved match specification into trashed items.
///
/// The order of the returned items is significant and must be stable for a
/// given repository state.
pub trait TrashMatcher {
    fn match_items(&self, conditions: &MatchSpec) -> Result<Vec<TrashedItem>, RepositoryError>;
}
