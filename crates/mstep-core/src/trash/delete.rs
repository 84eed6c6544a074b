use mstep_model::TrashedItem;
use tracing::debug;

use super::ensure_unambiguous;
use crate::error::Result;
use crate::repository::TrashRepository;

/// Permanently deletes each matched item, in match order.
pub(super) fn delete(
    repository: &dyn TrashRepository,
    items: &[TrashedItem],
    wants_references: bool,
) -> Result<()> {
    ensure_unambiguous(items.len(), wants_references)?;
    for item in items {
        repository.delete_trash_item(item)?;
        debug!(item_id = item.id, "trashed item deleted");
    }
    Ok(())
}
