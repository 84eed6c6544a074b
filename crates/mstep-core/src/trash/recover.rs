use mstep_model::{Location, TrashedItem};
use tracing::debug;

use super::ensure_unambiguous;
use crate::error::Result;
use crate::repository::TrashRepository;

/// Restores each matched item, in match order.
///
/// A failing call aborts the loop; items restored before it stay restored.
pub(super) fn recover(
    repository: &dyn TrashRepository,
    items: &[TrashedItem],
    wants_references: bool,
) -> Result<Vec<Location>> {
    ensure_unambiguous(items.len(), wants_references)?;
    let mut locations = Vec::with_capacity(items.len());
    for item in items {
        let location = repository.recover(item)?;
        debug!(
            item_id = item.id,
            location_id = location.id,
            "trashed item recovered"
        );
        locations.push(location);
    }
    Ok(locations)
}
