use tracing::info;

use crate::error::Result;
use crate::repository::TrashRepository;

/// Empties the trash. Never consults the matcher.
pub(super) fn purge(repository: &dyn TrashRepository) -> Result<()> {
    repository.empty_trash()?;
    info!("trash emptied");
    Ok(())
}
