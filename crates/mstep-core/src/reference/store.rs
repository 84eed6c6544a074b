use std::collections::{BTreeMap, BTreeSet};

use mstep_model::ReferenceValue;
use tracing::{debug, warn};

use crate::error::{MigrationError, Result};

/// Run-scoped registry of references set by earlier steps.
///
/// Create one store per migration run and pass it to every step. Writes to
/// an identifier that already holds a value are rejected unless the write
/// asks to overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceStore {
    values: BTreeMap<String, ReferenceValue>,
}

/// A reference write waiting to be applied by [`ReferenceStore::add_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReference {
    pub identifier: String,
    pub value: ReferenceValue,
    pub overwrite: bool,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<&ReferenceValue> {
        self.values.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.values.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates references in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Stores `value` under `identifier`.
    ///
    /// Returns the replaced value when `overwrite` allowed replacing one.
    ///
    /// # Errors
    ///
    /// [`MigrationError::ReferenceAlreadyExists`] when the identifier is
    /// already set and `overwrite` is false; the stored value is kept.
    pub fn add(
        &mut self,
        identifier: impl Into<String>,
        value: ReferenceValue,
        overwrite: bool,
    ) -> Result<Option<ReferenceValue>> {
        let identifier = identifier.into();
        self.check_writable(&identifier, overwrite)?;
        let previous = self.values.insert(identifier.clone(), value);
        if previous.is_some() {
            warn!(reference = %identifier, "reference overwritten");
        } else {
            debug!(reference = %identifier, "reference set");
        }
        Ok(previous)
    }

    /// Applies several writes, or none of them if any would be rejected.
    ///
    /// Writes later in the batch see identifiers set earlier in the same
    /// batch.
    pub fn add_all(&mut self, pending: Vec<PendingReference>) -> Result<()> {
        self.check_all(&pending)?;
        for entry in pending {
            self.add(entry.identifier, entry.value, true)?;
        }
        Ok(())
    }

    /// Checks that [`ReferenceStore::add_all`] would accept `pending`,
    /// without writing anything.
    pub fn check_all(&self, pending: &[PendingReference]) -> Result<()> {
        self.check_writes(
            pending
                .iter()
                .map(|entry| (entry.identifier.as_str(), entry.overwrite)),
        )
    }

    /// Checks a batch of `(identifier, overwrite)` writes before their
    /// values are known.
    ///
    /// # Errors
    ///
    /// [`MigrationError::ReferenceAlreadyExists`] for the first identifier
    /// that is already set, in the store or earlier in the batch, and may not
    /// be overwritten.
    pub fn check_writes<'w>(
        &self,
        writes: impl IntoIterator<Item = (&'w str, bool)>,
    ) -> Result<()> {
        let mut batch = BTreeSet::new();
        for (identifier, overwrite) in writes {
            if batch.contains(identifier) && !overwrite {
                return Err(MigrationError::ReferenceAlreadyExists {
                    identifier: identifier.to_string(),
                });
            }
            self.check_writable(identifier, overwrite)?;
            batch.insert(identifier);
        }
        Ok(())
    }

    fn check_writable(&self, identifier: &str, overwrite: bool) -> Result<()> {
        if !overwrite && self.values.contains_key(identifier) {
            return Err(MigrationError::ReferenceAlreadyExists {
                identifier: identifier.to_string(),
            });
        }
        Ok(())
    }
}
