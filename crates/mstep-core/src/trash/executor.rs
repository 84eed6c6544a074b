use mstep_model::{LocationLike, Step, TrashedItem};
use tracing::{debug, info, info_span};

use super::{StepOutcome, TrashAction, delete, purge, recover, validate_step};
use crate::attributes::{self, single_of};
use crate::error::{MigrationError, Result, StepError};
use crate::options::ExecutorOptions;
use crate::reference::{PendingReference, ReferenceResolver, ReferenceStore};
use crate::repository::{TrashMatcher, TrashRepository};

/// Executes trash steps against a repository.
///
/// The executor holds no run state; references live in the
/// [`ReferenceStore`] passed to [`TrashExecutor::execute`].
pub struct TrashExecutor<'a, R, M> {
    repository: &'a R,
    matcher: &'a M,
    options: ExecutorOptions,
}

impl<'a, R, M> TrashExecutor<'a, R, M>
where
    R: TrashRepository,
    M: TrashMatcher,
{
    pub fn new(repository: &'a R, matcher: &'a M) -> Self {
        Self {
            repository,
            matcher,
            options: ExecutorOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ExecutorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExecutorOptions {
        &self.options
    }

    /// Runs one step: resolve, match, act, then set references.
    ///
    /// Reference writes are checked before the action runs, so a step whose
    /// references would be rejected changes nothing. For a delete the values
    /// are extracted up front as well.
    ///
    /// # Errors
    ///
    /// Any failure aborts the step and is returned tagged with the step type
    /// and action. Items already processed by a failing recover or delete
    /// loop are not rolled back.
    pub fn execute(
        &self,
        step: &Step,
        store: &mut ReferenceStore,
    ) -> std::result::Result<StepOutcome, StepError> {
        let span = info_span!("step", step_type = %step.step_type, action = %step.action);
        let _guard = span.enter();
        let action = validate_step(step)?;
        let outcome = self
            .run(action, step, store)
            .map_err(|kind| StepError::new(&step.step_type, &step.action, kind))?;
        info!(items = outcome.len(), references = store.len(), "step complete");
        Ok(outcome)
    }

    fn run(
        &self,
        action: TrashAction,
        step: &Step,
        store: &mut ReferenceStore,
    ) -> Result<StepOutcome> {
        match action {
            TrashAction::Purge => {
                purge::purge(self.repository)?;
                Ok(StepOutcome::Purged)
            }
            TrashAction::Recover => {
                let matched = self.match_items(step, store)?;
                if step.wants_references() {
                    single_of(&matched)?;
                    store.check_writes(self.reference_writes(step))?;
                }
                let locations =
                    recover::recover(self.repository, &matched, step.wants_references())?;
                let pending = self.pending_references(&locations, step)?;
                store.add_all(pending)?;
                Ok(StepOutcome::Recovered(locations))
            }
            TrashAction::Delete => {
                let matched = self.match_items(step, store)?;
                let pending = self.pending_references(&matched, step)?;
                store.check_all(&pending)?;
                delete::delete(self.repository, &matched, step.wants_references())?;
                store.add_all(pending)?;
                Ok(StepOutcome::Deleted(matched))
            }
        }
    }

    fn match_items(&self, step: &Step, store: &ReferenceStore) -> Result<Vec<TrashedItem>> {
        let conditions = step
            .match_spec
            .as_ref()
            .ok_or(MigrationError::MissingMatchCondition)?;
        let resolver = ReferenceResolver::new(&self.options.reference_syntax, store);
        let resolved = resolver.resolve(conditions)?;
        debug!(conditions = %resolved, "match conditions resolved");
        let items = self.matcher.match_items(&resolved)?;
        info!(matched = items.len(), "trashed items matched");
        Ok(items)
    }

    /// `(identifier, overwrite)` for every reference the step defines.
    fn reference_writes<'s>(&self, step: &'s Step) -> impl Iterator<Item = (&'s str, bool)> {
        let allow_overwrite = self.options.allow_overwrite;
        step.reference_definitions()
            .iter()
            .map(move |definition| {
                (
                    definition.identifier.as_str(),
                    definition.overwrite && allow_overwrite,
                )
            })
    }

    /// Extracts every requested attribute from the single acted-upon entity.
    fn pending_references<T: LocationLike>(
        &self,
        entities: &[T],
        step: &Step,
    ) -> Result<Vec<PendingReference>> {
        if !step.wants_references() {
            return Ok(Vec::new());
        }
        let entity = single_of(entities)?;
        step.reference_definitions()
            .iter()
            .zip(self.reference_writes(step))
            .map(|(definition, (identifier, overwrite))| {
                let value = attributes::extract(entity, &definition.attribute, self.repository)?;
                Ok(PendingReference {
                    identifier: identifier.to_string(),
                    value,
                    overwrite,
                })
            })
            .collect()
    }
}
