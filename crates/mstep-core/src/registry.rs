//! Step executor trait and registry.
//!
//! A migration run hands every step to an [`ExecutorRegistry`], which routes
//! it to the [`StepExecutor`] registered for the step's type.
//!
//! # Example
//!
//! ```ignore
//! let executor = TrashExecutor::new(&repository, &matcher);
//! let mut registry = ExecutorRegistry::new();
//! registry.register(Box::new(executor));
//!
//! let mut store = ReferenceStore::new();
//! for step in &steps {
//!     registry.execute(step, &mut store)?;
//! }
//! ```

use std::collections::BTreeMap;

use mstep_model::Step;

use crate::error::{MigrationError, StepError};
use crate::reference::ReferenceStore;
use crate::repository::{TrashMatcher, TrashRepository};
use crate::trash::{StepOutcome, TRASH_STEP_TYPE, TrashAction, TrashExecutor, validate_step};

/// Executes steps of one step type.
pub trait StepExecutor {
    /// The step type this executor handles (e.g. `trash`).
    fn step_type(&self) -> &'static str;

    /// Action names accepted for this step type.
    fn supported_actions(&self) -> &'static [&'static str];

    /// Checks a step without side effects.
    fn validate(&self, step: &Step) -> Result<(), StepError>;

    /// Runs a step, reading and writing references in `store`.
    fn execute(&self, step: &Step, store: &mut ReferenceStore) -> Result<StepOutcome, StepError>;
}

impl<R, M> StepExecutor for TrashExecutor<'_, R, M>
where
    R: TrashRepository,
    M: TrashMatcher,
{
    fn step_type(&self) -> &'static str {
        TRASH_STEP_TYPE
    }

    fn supported_actions(&self) -> &'static [&'static str] {
        &TrashAction::NAMES
    }

    fn validate(&self, step: &Step) -> Result<(), StepError> {
        validate_step(step).map(|_| ())
    }

    fn execute(&self, step: &Step, store: &mut ReferenceStore) -> Result<StepOutcome, StepError> {
        TrashExecutor::execute(self, step, store)
    }
}

/// Registry of step executors indexed by step type.
#[derive(Default)]
pub struct ExecutorRegistry<'a> {
    executors: BTreeMap<&'static str, Box<dyn StepExecutor + 'a>>,
}

impl<'a> ExecutorRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an executor for its step type, replacing any previous one.
    pub fn register(&mut self, executor: Box<dyn StepExecutor + 'a>) {
        self.executors.insert(executor.step_type(), executor);
    }

    pub fn get(&self, step_type: &str) -> Option<&(dyn StepExecutor + 'a)> {
        self.executors.get(step_type).map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }

    /// Registered step types, sorted.
    pub fn step_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.executors.keys().copied()
    }

    pub fn validate(&self, step: &Step) -> Result<(), StepError> {
        self.lookup(step)?.validate(step)
    }

    /// Routes `step` to the executor registered for its type.
    ///
    /// # Errors
    ///
    /// [`MigrationError::UnsupportedAction`] when no executor handles the
    /// step type, otherwise whatever the executor reports.
    pub fn execute(
        &self,
        step: &Step,
        store: &mut ReferenceStore,
    ) -> Result<StepOutcome, StepError> {
        self.lookup(step)?.execute(step, store)
    }

    fn lookup(&self, step: &Step) -> Result<&(dyn StepExecutor + 'a), StepError> {
        self.get(&step.step_type).ok_or_else(|| {
            let known: Vec<_> = self.step_types().collect();
            StepError::new(
                &step.step_type,
                &step.action,
                MigrationError::UnsupportedAction {
                    supported: format!("step types {}", known.join(", ")),
                },
            )
        })
    }
}
