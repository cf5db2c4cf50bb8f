use std::sync::{Arc, Mutex, MutexGuard};

use super::BudgetGuard;
use crate::{
    budget::{Budget, BudgetItem},
    errors::GuardResult,
};

/// A [`BudgetGuard`] behind a mutex, for callers that share one guard across
/// threads. Every operation holds the lock for its whole duration.
#[derive(Debug)]
pub struct SharedBudgetGuard<B = Box<dyn Budget + Send>> {
    inner: Arc<Mutex<BudgetGuard<B>>>,
}

impl<B> Clone for SharedBudgetGuard<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: Budget> Default for SharedBudgetGuard<B> {
    fn default() -> Self {
        Self::from_guard(BudgetGuard::new())
    }
}

impl<B: Budget> SharedBudgetGuard<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_guard(guard: BudgetGuard<B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(guard)),
        }
    }

    pub fn assign_budget(&self, budget: Option<B>) -> Option<B> {
        self.lock().assign_budget(budget)
    }

    pub fn has_budget(&self) -> bool {
        self.lock().has_budget()
    }

    pub fn total(&self) -> GuardResult<i64> {
        self.lock().total()
    }

    pub fn add_item(&self, description: &str, amount: i64) -> GuardResult<()> {
        self.lock().add_item(description, amount)
    }

    pub fn remove_item(&self, index: usize) -> GuardResult<()> {
        self.lock().remove_item(index)
    }

    pub fn list_items(&self) -> GuardResult<Option<Vec<BudgetItem>>> {
        self.lock().list_items()
    }

    /// Runs `f` with exclusive access to the underlying guard.
    pub fn with_guard<R>(&self, f: impl FnOnce(&mut BudgetGuard<B>) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, BudgetGuard<B>> {
        // The guard has no multi-step invariant a panic could leave half done.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
