//! Client-side guard around a single budget.

pub mod shared;

use tracing::{debug, warn};

use crate::{
    budget::{Budget, BudgetItem},
    errors::{GuardError, GuardResult},
};

pub use shared::SharedBudgetGuard;

/// Holds at most one budget and lets item operations through only while that
/// budget is assigned and reports itself in effect.
///
/// Validity is asked of the budget on every call and never cached, so a
/// budget that lapses between calls blocks the very next operation.
#[derive(Debug, Clone)]
pub struct BudgetGuard<B = Box<dyn Budget + Send>> {
    budget: Option<B>,
}

impl<B> Default for BudgetGuard<B> {
    fn default() -> Self {
        Self { budget: None }
    }
}

impl<B: Budget> BudgetGuard<B> {
    /// Creates a guard with no budget assigned.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(budget: B) -> Self {
        Self {
            budget: Some(budget),
        }
    }

    /// Replaces the assigned budget, or detaches it when `budget` is `None`.
    /// Nothing is validated here. Returns the budget previously held.
    pub fn assign_budget(&mut self, budget: Option<B>) -> Option<B> {
        debug!(assigned = budget.is_some(), "assigning budget");
        std::mem::replace(&mut self.budget, budget)
    }

    pub fn budget(&self) -> Option<&B> {
        self.budget.as_ref()
    }

    pub fn has_budget(&self) -> bool {
        self.budget.is_some()
    }

    pub fn total(&self) -> GuardResult<i64> {
        let budget = self.gate("total")?;
        Ok(budget.total_amount())
    }

    /// Adds an item. Any refusal by the budget is reported as
    /// [`GuardError::DuplicateItem`].
    pub fn add_item(&mut self, description: &str, amount: i64) -> GuardResult<()> {
        let budget = self.gate_mut("add_item")?;
        debug!(description, amount, "adding budget item");
        budget.add_item(description, amount).map_err(|err| {
            debug!(%err, "budget refused item");
            reject("add_item", GuardError::DuplicateItem)
        })
    }

    /// Removes the item at `index`. A budget with no items is left alone and
    /// the call succeeds; otherwise the index is checked by the budget itself
    /// and any refusal is reported as [`GuardError::ItemNotFound`].
    pub fn remove_item(&mut self, index: usize) -> GuardResult<()> {
        let budget = self.gate_mut("remove_item")?;
        if budget.item_count() == 0 {
            debug!(index, "budget has no items, nothing to remove");
            return Ok(());
        }
        debug!(index, "removing budget item");
        budget.remove_item(index).map_err(|err| {
            debug!(%err, "budget refused removal");
            reject("remove_item", GuardError::ItemNotFound)
        })
    }

    /// Items in position order, or `None` when the budget holds none.
    pub fn list_items(&self) -> GuardResult<Option<Vec<BudgetItem>>> {
        let budget = self.gate("list_items")?;
        let count = budget.item_count();
        if count == 0 {
            return Ok(None);
        }
        let items = (0..count)
            .map(|index| budget.item(index))
            .collect::<Result<Vec<_>, _>>()
            .map_err(GuardError::Budget)?;
        Ok(Some(items))
    }

    fn gate(&self, operation: &'static str) -> GuardResult<&B> {
        let budget = self
            .budget
            .as_ref()
            .ok_or_else(|| reject(operation, GuardError::NoBudget))?;
        if !budget.is_in_effect() {
            return Err(reject(operation, GuardError::BudgetNotInEffect));
        }
        Ok(budget)
    }

    fn gate_mut(&mut self, operation: &'static str) -> GuardResult<&mut B> {
        let budget = self
            .budget
            .as_mut()
            .ok_or_else(|| reject(operation, GuardError::NoBudget))?;
        if !budget.is_in_effect() {
            return Err(reject(operation, GuardError::BudgetNotInEffect));
        }
        Ok(budget)
    }
}

fn reject(operation: &'static str, error: GuardError) -> GuardError {
    warn!(operation, reason = %error, "budget operation rejected");
    error
}
