//! The budget contract consumed by the guard, plus an in-memory quote.

pub mod quote;

use serde::{Deserialize, Serialize};

use crate::errors::BudgetError;

pub use quote::{Quote, QuoteItem, QuoteStatus};

/// A line item as reported by a budget: its description and its amount as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub description: String,
    pub amount: String,
}

impl BudgetItem {
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// A budget whose items are addressed by zero-based insertion position.
///
/// Implementations own validity, totals and item storage. Item descriptions
/// are unique within a budget.
pub trait Budget {
    fn is_in_effect(&self) -> bool;

    /// Monetary total in whole units.
    fn total_amount(&self) -> i64;

    fn item_count(&self) -> usize;

    /// Fails with [`BudgetError::DuplicateItem`] when `description` is taken.
    fn add_item(&mut self, description: &str, amount: i64) -> Result<(), BudgetError>;

    /// Fails with [`BudgetError::ItemNotFound`] when `index` is out of range.
    fn remove_item(&mut self, index: usize) -> Result<(), BudgetError>;

    fn item(&self, index: usize) -> Result<BudgetItem, BudgetError>;
}

impl<B: Budget + ?Sized> Budget for Box<B> {
    fn is_in_effect(&self) -> bool {
        (**self).is_in_effect()
    }

    fn total_amount(&self) -> i64 {
        (**self).total_amount()
    }

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn add_item(&mut self, description: &str, amount: i64) -> Result<(), BudgetError> {
        (**self).add_item(description, amount)
    }

    fn remove_item(&mut self, index: usize) -> Result<(), BudgetError> {
        (**self).remove_item(index)
    }

    fn item(&self, index: usize) -> Result<BudgetItem, BudgetError> {
        (**self).item(index)
    }
}
