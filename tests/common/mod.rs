#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use client_budget::{Budget, BudgetError, BudgetItem};
use once_cell::sync::Lazy;

/// Installs the tracing subscriber once for the whole test binary.
pub static TRACING: Lazy<()> = Lazy::new(client_budget::init);

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// A budget whose answers are scripted up front and whose calls are recorded.
#[derive(Debug, Default)]
pub struct ScriptedBudget {
    pub in_effect: bool,
    pub total: i64,
    pub count: usize,
    pub items: Vec<BudgetItem>,
    pub add_error: Option<BudgetError>,
    pub remove_error: Option<BudgetError>,
    pub item_error: Option<BudgetError>,

    pub in_effect_calls: Cell<usize>,
    pub count_calls: Cell<usize>,
    pub item_calls: RefCell<Vec<usize>>,
    pub add_calls: Vec<(String, i64)>,
    pub remove_calls: Vec<usize>,
}

impl ScriptedBudget {
    pub fn in_effect() -> Self {
        Self {
            in_effect: true,
            ..Self::default()
        }
    }

    pub fn not_in_effect() -> Self {
        Self::default()
    }

    pub fn with_total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_items(mut self, items: Vec<BudgetItem>) -> Self {
        self.count = items.len();
        self.items = items;
        self
    }

    pub fn failing_add(mut self, error: BudgetError) -> Self {
        self.add_error = Some(error);
        self
    }

    pub fn failing_remove(mut self, error: BudgetError) -> Self {
        self.remove_error = Some(error);
        self
    }

    pub fn failing_item(mut self, error: BudgetError) -> Self {
        self.item_error = Some(error);
        self
    }

    /// True when no item operation reached this budget.
    pub fn untouched_items(&self) -> bool {
        self.add_calls.is_empty() && self.remove_calls.is_empty() && self.item_calls.borrow().is_empty()
    }
}

impl Budget for ScriptedBudget {
    fn is_in_effect(&self) -> bool {
        self.in_effect_calls.set(self.in_effect_calls.get() + 1);
        self.in_effect
    }

    fn total_amount(&self) -> i64 {
        self.total
    }

    fn item_count(&self) -> usize {
        self.count_calls.set(self.count_calls.get() + 1);
        self.count
    }

    fn add_item(&mut self, description: &str, amount: i64) -> Result<(), BudgetError> {
        self.add_calls.push((description.to_string(), amount));
        match &self.add_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn remove_item(&mut self, index: usize) -> Result<(), BudgetError> {
        self.remove_calls.push(index);
        match &self.remove_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn item(&self, index: usize) -> Result<BudgetItem, BudgetError> {
        self.item_calls.borrow_mut().push(index);
        if let Some(err) = &self.item_error {
            return Err(err.clone());
        }
        self.items
            .get(index)
            .cloned()
            .ok_or(BudgetError::ItemNotFound(index))
    }
}
