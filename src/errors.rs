use thiserror::Error;

pub type GuardResult<T> = Result<T, GuardError>;

/// Failures reported by a [`Budget`](crate::budget::Budget) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("Item `{0}` already exists")]
    DuplicateItem(String),
    #[error("No item at position {0}")]
    ItemNotFound(usize),
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

/// Failures surfaced by [`BudgetGuard`](crate::guard::BudgetGuard).
///
/// The first four variants carry fixed messages meant for matching and for
/// user-facing reporting. `Budget` only carries a failure raised by the budget
/// while items are being listed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("Budget does not exist")]
    NoBudget,
    #[error("Budget not in effect")]
    BudgetNotInEffect,
    #[error("Duplicate item")]
    DuplicateItem,
    #[error("Item does not exist")]
    ItemNotFound,
    #[error(transparent)]
    Budget(BudgetError),
}

/// Coarse grouping of [`GuardError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardErrorKind {
    /// The budget itself is missing or unusable.
    InvalidBudget,
    /// The budget is usable but the requested item change is not.
    InvalidItem,
    /// Raised by the budget while listing and passed through untouched.
    Collaborator,
}

impl GuardError {
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            GuardError::NoBudget | GuardError::BudgetNotInEffect => GuardErrorKind::InvalidBudget,
            GuardError::DuplicateItem | GuardError::ItemNotFound => GuardErrorKind::InvalidItem,
            GuardError::Budget(_) => GuardErrorKind::Collaborator,
        }
    }
}

/// Errors raised while loading or saving [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
