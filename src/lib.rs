#![doc(test(attr(deny(warnings))))]

//! Client Budget guards a client's single budget (quote) and its line items,
//! only letting operations through while a budget is assigned and in effect.

pub mod budget;
pub mod config;
pub mod errors;
pub mod guard;
pub mod utils;

pub use budget::{Budget, BudgetItem, Quote, QuoteItem, QuoteStatus};
pub use errors::{BudgetError, GuardError, GuardErrorKind, GuardResult};
pub use guard::{BudgetGuard, SharedBudgetGuard};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default configuration.
pub fn init() {
    init_with(&config::Config::default());
}

/// Initializes global tracing from `config` and emits a startup info log.
/// Only the first call has any effect.
pub fn init_with(config: &config::Config) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(config);
        tracing::info!("Client Budget tracing initialized.");
    });
}
