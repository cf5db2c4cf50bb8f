mod common;

use std::thread;

use client_budget::{GuardError, Quote, SharedBudgetGuard};

#[test]
fn shared_guard_applies_the_same_gate() {
    common::init_tracing();
    let shared: SharedBudgetGuard<Quote> = SharedBudgetGuard::new();
    assert_eq!(shared.total(), Err(GuardError::NoBudget));

    let mut quote = Quote::new("Shared");
    quote.withdraw();
    shared.assign_budget(Some(quote));
    assert_eq!(shared.list_items(), Err(GuardError::BudgetNotInEffect));
}

#[test]
fn duplicate_adds_from_threads_yield_one_item() {
    let shared: SharedBudgetGuard<Quote> = SharedBudgetGuard::new();
    shared.assign_budget(Some(Quote::new("Race")));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let guard = shared.clone();
            thread::spawn(move || guard.add_item("Flowers", 95_000))
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread"))
        .collect();

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|result| result.as_ref().err())
        .all(|err| *err == GuardError::DuplicateItem));
    assert_eq!(shared.total(), Ok(95_000));
    assert_eq!(shared.with_guard(|guard| guard.budget().map(|q| q.items.len())), Some(1));
}
