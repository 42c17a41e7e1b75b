use activity_budget::core::evaluator::evaluate;
use activity_budget::core::services::SummaryService;
use activity_budget::core::{RecordStore, StoreState};
use activity_budget::domain::{Activity, ActivityCategory, ReturnActivity};
use activity_budget::errors::ActivityError;

mod common;

fn filled_store() -> RecordStore<Activity> {
    let mut store = RecordStore::new();
    for activity in common::sample_activities() {
        store.add(activity).unwrap();
    }
    store
}

#[test]
fn within_budget_matches_comparison_for_sampled_amounts() {
    let amounts = [0.0, 0.01, 1.0, 99.99, 100.0, 650.0, 1000.0, 1e9];
    for budget in amounts {
        for spend in amounts {
            let eval = evaluate(budget, spend);
            assert_eq!(eval.within_budget, spend <= budget, "{budget} vs {spend}");
            assert_eq!(eval.difference, budget - spend);
        }
    }
}

#[test]
fn clear_always_empties() {
    let mut store = filled_store();
    store.clear();
    assert!(store.list().is_empty());
    assert_eq!(store.state(), StoreState::Empty);
    store.clear();
    assert!(store.list().is_empty());
}

#[test]
fn blank_names_never_change_length() {
    let mut store = filled_store();
    for blank in ["", " ", "\t", "  \n "] {
        let result = store.add(Activity::new(blank, ActivityCategory::Food, 1.0, 1.0));
        assert!(matches!(result, Err(ActivityError::Validation(_))));
        assert_eq!(store.len(), 3);
    }

    let mut returns = RecordStore::new();
    assert!(returns.add(ReturnActivity::new("   ", 10.0)).is_err());
    assert!(returns.is_empty());
}

#[test]
fn out_of_range_delete_keeps_order() {
    let mut store = filled_store();
    let before: Vec<String> = store.list().iter().map(|a| a.name.clone()).collect();
    for index in [3, 4, 5, usize::MAX] {
        let err = store.delete(index).unwrap_err();
        assert_eq!(err, ActivityError::IndexOutOfRange { index, len: 3 });
        assert!(err.is_soft());
    }
    let after: Vec<String> = store.list().iter().map(|a| a.name.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn delete_preserves_remaining_order() {
    let mut store = filled_store();
    let removed = store.delete(1).unwrap();
    assert_eq!(removed.name, "Rent");
    let names: Vec<&str> = store.list().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Groceries", "Bus pass"]);
}

#[test]
fn empty_summary_is_zero_and_zero_over_zero() {
    let store: RecordStore<Activity> = RecordStore::new();
    let summary = SummaryService::summarize(store.list());
    assert_eq!(summary.total_budget, 0.0);
    assert_eq!(summary.total_spend, 0.0);
    assert_eq!(summary.difference, 0.0);
    assert_eq!(summary.ratio_label(), "0/0");
}

#[test]
fn oversized_amounts_are_rejected_so_totals_stay_finite() {
    let mut store = filled_store();
    for budget in [1e308, f64::MAX, 1e16] {
        let result = store.add(Activity::new("huge", ActivityCategory::Savings, budget, 0.0));
        assert!(matches!(result, Err(ActivityError::Validation(_))));
    }
    let result = store.add(Activity::new("huge", ActivityCategory::Savings, 10.0, 1e308));
    assert!(result.is_err());
    assert_eq!(store.len(), 3);

    store
        .add(Activity::new("cap", ActivityCategory::Savings, 1e15, 1e15))
        .unwrap();
    store
        .add(Activity::new("cap", ActivityCategory::Savings, 1e15, 0.0))
        .unwrap();
    let summary = SummaryService::summarize(store.list());
    assert!(summary.total_budget.is_finite());
    assert!(summary.difference.is_finite());
}
