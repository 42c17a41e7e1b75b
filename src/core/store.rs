//! Ordered, session-scoped record storage for a single page.

use crate::domain::common::{NamedEntity, Validate};
use crate::errors::{ActivityError, Result};

/// The two observable states of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    NonEmpty,
}

/// Insertion-ordered list of records. Records are never edited in place; they
/// are added, deleted by position, or cleared in bulk.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Validate + NamedEntity> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` after validation. A rejected record leaves the store
    /// unchanged.
    pub fn add(&mut self, record: T) -> Result<()> {
        if let Err(err) = record.validate() {
            tracing::warn!(error = %err, "rejected record");
            return Err(err);
        }
        tracing::info!(name = record.name(), position = self.records.len(), "record added");
        self.records.push(record);
        Ok(())
    }

    pub fn clear(&mut self) {
        let removed = self.records.len();
        self.records.clear();
        tracing::info!(removed, "store cleared");
    }

    /// Removes the record at `index`, keeping the order of the rest.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        let len = self.records.len();
        if index >= len {
            tracing::warn!(index, len, "delete out of range");
            return Err(ActivityError::IndexOutOfRange { index, len });
        }
        let removed = self.records.remove(index);
        tracing::info!(name = removed.name(), index, "record deleted");
        Ok(removed)
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn state(&self) -> StoreState {
        if self.records.is_empty() {
            StoreState::Empty
        } else {
            StoreState::NonEmpty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Activity, ActivityCategory};

    fn activity(name: &str) -> Activity {
        Activity::new(name, ActivityCategory::Expense, 100.0, 50.0)
    }

    fn names(store: &RecordStore<Activity>) -> Vec<String> {
        store.list().iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = RecordStore::new();
        assert_eq!(store.state(), StoreState::Empty);
        store.add(activity("a")).unwrap();
        store.add(activity("b")).unwrap();
        store.add(activity("a")).unwrap();
        assert_eq!(names(&store), ["a", "b", "a"]);
        assert_eq!(store.state(), StoreState::NonEmpty);
    }

    #[test]
    fn blank_name_is_rejected_without_change() {
        let mut store = RecordStore::new();
        store.add(activity("keep")).unwrap();
        for blank in ["", "   ", "\t\n"] {
            let err = store.add(activity(blank)).unwrap_err();
            assert!(matches!(err, ActivityError::Validation(_)));
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = RecordStore::new();
        store.add(activity("a")).unwrap();
        store.clear();
        assert!(store.list().is_empty());
        store.clear();
        assert_eq!(store.state(), StoreState::Empty);
    }

    #[test]
    fn delete_preserves_remaining_order() {
        let mut store = RecordStore::new();
        for name in ["a", "b", "c", "d"] {
            store.add(activity(name)).unwrap();
        }
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&store), ["a", "c", "d"]);
    }

    #[test]
    fn out_of_range_delete_leaves_store_untouched() {
        let mut store = RecordStore::new();
        store.add(activity("a")).unwrap();
        store.add(activity("b")).unwrap();
        for index in [2, 5, usize::MAX] {
            let err = store.delete(index).unwrap_err();
            assert_eq!(err, ActivityError::IndexOutOfRange { index, len: 2 });
        }
        assert_eq!(names(&store), ["a", "b"]);
    }

    #[test]
    fn delete_on_empty_store_is_out_of_range() {
        let mut store: RecordStore<Activity> = RecordStore::new();
        assert!(store.delete(0).is_err());
        assert_eq!(store.state(), StoreState::Empty);
    }
}
