//! Per-session state: one independent namespace per page plus queued notices.

use std::collections::BTreeMap;

use chrono::{DateTime, Month, Utc};
use uuid::Uuid;

use crate::core::evaluator::{self, BudgetEvaluation};
use crate::core::notice::Notice;
use crate::core::services::{ActivitySummary, SummaryService};
use crate::core::store::RecordStore;
use crate::domain::{Activity, PageId, ReturnActivity};
use crate::errors::Result;

/// Inputs of the single-record budget check.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCheckState {
    pub month: Month,
    pub budget: f64,
    pub spend: f64,
    /// Set by `evaluate`, cleared whenever an input changes.
    pub evaluated: bool,
}

impl BudgetCheckState {
    pub const RESET_BUDGET: f64 = 500.0;
    pub const RESET_SPEND: f64 = 150.0;

    pub fn evaluation(&self) -> BudgetEvaluation {
        evaluator::evaluate(self.budget, self.spend)
    }

    pub fn set_inputs(&mut self, month: Month, budget: f64, spend: f64) -> Result<()> {
        crate::domain::common::ensure_amount("Budget", budget)?;
        crate::domain::common::ensure_amount("Spend", spend)?;
        self.month = month;
        self.budget = budget;
        self.spend = spend;
        self.evaluated = false;
        Ok(())
    }

    fn reset(&mut self) {
        self.month = Month::January;
        self.budget = Self::RESET_BUDGET;
        self.spend = Self::RESET_SPEND;
        self.evaluated = false;
    }
}

impl Default for BudgetCheckState {
    fn default() -> Self {
        Self {
            month: Month::January,
            budget: 1000.0,
            spend: 650.0,
            evaluated: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityListState {
    pub store: RecordStore<Activity>,
}

impl ActivityListState {
    pub fn summary(&self) -> ActivitySummary {
        SummaryService::summarize(self.store.list())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReturnProjectionState {
    pub store: RecordStore<ReturnActivity>,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityObjectsState {
    pub store: RecordStore<Activity>,
}

/// Explicit replacement for process-wide session globals. Created when a shell
/// starts and dropped when it exits.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: Uuid,
    started_at: DateTime<Utc>,
    current_page: PageId,
    pub budget_check: BudgetCheckState,
    pub activity_list: ActivityListState,
    pub returns: ReturnProjectionState,
    pub objects: ActivityObjectsState,
    notices: BTreeMap<PageId, Vec<Notice>>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            current_page: PageId::Home,
            budget_check: BudgetCheckState::default(),
            activity_list: ActivityListState::default(),
            returns: ReturnProjectionState::default(),
            objects: ActivityObjectsState::default(),
            notices: BTreeMap::new(),
        };
        tracing::info!(session = %session.id, "session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn navigate(&mut self, page: PageId) {
        if page != self.current_page {
            tracing::info!(from = ?self.current_page, to = ?page, "navigate");
        }
        self.current_page = page;
    }

    pub fn push_notice(&mut self, page: PageId, notice: Notice) {
        self.notices.entry(page).or_default().push(notice);
    }

    /// Drains the notices queued for `page`.
    pub fn take_notices(&mut self, page: PageId) -> Vec<Notice> {
        self.notices.remove(&page).unwrap_or_default()
    }

    pub fn pending_notices(&self, page: PageId) -> &[Notice] {
        self.notices.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Restores the budget-check inputs and queues a confirmation notice.
    pub fn reset_budget_check(&mut self) {
        self.budget_check.reset();
        self.push_notice(
            PageId::BudgetCheck,
            Notice::success("Budget check values reset."),
        );
    }

    pub fn record_count(&self, page: PageId) -> usize {
        match page {
            PageId::Home | PageId::BudgetCheck => 0,
            PageId::ActivityList => self.activity_list.store.len(),
            PageId::ReturnProjection => self.returns.store.len(),
            PageId::ActivityObjects => self.objects.store.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityCategory;

    #[test]
    fn new_session_starts_home_with_default_check_values() {
        let session = SessionContext::new();
        assert_eq!(session.current_page(), PageId::Home);
        assert_eq!(session.budget_check.month, Month::January);
        assert_eq!(session.budget_check.budget, 1000.0);
        assert_eq!(session.budget_check.spend, 650.0);
        let eval = session.budget_check.evaluation();
        assert!(eval.within_budget);
        assert_eq!(eval.difference, 350.0);
    }

    #[test]
    fn reset_restores_values_and_queues_one_notice() {
        let mut session = SessionContext::new();
        session
            .budget_check
            .set_inputs(Month::March, 10.0, 20.0)
            .unwrap();
        session.budget_check.evaluated = true;
        session.reset_budget_check();

        assert_eq!(session.budget_check.month, Month::January);
        assert_eq!(session.budget_check.budget, 500.0);
        assert_eq!(session.budget_check.spend, 150.0);
        assert!(!session.budget_check.evaluated);

        let notices = session.take_notices(PageId::BudgetCheck);
        assert_eq!(notices.len(), 1);
        assert!(session.take_notices(PageId::BudgetCheck).is_empty());
    }

    #[test]
    fn negative_check_inputs_are_rejected() {
        let mut session = SessionContext::new();
        assert!(session
            .budget_check
            .set_inputs(Month::May, -1.0, 0.0)
            .is_err());
        assert_eq!(session.budget_check.budget, 1000.0);
    }

    #[test]
    fn pages_do_not_share_stores() {
        let mut session = SessionContext::new();
        session
            .activity_list
            .store
            .add(Activity::new("Rent", ActivityCategory::Housing, 1.0, 1.0))
            .unwrap();
        assert_eq!(session.record_count(PageId::ActivityList), 1);
        assert_eq!(session.record_count(PageId::ActivityObjects), 0);
        session.objects.store.clear();
        assert_eq!(session.record_count(PageId::ActivityList), 1);
    }

    #[test]
    fn notices_are_scoped_per_page() {
        let mut session = SessionContext::new();
        session.push_notice(PageId::ActivityList, Notice::info("list"));
        assert!(session.pending_notices(PageId::ActivityObjects).is_empty());
        assert_eq!(session.pending_notices(PageId::ActivityList).len(), 1);
    }
}
