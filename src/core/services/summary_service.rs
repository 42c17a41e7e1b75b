use crate::domain::Activity;

/// Totals over every activity on a page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivitySummary {
    pub total_budget: f64,
    pub total_spend: f64,
    pub difference: f64,
    pub within_budget_count: usize,
    pub total_count: usize,
}

impl ActivitySummary {
    /// `within/total`, e.g. `2/3`. An empty page shows `0/0`.
    pub fn ratio_label(&self) -> String {
        format!("{}/{}", self.within_budget_count, self.total_count)
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize<'a, I>(activities: I) -> ActivitySummary
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        let mut summary = activities
            .into_iter()
            .fold(ActivitySummary::default(), |mut acc, activity| {
                acc.total_budget += activity.budget;
                acc.total_spend += activity.actual_spend;
                acc.total_count += 1;
                if activity.is_within_budget() {
                    acc.within_budget_count += 1;
                }
                acc
            });
        summary.difference = summary.total_budget - summary.total_spend;
        summary
    }
}
