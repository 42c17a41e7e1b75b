//! Expected-return projection over the return-projection store.

use crate::config::{MAX_RATE_PERCENT, MAX_TERM_MONTHS, MIN_TERM_MONTHS};
use crate::domain::ReturnActivity;
use crate::errors::{ActivityError, Result};

/// Rate and term shared by every record in one computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    rate: f64,
    term_months: u32,
}

impl ProjectionParams {
    /// `rate` is a fraction in `0.0..=1.0`; `term_months` lies in `1..=60`.
    pub fn new(rate: f64, term_months: u32) -> Result<Self> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(ActivityError::validation(
                "Rate must be between 0% and 100%",
            ));
        }
        if !(MIN_TERM_MONTHS..=MAX_TERM_MONTHS).contains(&term_months) {
            return Err(ActivityError::validation(format!(
                "Months must be between {MIN_TERM_MONTHS} and {MAX_TERM_MONTHS}"
            )));
        }
        Ok(Self { rate, term_months })
    }

    /// Builds params from a percentage such as the `5` in "5%".
    pub fn from_percent(rate_percent: f64, term_months: u32) -> Result<Self> {
        if !rate_percent.is_finite() || !(0.0..=MAX_RATE_PERCENT).contains(&rate_percent) {
            return Err(ActivityError::validation(
                "Rate must be between 0% and 100%",
            ));
        }
        Self::new(rate_percent / 100.0, term_months)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn rate_percent(&self) -> f64 {
        self.rate * 100.0
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub name: String,
    pub budget: f64,
    pub expected_return: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectionTotals {
    pub total_invested: f64,
    pub total_return: f64,
    pub gain: f64,
}

impl ProjectionTotals {
    pub fn collect<'a, I>(projections: I) -> Self
    where
        I: IntoIterator<Item = &'a Projection>,
    {
        let mut totals = projections
            .into_iter()
            .fold(Self::default(), |mut acc, projection| {
                acc.total_invested += projection.budget;
                acc.total_return += projection.expected_return;
                acc
            });
        totals.gain = totals.total_return - totals.total_invested;
        totals
    }
}

pub struct ProjectionService;

impl ProjectionService {
    pub fn expected_return(budget: f64, params: ProjectionParams) -> f64 {
        budget * params.rate * f64::from(params.term_months)
    }

    /// Lazily maps each record to its projection. Nothing is cached; call again
    /// to recompute from the current store.
    pub fn project<'a>(
        records: &'a [ReturnActivity],
        params: ProjectionParams,
    ) -> impl Iterator<Item = Projection> + 'a {
        records.iter().map(move |record| Projection {
            name: record.name.clone(),
            budget: record.budget,
            expected_return: Self::expected_return(record.budget, params),
        })
    }
}
