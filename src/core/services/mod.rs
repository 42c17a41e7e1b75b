pub mod projection_service;
pub mod summary_service;

pub use projection_service::{Projection, ProjectionParams, ProjectionService, ProjectionTotals};
pub use summary_service::{ActivitySummary, SummaryService};
