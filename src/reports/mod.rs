//! Read-side reporting
//!
//! Reports are pure projections over the stored collections; they never
//! mutate anything.

pub mod summary;

pub use summary::{CategoryBreakdown, MonthlyBreakdown, SpendingSummary};
