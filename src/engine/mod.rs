// ABOUTME: Run engine for checking several workflow files in one pass
// ABOUTME: Handles candidate iteration, skipping, and result aggregation

pub mod aggregator;
pub mod result;

pub use aggregator::RunAggregator;
pub use result::{FileOutcome, RunStatus, RunSummary};
