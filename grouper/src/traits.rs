//! Trait definitions with mockall annotations for testing
//!
//! The record source and result sink are the only I/O the grouping pipeline
//! performs. Both are injected into `Grouper`, so tests can swap in the
//! generated mocks.

use shared::{Collection, CollectionRole, Record, RunSummary};

use crate::error::GrouperResult;

/// Supplies the two input collections for a run
#[mockall::automock]
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Load the people or the heads table
    ///
    /// # Returns
    /// The collection with its primary field set and, if one was configured
    /// or detected, its grouping field
    async fn load(&self, role: CollectionRole) -> GrouperResult<Collection>;
}

/// Receives the flattened result of a run
#[mockall::automock]
#[async_trait::async_trait]
pub trait ResultSink: Send + Sync {
    /// Persist the projected rows, in order
    async fn write_rows(&self, rows: &[Record]) -> GrouperResult<()>;

    /// Persist the run summary. Sinks that don't keep summaries return `Ok(())`.
    async fn write_summary(&self, summary: &RunSummary) -> GrouperResult<()>;
}
