//! Grouping pipeline
//!
//! Wires the injected record source and result sink around the partitioning
//! core: load both tables, split people across heads, flatten, write.

use shared::{logging, run_debug, run_info, run_warn, CollectionRole, RunId, RunSummary};

use crate::config::GrouperConfig;
use crate::core::{project_all, Partitioner};
use crate::error::GrouperResult;
use crate::traits::{RecordSource, ResultSink};

/// One-shot grouping pipeline over injected I/O services
pub struct Grouper<S, K>
where
    S: RecordSource,
    K: ResultSink,
{
    source: S,
    sink: K,
    config: GrouperConfig,
}

impl<S, K> Grouper<S, K>
where
    S: RecordSource,
    K: ResultSink,
{
    pub fn new(source: S, sink: K, config: GrouperConfig) -> Self {
        Self { source, sink, config }
    }

    pub fn config(&self) -> &GrouperConfig {
        &self.config
    }

    /// Execute one run. Every call gets its own run id and partitioner.
    pub async fn run(&self) -> GrouperResult<RunSummary> {
        let run_id = RunId::new();
        logging::log_startup(&run_id, "grouping run");

        let people = self.source.load(CollectionRole::People).await?;
        let heads = self.source.load(CollectionRole::Heads).await?;

        let (people, heads) = if self.config.grouping_enabled {
            (people, heads)
        } else {
            run_debug!(run_id, "Grouping disabled, ignoring grouping columns");
            (people.without_grouping(), heads.without_grouping())
        };

        match (people.grouping_field(), heads.grouping_field()) {
            (Some(people_field), Some(heads_field)) => {
                run_info!(
                    run_id,
                    "🏫 Attempting college-based grouping (people '{}', heads '{}')",
                    people_field,
                    heads_field
                );
            }
            _ => {
                run_info!(run_id, "No matching college columns in both files, performing general grouping");
            }
        }

        let partition = Partitioner::new(self.config.tracking)
            .partition(&heads, &people)
            .map_err(|e| {
                logging::log_error(&run_id, "Partitioning", &e);
                e
            })?;

        if partition.unplaced_after_grouping > 0 {
            run_warn!(
                run_id,
                "{} people could not be assigned based on college grouping. Assigning them generally.",
                partition.unplaced_after_grouping
            );
        }

        let rows = project_all(&partition.associations);
        if partition.paired_count() == 0 {
            run_warn!(run_id, "No groups were formed. Check your input data.");
        }

        self.sink.write_rows(&rows).await?;

        let mut summary = RunSummary::new(run_id, partition.mode, self.config.tracking);
        summary.people_total = people.len();
        summary.heads_total = heads.len();
        summary.paired_rows = partition.paired_count();
        summary.status_rows = partition.status_count();
        summary.unplaced_after_grouping = partition.unplaced_after_grouping;
        summary.rows_written = rows.len();

        self.sink.write_summary(&summary).await?;

        logging::log_progress(
            &run_id,
            "Distribution",
            &format!(
                "{} mode, {} paired rows, {} status rows",
                summary.mode, summary.paired_rows, summary.status_rows
            ),
        );
        logging::log_success(&run_id, &format!("Grouping complete: {} rows written", summary.rows_written));

        Ok(summary)
    }
}
