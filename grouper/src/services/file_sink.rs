//! File-backed result sink
//!
//! Writes the grouped rows as a CSV or JSON table, and the run summary as
//! pretty-printed JSON when a summary path is configured.

use std::path::Path;

use async_trait::async_trait;
use indexmap::IndexSet;
use shared::{Record, RunSummary};
use tokio::fs;

use crate::config::{SinkConfig, TableFormat};
use crate::error::GrouperResult;
use crate::traits::ResultSink;

/// Writes result tables to disk
pub struct FileResultSink {
    config: SinkConfig,
}

impl FileResultSink {
    pub fn new(config: SinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    /// Every field name used by any row, in first-seen order
    pub fn columns(rows: &[Record]) -> Vec<&str> {
        let mut columns: IndexSet<&str> = IndexSet::new();
        for row in rows {
            columns.extend(row.fields());
        }
        columns.into_iter().collect()
    }

    /// Render rows as CSV over the union of their columns; absent cells are empty
    pub fn render_csv(rows: &[Record]) -> GrouperResult<Vec<u8>> {
        let columns = Self::columns(rows);
        let mut buffer = Vec::new();

        if !columns.is_empty() {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            writer.write_record(&columns)?;
            for row in rows {
                writer.write_record(columns.iter().map(|column| row.get(column).unwrap_or("")))?;
            }
            writer.flush()?;
        }

        Ok(buffer)
    }

    pub fn render_json(rows: &[Record]) -> GrouperResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(rows)?)
    }

    async fn write_file(path: &Path, content: &[u8]) -> GrouperResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl ResultSink for FileResultSink {
    async fn write_rows(&self, rows: &[Record]) -> GrouperResult<()> {
        let format = self.config.resolved_format()?;
        let content = match format {
            TableFormat::Csv => Self::render_csv(rows)?,
            TableFormat::Json => Self::render_json(rows)?,
        };

        Self::write_file(&self.config.output_path, &content).await?;

        tracing::debug!(
            "📝 Wrote {} rows as {} to {}",
            rows.len(),
            format,
            self.config.output_path.display()
        );
        Ok(())
    }

    async fn write_summary(&self, summary: &RunSummary) -> GrouperResult<()> {
        let Some(path) = &self.config.summary_path else {
            return Ok(());
        };

        let content = serde_json::to_vec_pretty(summary)?;
        Self::write_file(path, &content).await?;

        tracing::debug!("📊 Wrote run summary to {}", path.display());
        Ok(())
    }
}
