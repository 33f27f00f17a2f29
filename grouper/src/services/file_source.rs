//! File-backed record source
//!
//! Loads the people and heads tables from CSV or JSON files, takes the first
//! column as the primary field and finds (or is told) the grouping column.

use std::path::Path;

use async_trait::async_trait;
use indexmap::IndexSet;
use serde_json::Value;
use shared::{Collection, CollectionRole, Record};
use tokio::fs;

use crate::config::{SourceConfig, TableFormat};
use crate::core::detect_grouping_field;
use crate::error::{GrouperError, GrouperResult};
use crate::traits::RecordSource;

/// Parsed table: header names in column order plus the data rows
pub type Table = (Vec<String>, Vec<Record>);

/// Reads input tables from disk
pub struct FileRecordSource {
    config: SourceConfig,
}

impl FileRecordSource {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Parse CSV text. Short rows simply lack their trailing fields.
    pub fn parse_csv(content: &str) -> GrouperResult<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let record: Record = headers
                .iter()
                .map(String::as_str)
                .zip(row.iter())
                .collect();
            records.push(record);
        }

        Ok((headers, records))
    }

    /// Parse a JSON array of flat objects. Scalars are rendered as strings and
    /// `null` as an empty string; headers are the union of keys in first-seen order.
    pub fn parse_json(path: &Path, content: &str) -> GrouperResult<Table> {
        let value: Value = serde_json::from_str(content)?;
        let rows = value.as_array().ok_or_else(|| GrouperError::MalformedInput {
            path: path.display().to_string(),
            message: "expected a JSON array of objects".to_string(),
        })?;

        let mut headers: IndexSet<String> = IndexSet::new();
        let mut records = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let object = row.as_object().ok_or_else(|| GrouperError::MalformedInput {
                path: path.display().to_string(),
                message: format!("row {index} is not an object"),
            })?;

            let mut record = Record::new();
            for (field, value) in object {
                headers.insert(field.clone());
                record.insert(field.clone(), render_value(value));
            }
            records.push(record);
        }

        Ok((headers.into_iter().collect(), records))
    }

    async fn read_table(path: &Path) -> GrouperResult<Table> {
        let format = TableFormat::from_path(path)?;
        let content = fs::read_to_string(path).await?;

        match format {
            TableFormat::Csv => Self::parse_csv(&content),
            TableFormat::Json => Self::parse_json(path, &content),
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn load(&self, role: CollectionRole) -> GrouperResult<Collection> {
        let path = self.config.path_for(role);
        let (headers, records) = Self::read_table(path).await?;

        let primary_field = headers
            .first()
            .filter(|header| !header.trim().is_empty())
            .cloned()
            .ok_or_else(|| GrouperError::MissingPrimaryField {
                role,
                path: path.display().to_string(),
            })?;

        if records.is_empty() {
            return Err(GrouperError::EmptyCollection {
                role,
                path: path.display().to_string(),
            });
        }

        let grouping_field = match self.config.group_column_for(role) {
            Some(column) => {
                if !headers.iter().any(|header| header == column) {
                    return Err(GrouperError::config(format!(
                        "grouping column '{column}' not found in {}",
                        path.display()
                    )));
                }
                Some(column.to_string())
            }
            None => detect_grouping_field(&headers, &records, &self.config.group_keywords),
        };

        tracing::info!(
            "📥 Loaded {} {} from '{}' using primary column '{}'",
            records.len(),
            role,
            path.display(),
            primary_field
        );
        match &grouping_field {
            Some(column) => tracing::info!("🏫 Grouping column for {}: '{}'", role, column),
            None => tracing::warn!(
                "No college column detected for {} file. Grouping will be general unless both files have one.",
                role
            ),
        }

        Ok(Collection::new(primary_field, records).with_grouping_field(grouping_field))
    }
}
