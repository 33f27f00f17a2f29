//! Run configuration
//!
//! Built by the binary from command-line arguments; tests build it directly.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use shared::{CollectionRole, SharedError, SharedResult, TrackingMode};

use crate::core::DEFAULT_GROUP_KEYWORDS;

/// Tabular file formats understood by the file-backed source and sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableFormat {
    #[default]
    Csv,
    Json,
}

impl TableFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> SharedResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| SharedError::UnsupportedFormat {
                path: path.display().to_string(),
            })
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Csv => write!(f, "csv"),
            TableFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for TableFormat {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            _ => Err(SharedError::InvalidConfig {
                field: "format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Where and how to load the two input tables
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub people_path: PathBuf,
    pub heads_path: PathBuf,
    /// Explicit grouping column for the people table, bypassing detection
    pub people_group_column: Option<String>,
    /// Explicit grouping column for the heads table, bypassing detection
    pub heads_group_column: Option<String>,
    pub group_keywords: Vec<String>,
}

impl SourceConfig {
    pub fn new(people_path: impl Into<PathBuf>, heads_path: impl Into<PathBuf>) -> Self {
        Self {
            people_path: people_path.into(),
            heads_path: heads_path.into(),
            people_group_column: None,
            heads_group_column: None,
            group_keywords: DEFAULT_GROUP_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn with_group_columns(mut self, people: Option<String>, heads: Option<String>) -> Self {
        self.people_group_column = people;
        self.heads_group_column = heads;
        self
    }

    /// Replace the detection keywords. An empty list keeps the defaults.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        if !keywords.is_empty() {
            self.group_keywords = keywords;
        }
        self
    }

    pub fn path_for(&self, role: CollectionRole) -> &Path {
        match role {
            CollectionRole::People => &self.people_path,
            CollectionRole::Heads => &self.heads_path,
        }
    }

    pub fn group_column_for(&self, role: CollectionRole) -> Option<&str> {
        match role {
            CollectionRole::People => self.people_group_column.as_deref(),
            CollectionRole::Heads => self.heads_group_column.as_deref(),
        }
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.group_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(SharedError::InvalidConfig {
                field: "group_keywords".to_string(),
                value: self.group_keywords.join(","),
            });
        }

        for (field, column) in [
            ("people_group_column", &self.people_group_column),
            ("heads_group_column", &self.heads_group_column),
        ] {
            if column.as_deref().is_some_and(|c| c.trim().is_empty()) {
                return Err(SharedError::InvalidConfig {
                    field: field.to_string(),
                    value: String::new(),
                });
            }
        }

        for role in [CollectionRole::People, CollectionRole::Heads] {
            TableFormat::from_path(self.path_for(role))?;
        }
        Ok(())
    }
}

/// Where to write the grouped table and the optional run summary
#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub output_path: PathBuf,
    /// Explicit output format; inferred from `output_path` when unset
    pub format: Option<TableFormat>,
    pub summary_path: Option<PathBuf>,
}

impl SinkConfig {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            format: None,
            summary_path: None,
        }
    }

    pub fn with_format(mut self, format: Option<TableFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn with_summary(mut self, summary_path: Option<PathBuf>) -> Self {
        self.summary_path = summary_path;
        self
    }

    pub fn resolved_format(&self) -> SharedResult<TableFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => TableFormat::from_path(&self.output_path),
        }
    }

    pub fn validate(&self) -> SharedResult<()> {
        self.resolved_format().map(|_| ())
    }
}

/// Settings for the partitioning step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrouperConfig {
    pub tracking: TrackingMode,
    /// When false, grouping fields are ignored and the uniform split is used
    pub grouping_enabled: bool,
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            tracking: TrackingMode::Identifier,
            grouping_enabled: true,
        }
    }
}
