//! Team grouping library
//!
//! Assigns people to team heads, either evenly across all heads or, when both
//! tables carry a college-like column, within each college first. The
//! partitioning core is pure; reading and writing tables goes through the
//! injectable `RecordSource` and `ResultSink` services.

pub mod config;
pub mod core;
pub mod error;
pub mod grouper;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::{GrouperConfig, SinkConfig, SourceConfig, TableFormat};
pub use crate::core::{partition, project, project_all, Association, Partition, Partitioner, Status};
pub use error::{GrouperError, GrouperResult};
pub use grouper::Grouper;
pub use traits::{MockRecordSource, MockResultSink, RecordSource, ResultSink};
