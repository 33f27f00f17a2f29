//! Shared types for the team grouping tool
//!
//! Holds the data model passed between the record source, the partitioning
//! core and the result sink, plus logging and error types used by every crate.

pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

pub use errors::*;
pub use report::RunSummary;
pub use types::*;
