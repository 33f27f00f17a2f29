//! Service implementations
//!
//! File-backed implementations of the record source and result sink traits.

pub mod file_sink;
pub mod file_source;

#[cfg(test)]
mod tests;

pub use file_sink::FileResultSink;
pub use file_source::FileRecordSource;
