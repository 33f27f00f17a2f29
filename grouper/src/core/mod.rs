//! Core business logic modules
//!
//! Pure, synchronous logic with no I/O dependencies. Given identical input
//! collections every function here produces identical output.

pub mod assignment;
pub mod detection;
pub mod normalizer;
pub mod partitioner;
pub mod projector;

pub use assignment::AssignmentLedger;
pub use detection::{detect_column, detect_grouping_field, DEFAULT_GROUP_KEYWORDS};
pub use normalizer::{normalize, GroupKey};
pub use partitioner::{partition, share_for, Association, Partition, Partitioner, Status};
pub use projector::{project, project_all};
