//! Flattening associations into output rows

use shared::Record;

use super::partitioner::Association;

/// Namespace for fields copied from the head record
pub const HEAD_PREFIX: &str = "Team Head";
/// Namespace for fields copied from the member record
pub const MEMBER_PREFIX: &str = "Group Member";
/// Field name used for status text on whichever side is missing
pub const STATUS_FIELD: &str = "Status";

fn prefixed(prefix: &str, field: &str) -> String {
    format!("{prefix} - {field}")
}

/// Flatten one association into a single row.
///
/// Head fields come first, then member fields, each in source order. A
/// missing head is replaced by `Team Head - Status` in the head position;
/// a missing member is followed by `Group Member - Status`.
pub fn project(association: &Association<'_>) -> Record {
    let status = association
        .status
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let mut row = Record::new();

    match association.head {
        Some(head) => {
            for (field, value) in head.iter() {
                row.insert(prefixed(HEAD_PREFIX, field), value);
            }
        }
        None => {
            row.insert(prefixed(HEAD_PREFIX, STATUS_FIELD), status.clone());
        }
    }

    match association.member {
        Some(member) => {
            for (field, value) in member.iter() {
                row.insert(prefixed(MEMBER_PREFIX, field), value);
            }
        }
        None => {
            row.insert(prefixed(MEMBER_PREFIX, STATUS_FIELD), status);
        }
    }

    row
}

pub fn project_all(associations: &[Association<'_>]) -> Vec<Record> {
    associations.iter().map(project).collect()
}
