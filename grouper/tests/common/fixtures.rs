//! Test fixtures and data for grouper tests

use shared::{Collection, Record};

/// Standard test data
pub struct TestFixtures;

impl TestFixtures {
    pub const PRIMARY_FIELD: &'static str = "Name";
    pub const GROUP_FIELD: &'static str = "College";

    /// Single-field records named `{prefix}1..={count}`
    pub fn named(prefix: &str, count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| [(Self::PRIMARY_FIELD, format!("{prefix}{i}"))].into_iter().collect())
            .collect()
    }

    /// Records carrying a name and a college value each
    pub fn with_colleges(entries: &[(&str, &str)]) -> Vec<Record> {
        entries
            .iter()
            .map(|(name, college)| {
                [(Self::PRIMARY_FIELD, *name), (Self::GROUP_FIELD, *college)]
                    .into_iter()
                    .collect()
            })
            .collect()
    }

    pub fn ungrouped(records: Vec<Record>) -> Collection {
        Collection::new(Self::PRIMARY_FIELD, records)
    }

    pub fn grouped(records: Vec<Record>) -> Collection {
        Collection::new(Self::PRIMARY_FIELD, records).with_grouping_field(Some(Self::GROUP_FIELD.to_string()))
    }

    /// Two heads for MIT, one for Stanford
    pub fn college_heads() -> Collection {
        Self::grouped(Self::with_colleges(&[("H1", "MIT"), ("H2", "mit "), ("H3", "Stanford")]))
    }

    /// Three MIT people, one Stanford, one Yale
    pub fn college_people() -> Collection {
        Self::grouped(Self::with_colleges(&[
            ("P1", "MIT"),
            ("P2", "MIT"),
            ("P3", "Stanford"),
            ("P4", "mit"),
            ("P5", "Yale"),
        ]))
    }

    pub const PEOPLE_CSV: &'static str = "Name,College,Year\n\
A,MIT,1\n\
B,Stanford,2\n\
C,MIT,3\n\
D,,4\n";

    pub const HEADS_CSV: &'static str = "Head,College\n\
H1,MIT\n\
H2,Stanford\n\
H3,Harvard\n";
}
