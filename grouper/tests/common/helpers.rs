//! Test helpers and builder patterns for grouper tests

use std::sync::{Arc, Mutex};

use grouper::{Grouper, GrouperConfig, MockRecordSource, MockResultSink, Partition};
use shared::{Collection, CollectionRole, Record, RunSummary, TrackingMode};

use super::fixtures::TestFixtures;

/// Builder for a `Grouper` over mocked I/O, with recording sinks by default
pub struct GrouperBuilder {
    people: Collection,
    heads: Collection,
    config: GrouperConfig,
    rows: Arc<Mutex<Vec<Record>>>,
    summaries: Arc<Mutex<Vec<RunSummary>>>,
}

impl GrouperBuilder {
    pub fn new() -> Self {
        Self {
            people: TestFixtures::ungrouped(TestFixtures::named("P", 4)),
            heads: TestFixtures::ungrouped(TestFixtures::named("H", 2)),
            config: GrouperConfig::default(),
            rows: Arc::new(Mutex::new(Vec::new())),
            summaries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_people(mut self, people: Collection) -> Self {
        self.people = people;
        self
    }

    pub fn with_heads(mut self, heads: Collection) -> Self {
        self.heads = heads;
        self
    }

    pub fn with_tracking(mut self, tracking: TrackingMode) -> Self {
        self.config.tracking = tracking;
        self
    }

    pub fn without_grouping(mut self) -> Self {
        self.config.grouping_enabled = false;
        self
    }

    /// Handle onto the rows the sink receives
    pub fn rows(&self) -> Arc<Mutex<Vec<Record>>> {
        Arc::clone(&self.rows)
    }

    pub fn summaries(&self) -> Arc<Mutex<Vec<RunSummary>>> {
        Arc::clone(&self.summaries)
    }

    pub fn build(self) -> Grouper<MockRecordSource, MockResultSink> {
        let mut source = MockRecordSource::new();
        let people = self.people;
        let heads = self.heads;
        source.expect_load().returning(move |role| match role {
            CollectionRole::People => Ok(people.clone()),
            CollectionRole::Heads => Ok(heads.clone()),
        });

        let mut sink = MockResultSink::new();
        let rows = self.rows;
        sink.expect_write_rows()
            .returning(move |written| {
                rows.lock().unwrap().extend_from_slice(written);
                Ok(())
            })
            .times(0..);
        let summaries = self.summaries;
        sink.expect_write_summary()
            .returning(move |summary| {
                summaries.lock().unwrap().push(summary.clone());
                Ok(())
            })
            .times(0..);

        Grouper::new(source, sink, self.config)
    }
}

impl Default for GrouperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Common assertions over partitions and rows
pub struct TestHelpers;

impl TestHelpers {
    /// Primary value of every member paired with `head`
    pub fn member_names(partition: &Partition<'_>, head: &Record) -> Vec<String> {
        partition
            .members_of(head)
            .iter()
            .filter_map(|member| member.get(TestFixtures::PRIMARY_FIELD))
            .map(str::to_string)
            .collect()
    }

    /// Member group sizes per head, in head order
    pub fn shares(partition: &Partition<'_>, heads: &Collection) -> Vec<usize> {
        heads
            .records()
            .iter()
            .map(|head| partition.members_of(head).len())
            .collect()
    }

    /// Each person appears as a member exactly once
    pub fn assert_conserved(partition: &Partition<'_>, people: &Collection) {
        for person in people.records() {
            let appearances = partition
                .associations
                .iter()
                .filter(|a| a.member.is_some_and(|m| std::ptr::eq(m, person)))
                .count();
            assert_eq!(appearances, 1, "person {:?} placed {} times", person, appearances);
        }
    }

    /// Every head appears in at least one row
    pub fn assert_no_head_lost(partition: &Partition<'_>, heads: &Collection) {
        for head in heads.records() {
            assert!(
                partition
                    .associations
                    .iter()
                    .any(|a| a.head.is_some_and(|h| std::ptr::eq(h, head))),
                "head {:?} missing from output",
                head
            );
        }
    }
}
