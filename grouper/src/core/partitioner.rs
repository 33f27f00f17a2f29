//! Distribution of people across team heads
//!
//! Two strategies, picked per run:
//! - uniform: contiguous, order-preserving split of all people over all heads,
//!   with the remainder going to the earliest heads;
//! - grouped: the same split applied independently inside every grouping key
//!   shared by heads and people, followed by a round-robin pass for anyone the
//!   grouped pass could not place.
//!
//! Everything here is deterministic: records are visited in collection order
//! and grouping keys in the order they first appear among the heads.

use std::fmt;

use indexmap::IndexMap;
use shared::{Collection, DistributionMode, Record, TrackingMode};

use super::assignment::AssignmentLedger;
use super::normalizer::{normalize, GroupKey};
use crate::error::{GrouperError, GrouperResult};

/// Why an association is missing its head or its member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Uniform split gave this head nothing
    NoMembers,
    /// Grouped split gave this head nothing from its own group
    NoMembersFromGroup(GroupKey),
    /// Nobody in the people table shares this head's group
    NoGroupMembers(GroupKey),
    /// Head has no usable grouping value
    NoGroupMatch,
    /// Uniform split ran out of heads
    NoMoreHeads,
    /// Round-robin pass had no head to offer
    NoAvailableHead,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NoMembers => write!(f, "No members assigned"),
            Status::NoMembersFromGroup(key) => write!(f, "No members assigned from {key}"),
            Status::NoGroupMembers(key) => write!(f, "No members from {key} assigned to this head"),
            Status::NoGroupMatch => write!(f, "No members assigned (No college match or college info)"),
            Status::NoMoreHeads => write!(f, "UNASSIGNED (No more heads available)"),
            Status::NoAvailableHead => {
                write!(f, "UNASSIGNED (No matching college head or no available head)")
            }
        }
    }
}

/// One result row before projection: a head, at most one member, and a status
/// whenever either side is missing
#[derive(Debug, Clone, PartialEq)]
pub struct Association<'a> {
    pub head: Option<&'a Record>,
    pub member: Option<&'a Record>,
    pub status: Option<Status>,
}

impl<'a> Association<'a> {
    pub fn paired(head: &'a Record, member: &'a Record) -> Self {
        Self {
            head: Some(head),
            member: Some(member),
            status: None,
        }
    }

    /// Head that received nobody
    pub fn unfilled(head: &'a Record, status: Status) -> Self {
        Self {
            head: Some(head),
            member: None,
            status: Some(status),
        }
    }

    /// Person that could not be given a head
    pub fn unassigned(member: &'a Record, status: Status) -> Self {
        Self {
            head: None,
            member: Some(member),
            status: Some(status),
        }
    }

    pub fn is_paired(&self) -> bool {
        self.head.is_some() && self.member.is_some()
    }
}

/// Output of one partition run
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    pub mode: DistributionMode,
    pub associations: Vec<Association<'a>>,
    /// People the grouped pass handed to round-robin (always 0 for uniform)
    pub unplaced_after_grouping: usize,
}

impl<'a> Partition<'a> {
    pub fn paired_count(&self) -> usize {
        self.associations.iter().filter(|a| a.is_paired()).count()
    }

    pub fn status_count(&self) -> usize {
        self.associations.len() - self.paired_count()
    }

    /// Members paired with `head`, in output order
    pub fn members_of(&self, head: &Record) -> Vec<&'a Record> {
        self.associations
            .iter()
            .filter(|a| a.head.is_some_and(|h| std::ptr::eq(h, head)))
            .filter_map(|a| a.member)
            .collect()
    }
}

/// Number of people the head at `slot` receives when `people` are split over
/// `heads` heads. Earlier slots absorb the remainder. `heads` must be non-zero.
pub fn share_for(slot: usize, heads: usize, people: usize) -> usize {
    let base = people / heads;
    let remainder = people % heads;
    if slot < remainder {
        base + 1
    } else {
        base
    }
}

type Bucket<'a> = Vec<(usize, &'a Record)>;

/// Group records by normalized key, skipping records without one.
/// Keys keep first-seen order; records keep collection order.
fn bucket_by_key(collection: &Collection) -> IndexMap<GroupKey, Bucket<'_>> {
    let mut buckets: IndexMap<GroupKey, Bucket<'_>> = IndexMap::new();
    for (index, record) in collection.records().iter().enumerate() {
        if let Some(key) = collection.grouping_value(record).and_then(normalize) {
            buckets.entry(key).or_default().push((index, record));
        }
    }
    buckets
}

/// Splits people across heads for a single run.
///
/// `partition` consumes the partitioner, so assignment state can never leak
/// from one run into the next.
#[derive(Debug, Default)]
pub struct Partitioner {
    tracking: TrackingMode,
}

impl Partitioner {
    pub fn new(tracking: TrackingMode) -> Self {
        Self { tracking }
    }

    pub fn tracking(&self) -> TrackingMode {
        self.tracking
    }

    /// Distribute `people` over `heads`.
    ///
    /// Grouped distribution is used only when both collections have a
    /// grouping field; otherwise the uniform split applies. Fails only when
    /// there are no heads.
    pub fn partition<'a>(self, heads: &'a Collection, people: &'a Collection) -> GrouperResult<Partition<'a>> {
        if heads.is_empty() {
            return Err(GrouperError::no_heads());
        }

        let grouped = heads.grouping_field().is_some() && people.grouping_field().is_some();
        tracing::debug!(
            heads = heads.len(),
            people = people.len(),
            grouped,
            tracking = %self.tracking,
            "partitioning"
        );

        if grouped {
            Ok(self.grouped(heads, people))
        } else {
            Ok(Self::uniform(heads, people))
        }
    }

    fn uniform<'a>(heads: &'a Collection, people: &'a Collection) -> Partition<'a> {
        let head_count = heads.len();
        let mut associations = Vec::with_capacity(people.len().max(head_count));
        let mut remaining = people.records().iter();

        for (slot, head) in heads.records().iter().enumerate() {
            let share = share_for(slot, head_count, people.len());
            if share == 0 {
                associations.push(Association::unfilled(head, Status::NoMembers));
                continue;
            }
            associations.extend(remaining.by_ref().take(share).map(|member| Association::paired(head, member)));
        }

        // Only reachable with zero heads
        associations.extend(remaining.map(|member| Association::unassigned(member, Status::NoMoreHeads)));

        Partition {
            mode: DistributionMode::Uniform,
            associations,
            unplaced_after_grouping: 0,
        }
    }

    fn grouped<'a>(&self, heads: &'a Collection, people: &'a Collection) -> Partition<'a> {
        let mut ledger = AssignmentLedger::new(self.tracking);
        let mut handled = vec![false; heads.len()];
        let mut associations = Vec::with_capacity(people.len() + heads.len());

        let people_by_key = bucket_by_key(people);
        let heads_by_key = bucket_by_key(heads);

        for (key, heads_in_key) in &heads_by_key {
            let Some(people_in_key) = people_by_key.get(key) else {
                for &(head_index, head) in heads_in_key {
                    handled[head_index] = true;
                    associations.push(Association::unfilled(head, Status::NoGroupMembers(key.clone())));
                }
                continue;
            };

            let mut remaining = people_in_key.iter();
            for (slot, &(head_index, head)) in heads_in_key.iter().enumerate() {
                handled[head_index] = true;

                let share = share_for(slot, heads_in_key.len(), people_in_key.len());
                if share == 0 {
                    associations.push(Association::unfilled(head, Status::NoMembersFromGroup(key.clone())));
                    continue;
                }

                for &(person_index, member) in remaining.by_ref().take(share) {
                    if ledger.claim(person_index, people.identifier(member)) {
                        associations.push(Association::paired(head, member));
                    } else {
                        tracing::trace!(group = %key, person_index, "slot consumed without a trackable person");
                    }
                }
            }
        }

        for (head, _) in heads.records().iter().zip(&handled).filter(|(_, done)| !**done) {
            associations.push(Association::unfilled(head, Status::NoGroupMatch));
        }

        let unplaced: Vec<&Record> = people
            .records()
            .iter()
            .enumerate()
            .filter(|(index, person)| !ledger.is_assigned(*index, people.identifier(person)))
            .map(|(_, person)| person)
            .collect();

        tracing::debug!(
            groups = heads_by_key.len(),
            placed = ledger.assigned_count(),
            unplaced = unplaced.len(),
            "grouped pass finished"
        );

        if !unplaced.is_empty() {
            let mut candidates: Vec<&Record> = heads
                .records()
                .iter()
                .zip(&handled)
                .filter(|(_, done)| !**done)
                .map(|(head, _)| head)
                .collect();
            if candidates.is_empty() {
                candidates = heads.records().iter().collect();
            }

            if candidates.is_empty() {
                associations.extend(
                    unplaced
                        .iter()
                        .map(|&member| Association::unassigned(member, Status::NoAvailableHead)),
                );
            } else {
                associations.extend(
                    unplaced
                        .iter()
                        .zip(candidates.iter().cycle())
                        .map(|(&member, &head)| Association::paired(head, member)),
                );
            }
        }

        Partition {
            mode: DistributionMode::Grouped,
            associations,
            unplaced_after_grouping: unplaced.len(),
        }
    }
}

/// Partition with the default (identifier) tracking
pub fn partition<'a>(heads: &'a Collection, people: &'a Collection) -> GrouperResult<Partition<'a>> {
    Partitioner::default().partition(heads, people)
}
