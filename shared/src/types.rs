//! Core shared types and identifiers

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::SharedError;

/// Unique identifier for a single grouping run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, SharedError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of tabular data: field name to string value, in source column order.
///
/// Equality ignores field order; compare `iter()` output when order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a field. Overwriting keeps the field's original position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Field names in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// `(field, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Ordered, immutable set of records loaded from one source table
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    records: Vec<Record>,
    primary_field: String,
    grouping_field: Option<String>,
}

impl Collection {
    pub fn new(primary_field: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            records,
            primary_field: primary_field.into(),
            grouping_field: None,
        }
    }

    /// Set the grouping field. A blank name means "no grouping field".
    pub fn with_grouping_field(mut self, field: Option<String>) -> Self {
        self.grouping_field = field.filter(|f| !f.trim().is_empty());
        self
    }

    pub fn without_grouping(mut self) -> Self {
        self.grouping_field = None;
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn primary_field(&self) -> &str {
        &self.primary_field
    }

    pub fn grouping_field(&self) -> Option<&str> {
        self.grouping_field.as_deref()
    }

    /// Identifier of `record` within this collection; missing or blank values are absent
    pub fn identifier<'r>(&self, record: &'r Record) -> Option<&'r str> {
        record
            .get(&self.primary_field)
            .filter(|value| !value.trim().is_empty())
    }

    /// Raw grouping value of `record`, if this collection has a grouping field
    pub fn grouping_value<'r>(&self, record: &'r Record) -> Option<&'r str> {
        self.grouping_field
            .as_deref()
            .and_then(|field| record.get(field))
    }
}

/// Which input table a collection was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionRole {
    People,
    Heads,
}

impl fmt::Display for CollectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionRole::People => write!(f, "People"),
            CollectionRole::Heads => write!(f, "Team Heads"),
        }
    }
}

/// How people were spread across heads in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionMode {
    /// Contiguous even split over all heads
    Uniform,
    /// Per-grouping-key split, then round-robin for the rest
    Grouped,
}

impl fmt::Display for DistributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionMode::Uniform => write!(f, "uniform"),
            DistributionMode::Grouped => write!(f, "grouped"),
        }
    }
}

/// How the partitioner remembers which people it already placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    /// Keyed by the person's primary-field value; absent identifiers are never recorded
    #[default]
    Identifier,
    /// Keyed by the person's position in the people collection
    Position,
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingMode::Identifier => write!(f, "identifier"),
            TrackingMode::Position => write!(f, "position"),
        }
    }
}

impl FromStr for TrackingMode {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "identifier" | "id" => Ok(TrackingMode::Identifier),
            "position" | "index" => Ok(TrackingMode::Position),
            _ => Err(SharedError::InvalidConfig {
                field: "tracking".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, college: &str) -> Record {
        [("Name", name), ("College", college)].into_iter().collect()
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut record = Record::new();
        record.insert("Zeta", "1");
        record.insert("Alpha", "2");
        record.insert("Mid", "3");
        record.insert("Zeta", "4");

        let fields: Vec<&str> = record.fields().collect();
        assert_eq!(fields, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(record.get("Zeta"), Some("4"));
    }

    #[test]
    fn test_identifier_treats_blank_as_absent() {
        let collection = Collection::new("Name", vec![person("Ada", "X"), person("  ", "X")]);
        let missing: Record = [("College", "X")].into_iter().collect();

        assert_eq!(collection.identifier(&collection.records()[0]), Some("Ada"));
        assert_eq!(collection.identifier(&collection.records()[1]), None);
        assert_eq!(collection.identifier(&missing), None);
    }

    #[test]
    fn test_grouping_field_blank_is_none() {
        let collection = Collection::new("Name", vec![]).with_grouping_field(Some(" ".to_string()));
        assert_eq!(collection.grouping_field(), None);

        let collection = collection.with_grouping_field(Some("College".to_string()));
        assert_eq!(collection.grouping_field(), Some("College"));
        assert_eq!(collection.without_grouping().grouping_field(), None);
    }

    #[test]
    fn test_grouping_value_lookup() {
        let collection = Collection::new("Name", vec![person("Ada", "Trinity")])
            .with_grouping_field(Some("College".to_string()));
        assert_eq!(collection.grouping_value(&collection.records()[0]), Some("Trinity"));

        let ungrouped = Collection::new("Name", vec![person("Ada", "Trinity")]);
        assert_eq!(ungrouped.grouping_value(&ungrouped.records()[0]), None);
    }

    #[test]
    fn test_tracking_mode_parsing() {
        assert_eq!("identifier".parse::<TrackingMode>().unwrap(), TrackingMode::Identifier);
        assert_eq!("Position".parse::<TrackingMode>().unwrap(), TrackingMode::Position);
        assert!("random".parse::<TrackingMode>().is_err());
        assert_eq!(TrackingMode::default(), TrackingMode::Identifier);
    }

    #[test]
    fn test_run_id_round_trip() {
        let id = RunId::new();
        let parsed = RunId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(RunId::from_string("not-a-uuid").is_err());
    }
}
