use super::players::PlayerRecord;
use crate::data_fetcher::processors::aggregation;
use serde::Serialize;

/// One group of player records sharing a key.
///
/// Derived from a fetched dataset and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    /// Raw grouping value as it appears on the records
    pub key: String,
    pub display_name: String,
    /// Number of records whose key equals `key`
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolSummary {
    #[serde(flatten)]
    pub aggregate: Aggregate,
    /// First non-empty conference seen for the school
    pub conference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConferenceSummary {
    #[serde(flatten)]
    pub aggregate: Aggregate,
    /// Distinct non-empty school keys among the conference's records
    pub distinct_school_count: usize,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionSummary {
    #[serde(flatten)]
    pub aggregate: Aggregate,
}

/// Every aggregate collection derived from one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateSet {
    pub schools: Vec<SchoolSummary>,
    pub conferences: Vec<ConferenceSummary>,
    pub positions: Vec<PositionSummary>,
}

impl AggregateSet {
    /// Runs every aggregation pass over `records`.
    pub fn from_records(records: &[PlayerRecord]) -> Self {
        Self {
            schools: aggregation::aggregate_schools(records),
            conferences: aggregation::aggregate_conferences(records),
            positions: aggregation::aggregate_positions(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty() && self.conferences.is_empty() && self.positions.is_empty()
    }
}
