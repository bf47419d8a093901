//! Grouping of flat player records into counted aggregates.
//!
//! Every pass is pure: records are read, never modified, and each call
//! builds a fresh collection. Records whose grouping key is missing or blank
//! are left out of that grouping only.

use crate::data_fetcher::models::{
    Aggregate, ConferenceSummary, PlayerRecord, PositionSummary, SchoolSummary,
};
use crate::data_fetcher::names::{
    canonicalize, conference_abbreviation, locale_cmp, position_display_name,
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Records sharing one key, in encounter order
struct Group<'a> {
    key: String,
    members: Vec<&'a PlayerRecord>,
}

fn group_records<'a, K>(records: &'a [PlayerRecord], key_selector: K) -> Vec<Group<'a>>
where
    K: Fn(&PlayerRecord) -> Option<String>,
{
    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(key) = key_selector(record).filter(|k| !k.is_empty()) else {
            continue;
        };
        match index.get(&key) {
            Some(&position) => groups[position].members.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    members: vec![record],
                });
            }
        }
    }

    groups
}

fn build_aggregate<D>(group: &Group<'_>, display_name: &D) -> Aggregate
where
    D: Fn(&str) -> String,
{
    Aggregate {
        key: group.key.clone(),
        display_name: display_name(&group.key),
        count: group.members.len(),
    }
}

/// Groups `records` by the key `key_selector` derives from each one.
///
/// The first record with a given key creates its aggregate and later ones
/// increment the count. The result is ordered by display name using
/// [`locale_cmp`]; equal names keep encounter order.
pub fn aggregate<K, D>(records: &[PlayerRecord], key_selector: K, display_name: D) -> Vec<Aggregate>
where
    K: Fn(&PlayerRecord) -> Option<String>,
    D: Fn(&str) -> String,
{
    let mut aggregates: Vec<Aggregate> = group_records(records, key_selector)
        .iter()
        .map(|group| build_aggregate(group, &display_name))
        .collect();
    aggregates.sort_by(|a, b| locale_cmp(&a.display_name, &b.display_name));
    aggregates
}

fn school_key(record: &PlayerRecord) -> Option<String> {
    record.school_key().map(|k| k.trim().to_string())
}

fn conference_key(record: &PlayerRecord) -> Option<String> {
    record.conference_key().map(|k| k.trim().to_string())
}

fn position_key(record: &PlayerRecord) -> Option<String> {
    record.position_code().map(|k| k.trim().to_uppercase())
}

/// Schools keyed by raw slug, named through [`canonicalize`].
pub fn aggregate_schools(records: &[PlayerRecord]) -> Vec<SchoolSummary> {
    let mut schools: Vec<SchoolSummary> = group_records(records, school_key)
        .iter()
        .map(|group| SchoolSummary {
            aggregate: build_aggregate(group, &canonicalize),
            conference: group.members.iter().find_map(|r| conference_key(r)),
        })
        .collect();
    schools.sort_by(|a, b| locale_cmp(&a.aggregate.display_name, &b.aggregate.display_name));

    debug!("Aggregated {} records into {} schools", records.len(), schools.len());
    schools
}

/// Conferences keyed by trimmed name, with distinct school counts.
pub fn aggregate_conferences(records: &[PlayerRecord]) -> Vec<ConferenceSummary> {
    let mut conferences: Vec<ConferenceSummary> = group_records(records, conference_key)
        .iter()
        .map(|group| {
            let schools: HashSet<String> =
                group.members.iter().filter_map(|r| school_key(r)).collect();
            ConferenceSummary {
                aggregate: build_aggregate(group, &|name: &str| name.to_string()),
                distinct_school_count: schools.len(),
                abbreviation: conference_abbreviation(&group.key),
            }
        })
        .collect();
    conferences.sort_by(|a, b| locale_cmp(&a.aggregate.display_name, &b.aggregate.display_name));

    debug!(
        "Aggregated {} records into {} conferences",
        records.len(),
        conferences.len()
    );
    conferences
}

/// Positions keyed by upper-cased code, named through [`position_display_name`].
pub fn aggregate_positions(records: &[PlayerRecord]) -> Vec<PositionSummary> {
    let positions: Vec<PositionSummary> = aggregate(records, position_key, position_display_name)
        .into_iter()
        .map(|aggregate| PositionSummary { aggregate })
        .collect();

    debug!(
        "Aggregated {} records into {} positions",
        records.len(),
        positions.len()
    );
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::PlayerRecordBuilder;

    fn player(school: &str, conference: &str, position: &str) -> PlayerRecord {
        PlayerRecordBuilder::new()
            .school(school)
            .conference(conference)
            .position(position)
            .build()
    }

    #[test]
    fn test_counts_and_order() {
        let records = vec![
            player("ohio-st", "Big Ten", "G"),
            player("duke", "Atlantic Coast", "F"),
            player("ohio-st", "Big Ten", "C"),
        ];

        let schools = aggregate_schools(&records);
        let names: Vec<_> = schools
            .iter()
            .map(|s| (s.aggregate.display_name.as_str(), s.aggregate.count))
            .collect();
        assert_eq!(names, vec![("Duke", 1), ("Ohio State", 2)]);
    }

    #[test]
    fn test_missing_keys_are_excluded() {
        let records = vec![
            player("duke", "", "G"),
            player("", "Atlantic Coast", ""),
            PlayerRecord::default(),
        ];

        assert_eq!(aggregate_schools(&records).len(), 1);
        assert_eq!(aggregate_conferences(&records).len(), 1);
        assert_eq!(aggregate_positions(&records).len(), 1);
    }

    #[test]
    fn test_distinct_school_count() {
        let records = vec![
            player("duke", "Atlantic Coast", "G"),
            player("duke", "Atlantic Coast", "F"),
            player("virginia", "Atlantic Coast", "C"),
            player("", "Atlantic Coast", "C"),
        ];

        let conferences = aggregate_conferences(&records);
        assert_eq!(conferences.len(), 1);
        assert_eq!(conferences[0].aggregate.count, 4);
        assert_eq!(conferences[0].distinct_school_count, 2);
        assert_eq!(conferences[0].abbreviation, "ACC");
    }

    #[test]
    fn test_positions_are_uppercased() {
        let records = vec![player("a", "x", "g"), player("b", "x", "G ")];

        let positions = aggregate_positions(&records);
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].aggregate.key, "G");
        assert_eq!(positions[0].aggregate.display_name, "Guard");
        assert_eq!(positions[0].aggregate.count, 2);
    }

    #[test]
    fn test_school_takes_first_non_empty_conference() {
        let records = vec![
            player("gonzaga", "", "G"),
            player("gonzaga", "West Coast", "F"),
            player("gonzaga", "Other", "F"),
        ];

        let schools = aggregate_schools(&records);
        assert_eq!(schools[0].conference.as_deref(), Some("West Coast"));
    }

    #[test]
    fn test_equal_display_names_keep_encounter_order() {
        // Distinct slugs that canonicalize to the same name
        let records = vec![player("saint_louis", "x", "G"), player("saint-louis", "x", "G")];

        let schools = aggregate_schools(&records);
        let keys: Vec<_> = schools.iter().map(|s| s.aggregate.key.as_str()).collect();
        assert_eq!(keys, vec!["saint_louis", "saint-louis"]);
    }

    #[test]
    fn test_generic_aggregate_with_custom_key() {
        let records = vec![
            PlayerRecordBuilder::new().name("A").build(),
            PlayerRecordBuilder::new().name("B").build(),
            PlayerRecordBuilder::new().name("A").build(),
        ];

        let groups = aggregate(&records, |r| r.name().map(str::to_string), |k| k.to_lowercase());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].display_name, "a");
        assert_eq!(groups[0].count, 2);
    }
}
