use cbb_insight::data_fetcher::models::{AggregateSet, PlayerRecord};
use cbb_insight::data_fetcher::names::locale_cmp;
use cbb_insight::data_fetcher::processors::{aggregate_conferences, aggregate_positions, aggregate_schools};
use cbb_insight::testing_utils::{PlayerRecordBuilder, PropertyTesting, TestDataBuilder};
use std::cmp::Ordering;

fn roster() -> Vec<PlayerRecord> {
    vec![
        TestDataBuilder::create_player("A", "ohio-st", "Big Ten", "G"),
        TestDataBuilder::create_player("B", "mount-st-marys", "Northeast", "f"),
        TestDataBuilder::create_player("C", "ohio-st", "Big Ten", "G"),
        TestDataBuilder::create_player("D", "michigan-st", "Big Ten", "C"),
        TestDataBuilder::create_player("E", "st-johns-ny", "Big East", " g "),
        // Excluded from school grouping only
        PlayerRecordBuilder::new().name("F").conference("Big East").position("F").build(),
        // Excluded everywhere
        PlayerRecordBuilder::new().name("G").build(),
    ]
}

#[test]
fn test_counts_add_up_to_keyed_records() {
    let players = roster();
    let set = AggregateSet::from_records(&players);
    PropertyTesting::validate_aggregate_counts(&players, &set).unwrap();
    PropertyTesting::validate_distinct_schools(&players, &set).unwrap();
}

#[test]
fn test_school_display_names_and_order() {
    let schools = aggregate_schools(&roster());
    let names: Vec<_> = schools
        .iter()
        .map(|s| (s.aggregate.display_name.as_str(), s.aggregate.count))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Michigan State", 1),
            ("Mount St. Marys", 1),
            ("Ohio State", 2),
            ("St. Johns NY", 1),
        ]
    );
}

#[test]
fn test_conference_distinct_schools_do_not_double_count() {
    let conferences = aggregate_conferences(&roster());
    let big_ten = conferences
        .iter()
        .find(|c| c.aggregate.key == "Big Ten")
        .unwrap();
    assert_eq!(big_ten.aggregate.count, 3);
    assert_eq!(big_ten.distinct_school_count, 2);
    assert_eq!(big_ten.abbreviation, "Big Ten");

    let big_east = conferences
        .iter()
        .find(|c| c.aggregate.key == "Big East")
        .unwrap();
    // The school-less player still counts toward the conference
    assert_eq!(big_east.aggregate.count, 2);
    assert_eq!(big_east.distinct_school_count, 1);
}

#[test]
fn test_positions_are_uppercased_before_grouping() {
    let positions = aggregate_positions(&roster());
    let guards = positions
        .iter()
        .find(|p| p.aggregate.key == "G")
        .unwrap();
    assert_eq!(guards.aggregate.count, 3);
    assert_eq!(guards.aggregate.display_name, "Guard");
}

#[test]
fn test_output_is_sorted_by_display_name() {
    let players = TestDataBuilder::create_multiple_players(40);
    let set = AggregateSet::from_records(&players);
    for pair in set.schools.windows(2) {
        assert_ne!(
            locale_cmp(&pair[0].aggregate.display_name, &pair[1].aggregate.display_name),
            Ordering::Greater
        );
    }
    for pair in set.positions.windows(2) {
        assert_ne!(
            locale_cmp(&pair[0].aggregate.display_name, &pair[1].aggregate.display_name),
            Ordering::Greater
        );
    }
}

#[test]
fn test_identical_input_gives_identical_output() {
    let players = roster();
    let first = AggregateSet::from_records(&players);
    let second = AggregateSet::from_records(&players);
    let keys = |set: &AggregateSet| -> Vec<String> {
        set.schools.iter().map(|s| s.aggregate.key.clone()).collect()
    };
    assert_eq!(keys(&first), keys(&second));
}

#[test]
fn test_empty_input() {
    let set = AggregateSet::from_records(&[]);
    assert!(set.is_empty());
}
