use crate::data_fetcher::models::{AggregateSet, PlayerRecord, Stat};
use std::collections::HashSet;

/// Builder for player records in tests
#[derive(Debug, Clone, Default)]
pub struct PlayerRecordBuilder {
    record: PlayerRecord,
}

impl PlayerRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.player_name = Some(name.to_string());
        self
    }

    pub fn school(mut self, school: &str) -> Self {
        self.record.school_name = Some(school.to_string());
        self
    }

    pub fn conference(mut self, conference: &str) -> Self {
        self.record.conference = Some(conference.to_string());
        self
    }

    pub fn position(mut self, position: &str) -> Self {
        self.record.position = Some(position.to_string());
        self
    }

    pub fn points(mut self, points: f64) -> Self {
        self.record.pts = Stat::Present(points);
        self
    }

    pub fn rebounds(mut self, rebounds: f64) -> Self {
        self.record.trb = Stat::Present(rebounds);
        self
    }

    pub fn assists(mut self, assists: f64) -> Self {
        self.record.ast = Stat::Present(assists);
        self
    }

    pub fn games_played(mut self, games: f64) -> Self {
        self.record.games_played = Stat::Present(games);
        self
    }

    pub fn build(self) -> PlayerRecord {
        self.record
    }
}

/// Test utilities for creating mock data sets
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a fully populated player
    pub fn create_player(name: &str, school: &str, conference: &str, position: &str) -> PlayerRecord {
        PlayerRecordBuilder::new()
            .name(name)
            .school(school)
            .conference(conference)
            .position(position)
            .games_played(30.0)
            .points(10.0)
            .build()
    }

    /// Creates `count` players named `Player 0..count`, cycling through a
    /// small set of schools, conferences and positions.
    pub fn create_multiple_players(count: usize) -> Vec<PlayerRecord> {
        const SCHOOLS: [(&str, &str); 4] = [
            ("duke", "Atlantic Coast"),
            ("north-carolina", "Atlantic Coast"),
            ("ohio-st", "Big Ten"),
            ("gonzaga", "West Coast"),
        ];
        const POSITIONS: [&str; 3] = ["G", "F", "C"];

        (0..count)
            .map(|i| {
                let (school, conference) = SCHOOLS[i % SCHOOLS.len()];
                PlayerRecordBuilder::new()
                    .name(&format!("Player {i}"))
                    .school(school)
                    .conference(conference)
                    .position(POSITIONS[i % POSITIONS.len()])
                    .points(i as f64)
                    .build()
            })
            .collect()
    }
}

/// Invariant checks shared by unit and integration tests
pub struct PropertyTesting;

impl PropertyTesting {
    /// Checks that aggregate counts add up to the keyed records
    pub fn validate_aggregate_counts(
        records: &[PlayerRecord],
        set: &AggregateSet,
    ) -> Result<(), String> {
        let keyed_schools = records.iter().filter(|r| r.school_key().is_some()).count();
        let school_total: usize = set.schools.iter().map(|s| s.aggregate.count).sum();
        if school_total != keyed_schools {
            return Err(format!(
                "School counts sum to {school_total}, expected {keyed_schools}"
            ));
        }

        let keyed_conferences = records
            .iter()
            .filter(|r| r.conference_key().is_some())
            .count();
        let conference_total: usize = set.conferences.iter().map(|c| c.aggregate.count).sum();
        if conference_total != keyed_conferences {
            return Err(format!(
                "Conference counts sum to {conference_total}, expected {keyed_conferences}"
            ));
        }

        let keyed_positions = records.iter().filter(|r| r.position_code().is_some()).count();
        let position_total: usize = set.positions.iter().map(|p| p.aggregate.count).sum();
        if position_total != keyed_positions {
            return Err(format!(
                "Position counts sum to {position_total}, expected {keyed_positions}"
            ));
        }

        Ok(())
    }

    /// Checks every conference's distinct school count against the records
    pub fn validate_distinct_schools(
        records: &[PlayerRecord],
        set: &AggregateSet,
    ) -> Result<(), String> {
        for conference in &set.conferences {
            let expected: HashSet<&str> = records
                .iter()
                .filter(|r| r.conference_key().map(str::trim) == Some(conference.aggregate.key.as_str()))
                .filter_map(|r| r.school_key().map(str::trim))
                .collect();
            if expected.len() != conference.distinct_school_count {
                return Err(format!(
                    "Conference '{}' has {} distinct schools, expected {}",
                    conference.aggregate.key,
                    conference.distinct_school_count,
                    expected.len()
                ));
            }
        }
        Ok(())
    }
}
