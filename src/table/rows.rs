//! Table bindings for player records and the aggregate collections.

use super::{CellValue, TableRow};
use crate::data_fetcher::models::{
    ConferenceSummary, PlayerRecord, PositionSummary, SchoolSummary, Stat, StatField,
};
use crate::data_fetcher::names::{MISSING_NAME, canonicalize};
use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

fn count_cell<'a>(count: usize) -> CellValue<'a> {
    CellValue::Number(Stat::Present(count as f64))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    Name,
    School,
    Position,
    Conference,
    Stat(StatField),
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerField::Name => write!(f, "name"),
            PlayerField::School => write!(f, "school"),
            PlayerField::Position => write!(f, "pos"),
            PlayerField::Conference => write!(f, "conf"),
            PlayerField::Stat(stat) => write!(f, "{}", stat.label()),
        }
    }
}

impl FromStr for PlayerField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "player" => Ok(PlayerField::Name),
            "school" => Ok(PlayerField::School),
            "pos" | "position" => Ok(PlayerField::Position),
            "conf" | "conference" => Ok(PlayerField::Conference),
            other => other
                .parse::<StatField>()
                .map(PlayerField::Stat)
                .map_err(|_| AppError::unknown_sort_field(s, "players")),
        }
    }
}

impl TableRow for PlayerRecord {
    type Field = PlayerField;

    fn columns() -> Vec<PlayerField> {
        let mut columns = vec![
            PlayerField::Name,
            PlayerField::School,
            PlayerField::Position,
            PlayerField::Conference,
        ];
        columns.extend(
            [
                StatField::GamesPlayed,
                StatField::MinutesPlayed,
                StatField::Points,
                StatField::TotalRebounds,
                StatField::Assists,
                StatField::Steals,
                StatField::Blocks,
                StatField::FieldGoalPercentage,
                StatField::ThreePointPercentage,
                StatField::FreeThrowPercentage,
            ]
            .map(PlayerField::Stat),
        );
        columns
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            self.player_name.as_deref(),
            self.school_name.as_deref(),
            self.position.as_deref(),
            self.conference.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn cell(&self, field: PlayerField) -> CellValue<'_> {
        match field {
            PlayerField::Name => CellValue::Text(self.player_name.as_deref()),
            // Sorted and searched by raw slug
            PlayerField::School => CellValue::Text(self.school_name.as_deref()),
            PlayerField::Position => CellValue::Text(self.position.as_deref()),
            PlayerField::Conference => CellValue::Text(self.conference.as_deref()),
            PlayerField::Stat(stat) => CellValue::Number(self.stat(stat)),
        }
    }

    fn display(&self, field: PlayerField) -> String {
        match field {
            PlayerField::School => self
                .school_key()
                .map(canonicalize)
                .unwrap_or_else(|| MISSING_NAME.to_string()),
            _ => self.cell(field).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolField {
    Name,
    Players,
    Conference,
}

impl fmt::Display for SchoolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SchoolField::Name => "school",
            SchoolField::Players => "players",
            SchoolField::Conference => "conf",
        };
        write!(f, "{label}")
    }
}

impl FromStr for SchoolField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "school" => Ok(SchoolField::Name),
            "players" | "count" => Ok(SchoolField::Players),
            "conf" | "conference" => Ok(SchoolField::Conference),
            _ => Err(AppError::unknown_sort_field(s, "schools")),
        }
    }
}

impl TableRow for SchoolSummary {
    type Field = SchoolField;

    fn columns() -> Vec<SchoolField> {
        vec![SchoolField::Name, SchoolField::Players, SchoolField::Conference]
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.aggregate.display_name.as_str()];
        fields.extend(self.conference.as_deref());
        fields
    }

    fn cell(&self, field: SchoolField) -> CellValue<'_> {
        match field {
            SchoolField::Name => CellValue::Text(Some(self.aggregate.display_name.as_str())),
            SchoolField::Players => count_cell(self.aggregate.count),
            SchoolField::Conference => CellValue::Text(self.conference.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConferenceField {
    Name,
    Abbreviation,
    Players,
    Schools,
}

impl fmt::Display for ConferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConferenceField::Name => "conference",
            ConferenceField::Abbreviation => "abbr",
            ConferenceField::Players => "players",
            ConferenceField::Schools => "schools",
        };
        write!(f, "{label}")
    }
}

impl FromStr for ConferenceField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "conf" | "conference" => Ok(ConferenceField::Name),
            "abbr" | "abbreviation" => Ok(ConferenceField::Abbreviation),
            "players" | "count" => Ok(ConferenceField::Players),
            "schools" => Ok(ConferenceField::Schools),
            _ => Err(AppError::unknown_sort_field(s, "conferences")),
        }
    }
}

impl TableRow for ConferenceSummary {
    type Field = ConferenceField;

    fn columns() -> Vec<ConferenceField> {
        vec![
            ConferenceField::Name,
            ConferenceField::Abbreviation,
            ConferenceField::Players,
            ConferenceField::Schools,
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.aggregate.display_name.as_str(), self.abbreviation.as_str()]
    }

    fn cell(&self, field: ConferenceField) -> CellValue<'_> {
        match field {
            ConferenceField::Name => CellValue::Text(Some(self.aggregate.display_name.as_str())),
            ConferenceField::Abbreviation => CellValue::Text(Some(self.abbreviation.as_str())),
            ConferenceField::Players => count_cell(self.aggregate.count),
            ConferenceField::Schools => count_cell(self.distinct_school_count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionField {
    Name,
    Code,
    Players,
}

impl fmt::Display for PositionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PositionField::Name => "position",
            PositionField::Code => "code",
            PositionField::Players => "players",
        };
        write!(f, "{label}")
    }
}

impl FromStr for PositionField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "pos" | "position" => Ok(PositionField::Name),
            "code" => Ok(PositionField::Code),
            "players" | "count" => Ok(PositionField::Players),
            _ => Err(AppError::unknown_sort_field(s, "positions")),
        }
    }
}

impl TableRow for PositionSummary {
    type Field = PositionField;

    fn columns() -> Vec<PositionField> {
        vec![PositionField::Name, PositionField::Code, PositionField::Players]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.aggregate.display_name.as_str(), self.aggregate.key.as_str()]
    }

    fn cell(&self, field: PositionField) -> CellValue<'_> {
        match field {
            PositionField::Name => CellValue::Text(Some(self.aggregate.display_name.as_str())),
            PositionField::Code => CellValue::Text(Some(self.aggregate.key.as_str())),
            PositionField::Players => count_cell(self.aggregate.count),
        }
    }
}
