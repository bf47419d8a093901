use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric statistic that may be missing from the API payload.
///
/// The backend serves `null` (or omits the field) for statistics it has no
/// value for. Consumers decide explicitly what an absent value means for
/// them instead of silently treating it as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Stat {
    Present(f64),
    #[default]
    Absent,
}

impl Stat {
    /// Returns the value if present
    pub fn value(self) -> Option<f64> {
        match self {
            Stat::Present(v) => Some(v),
            Stat::Absent => None,
        }
    }

    /// Returns the value, or zero when absent
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_present(self) -> bool {
        matches!(self, Stat::Present(_))
    }
}

impl From<Option<f64>> for Stat {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Stat::Present(v),
            _ => Stat::Absent,
        }
    }
}

impl From<Stat> for Option<f64> {
    fn from(stat: Stat) -> Self {
        stat.value()
    }
}

impl From<f64> for Stat {
    fn from(value: f64) -> Self {
        Some(value).into()
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Present(v) if v.fract() == 0.0 => write!(f, "{v:.0}"),
            // Shooting percentages are served as fractions
            Stat::Present(v) if v.abs() < 1.0 => write!(f, "{v:.3}"),
            Stat::Present(v) => write!(f, "{v:.1}"),
            Stat::Absent => write!(f, "-"),
        }
    }
}

/// One player's season line as served by `GET /api/v1/player`.
///
/// Every field is optional on the wire; records are read-only once fetched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    #[serde(rename = "playerName")]
    pub player_name: Option<String>,
    pub position: Option<String>,
    pub games_played: Stat,
    pub games_started: Stat,
    pub minutes_played: Stat,
    pub fg_per_game: Stat,
    pub fga_per_game: Stat,
    pub fg_percentage: Stat,
    pub threep_per_game: Stat,
    pub threepa_per_game: Stat,
    pub threep_percentage: Stat,
    pub twop_per_game: Stat,
    pub twopa_per_game: Stat,
    pub twop_percentage: Stat,
    pub efg: Stat,
    pub ft_per_game: Stat,
    pub fta_per_game: Stat,
    pub ft_percentage: Stat,
    pub orb: Stat,
    pub drb: Stat,
    pub trb: Stat,
    pub ast: Stat,
    pub stl: Stat,
    pub blk: Stat,
    pub tov: Stat,
    pub pf: Stat,
    pub pts: Stat,
    /// Raw school key in slug form, e.g. `mount-st-marys`
    pub school_name: Option<String>,
    /// Raw conference name, free text
    pub conference: Option<String>,
}

impl PlayerRecord {
    /// Raw school slug, `None` when missing or blank
    pub fn school_key(&self) -> Option<&str> {
        non_blank(self.school_name.as_deref())
    }

    /// Raw conference name, `None` when missing or blank
    pub fn conference_key(&self) -> Option<&str> {
        non_blank(self.conference.as_deref())
    }

    /// Raw position code, `None` when missing or blank
    pub fn position_code(&self) -> Option<&str> {
        non_blank(self.position.as_deref())
    }

    pub fn name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    /// Looks up a statistic by field
    pub fn stat(&self, field: StatField) -> Stat {
        match field {
            StatField::GamesPlayed => self.games_played,
            StatField::GamesStarted => self.games_started,
            StatField::MinutesPlayed => self.minutes_played,
            StatField::FieldGoals => self.fg_per_game,
            StatField::FieldGoalAttempts => self.fga_per_game,
            StatField::FieldGoalPercentage => self.fg_percentage,
            StatField::ThreePointers => self.threep_per_game,
            StatField::ThreePointAttempts => self.threepa_per_game,
            StatField::ThreePointPercentage => self.threep_percentage,
            StatField::TwoPointers => self.twop_per_game,
            StatField::TwoPointAttempts => self.twopa_per_game,
            StatField::TwoPointPercentage => self.twop_percentage,
            StatField::EffectiveFieldGoalPercentage => self.efg,
            StatField::FreeThrows => self.ft_per_game,
            StatField::FreeThrowAttempts => self.fta_per_game,
            StatField::FreeThrowPercentage => self.ft_percentage,
            StatField::OffensiveRebounds => self.orb,
            StatField::DefensiveRebounds => self.drb,
            StatField::TotalRebounds => self.trb,
            StatField::Assists => self.ast,
            StatField::Steals => self.stl,
            StatField::Blocks => self.blk,
            StatField::Turnovers => self.tov,
            StatField::PersonalFouls => self.pf,
            StatField::Points => self.pts,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Per-game statistics carried by a [`PlayerRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    GamesPlayed,
    GamesStarted,
    MinutesPlayed,
    FieldGoals,
    FieldGoalAttempts,
    FieldGoalPercentage,
    ThreePointers,
    ThreePointAttempts,
    ThreePointPercentage,
    TwoPointers,
    TwoPointAttempts,
    TwoPointPercentage,
    EffectiveFieldGoalPercentage,
    FreeThrows,
    FreeThrowAttempts,
    FreeThrowPercentage,
    OffensiveRebounds,
    DefensiveRebounds,
    TotalRebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    PersonalFouls,
    Points,
}

impl StatField {
    pub const ALL: [StatField; 25] = [
        StatField::GamesPlayed,
        StatField::GamesStarted,
        StatField::MinutesPlayed,
        StatField::FieldGoals,
        StatField::FieldGoalAttempts,
        StatField::FieldGoalPercentage,
        StatField::ThreePointers,
        StatField::ThreePointAttempts,
        StatField::ThreePointPercentage,
        StatField::TwoPointers,
        StatField::TwoPointAttempts,
        StatField::TwoPointPercentage,
        StatField::EffectiveFieldGoalPercentage,
        StatField::FreeThrows,
        StatField::FreeThrowAttempts,
        StatField::FreeThrowPercentage,
        StatField::OffensiveRebounds,
        StatField::DefensiveRebounds,
        StatField::TotalRebounds,
        StatField::Assists,
        StatField::Steals,
        StatField::Blocks,
        StatField::Turnovers,
        StatField::PersonalFouls,
        StatField::Points,
    ];

    /// Short column label, also accepted when parsing
    pub fn label(self) -> &'static str {
        match self {
            StatField::GamesPlayed => "gp",
            StatField::GamesStarted => "gs",
            StatField::MinutesPlayed => "mp",
            StatField::FieldGoals => "fg",
            StatField::FieldGoalAttempts => "fga",
            StatField::FieldGoalPercentage => "fg%",
            StatField::ThreePointers => "3p",
            StatField::ThreePointAttempts => "3pa",
            StatField::ThreePointPercentage => "3p%",
            StatField::TwoPointers => "2p",
            StatField::TwoPointAttempts => "2pa",
            StatField::TwoPointPercentage => "2p%",
            StatField::EffectiveFieldGoalPercentage => "efg%",
            StatField::FreeThrows => "ft",
            StatField::FreeThrowAttempts => "fta",
            StatField::FreeThrowPercentage => "ft%",
            StatField::OffensiveRebounds => "orb",
            StatField::DefensiveRebounds => "drb",
            StatField::TotalRebounds => "trb",
            StatField::Assists => "ast",
            StatField::Steals => "stl",
            StatField::Blocks => "blk",
            StatField::Turnovers => "tov",
            StatField::PersonalFouls => "pf",
            StatField::Points => "pts",
        }
    }
}

impl FromStr for StatField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StatField::ALL
            .into_iter()
            .find(|field| field.label() == wanted)
            .ok_or(())
    }
}
