pub mod aggregates;
pub mod players;

pub use aggregates::{
    Aggregate, AggregateSet, ConferenceSummary, PositionSummary, SchoolSummary,
};
pub use players::{PlayerRecord, Stat, StatField};
