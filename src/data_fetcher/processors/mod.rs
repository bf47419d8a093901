pub mod aggregation;

pub use aggregation::{aggregate, aggregate_conferences, aggregate_positions, aggregate_schools};
