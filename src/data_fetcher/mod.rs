pub mod api;
pub mod cache;
pub mod models;
pub mod names;
pub mod processors;
pub mod store;

pub use api::{PlayerClient, PlayerFilter};
pub use models::{AggregateSet, PlayerRecord, Stat, StatField};
pub use store::{Dataset, FetchState, PlayerStore};
