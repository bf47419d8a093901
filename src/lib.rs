//! College basketball statistics library
//!
//! Fetches per-player season statistics from a stats API and derives the
//! school, conference and position summaries shown alongside them: canonical
//! display names, grouped counts, a filter/sort/paginate table engine and
//! school logo resolution.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cbb_insight::data_fetcher::{PlayerClient, PlayerStore};
//! use cbb_insight::table::{TableQuery, view};
//! use cbb_insight::error::AppError;
//! use cbb_insight::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = PlayerClient::new(&config)?;
//!     let store = PlayerStore::new();
//!
//!     let dataset = store.refresh(&client).await?;
//!     let schools = &dataset.aggregates().schools;
//!
//!     let query = TableQuery::default().with_search("state");
//!     for school in view(schools, &query).rows {
//!         println!("{} ({} players)", school.aggregate.display_name, school.aggregate.count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod table;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use assets::{AssetIndex, LogoResolver, MatchTier};
pub use config::Config;
pub use data_fetcher::names::{canonicalize, conference_abbreviation, locale_cmp};
pub use data_fetcher::{AggregateSet, PlayerClient, PlayerRecord, PlayerStore, Stat};
pub use error::AppError;
pub use table::{TableQuery, TableRow, TableView};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
