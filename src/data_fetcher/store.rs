//! Fetch lifecycle and the current dataset.
//!
//! Every fetch is tagged with a request id taken from a monotonically
//! increasing counter. Only the response to the most recent request may
//! change the store; anything older is discarded as stale. There is no
//! partial state: the store is either loading, holding a complete dataset,
//! or failed.

use crate::data_fetcher::api::PlayerClient;
use crate::data_fetcher::models::{AggregateSet, PlayerRecord};
use crate::error::AppError;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// One complete fetch result.
///
/// Aggregates are computed on first access and kept until the dataset is
/// replaced by a newer fetch.
#[derive(Debug)]
pub struct Dataset {
    /// Request id of the fetch that produced this dataset
    pub version: u64,
    pub fetched_at: DateTime<Utc>,
    players: Vec<PlayerRecord>,
    aggregates: OnceLock<AggregateSet>,
}

impl Dataset {
    pub fn new(version: u64, players: Vec<PlayerRecord>) -> Self {
        Self {
            version,
            fetched_at: Utc::now(),
            players,
            aggregates: OnceLock::new(),
        }
    }

    /// Fetch time in the local timezone, as printed under a table
    pub fn fetched_label(&self) -> String {
        format_fetched_at(self.fetched_at, &Local)
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn aggregates(&self) -> &AggregateSet {
        self.aggregates.get_or_init(|| {
            debug!(
                "Computing aggregates for dataset v{} ({} players)",
                self.version,
                self.players.len()
            );
            AggregateSet::from_records(&self.players)
        })
    }
}

/// Formats a fetch time as `YYYY-MM-DD HH:MM` in `tz`
pub fn format_fetched_at<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

#[derive(Debug, Clone, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading {
        request_id: u64,
    },
    Ready(Arc<Dataset>),
    Failed {
        request_id: u64,
        message: String,
        /// Whether a user-initiated retry makes sense
        retryable: bool,
    },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            FetchState::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, FetchState::Failed { retryable: true, .. })
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    latest_request: u64,
    state: FetchState,
}

/// Owner of the fetch lifecycle.
#[derive(Debug, Default)]
pub struct PlayerStore {
    inner: RwLock<StoreInner>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch and returns its request id. The store enters `Loading`.
    pub async fn begin_fetch(&self) -> u64 {
        let mut inner = self.inner.write().await;
        inner.latest_request += 1;
        let request_id = inner.latest_request;
        inner.state = FetchState::Loading { request_id };
        debug!("Began fetch request #{request_id}");
        request_id
    }

    /// Applies the result of fetch `request_id`.
    ///
    /// Returns [`AppError::StaleResponse`] without touching the store when a
    /// newer fetch has begun since. Otherwise the store becomes `Ready` or
    /// `Failed` and the fetch's own outcome is returned.
    pub async fn complete_fetch(
        &self,
        request_id: u64,
        result: Result<Vec<PlayerRecord>, AppError>,
    ) -> Result<Arc<Dataset>, AppError> {
        let mut inner = self.inner.write().await;

        if request_id != inner.latest_request {
            warn!(
                "Discarding response for request #{} (latest is #{})",
                request_id, inner.latest_request
            );
            return Err(AppError::stale_response(request_id, inner.latest_request));
        }

        match result {
            Ok(players) => {
                info!("Request #{} loaded {} players", request_id, players.len());
                let dataset = Arc::new(Dataset::new(request_id, players));
                inner.state = FetchState::Ready(Arc::clone(&dataset));
                Ok(dataset)
            }
            Err(e) => {
                warn!("Request #{} failed: {}", request_id, e);
                inner.state = FetchState::Failed {
                    request_id,
                    message: e.to_string(),
                    retryable: e.is_retryable(),
                };
                Err(e)
            }
        }
    }

    /// Runs one complete fetch cycle with `load` as the data source
    pub async fn refresh_with<F, Fut>(&self, load: F) -> Result<Arc<Dataset>, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<PlayerRecord>, AppError>>,
    {
        let request_id = self.begin_fetch().await;
        let result = load().await;
        self.complete_fetch(request_id, result).await
    }

    /// Fetches every player through `client` and replaces the dataset
    pub async fn refresh(&self, client: &PlayerClient) -> Result<Arc<Dataset>, AppError> {
        self.refresh_with(|| client.fetch_all_players()).await
    }

    pub async fn state(&self) -> FetchState {
        self.inner.read().await.state.clone()
    }

    /// The current dataset when the store is `Ready`
    pub async fn dataset(&self) -> Option<Arc<Dataset>> {
        self.inner.read().await.state.dataset().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[tokio::test]
    async fn test_starts_idle() {
        let store = PlayerStore::new();
        assert!(matches!(store.state().await, FetchState::Idle));
        assert!(store.dataset().await.is_none());
    }

    #[tokio::test]
    async fn test_loading_then_ready() {
        let store = PlayerStore::new();
        let id = store.begin_fetch().await;
        assert!(store.state().await.is_loading());
        assert!(store.dataset().await.is_none());

        let dataset = store
            .complete_fetch(id, Ok(TestDataBuilder::create_multiple_players(3)))
            .await
            .unwrap();
        assert_eq!(dataset.version, id);
        assert_eq!(dataset.players().len(), 3);
        assert!(store.dataset().await.is_some());
    }

    #[test]
    fn test_format_fetched_at() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 18, 5, 42).unwrap();
        assert_eq!(format_fetched_at(at, &Utc), "2025-03-01 18:05");

        let helsinki = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_fetched_at(at, &helsinki), "2025-03-01 20:05");
    }

    #[test]
    fn test_fetched_label_is_recent() {
        let before = Utc::now();
        let dataset = Dataset::new(1, Vec::new());
        assert!(dataset.fetched_at >= before);
        assert_eq!(dataset.fetched_label().len(), "2025-03-01 18:05".len());
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let store = PlayerStore::new();
        let first = store.begin_fetch().await;
        let second = store.begin_fetch().await;

        store
            .complete_fetch(second, Ok(TestDataBuilder::create_multiple_players(2)))
            .await
            .unwrap();
        let stale = store
            .complete_fetch(first, Ok(TestDataBuilder::create_multiple_players(9)))
            .await;

        assert!(matches!(
            stale,
            Err(AppError::StaleResponse { request_id, latest }) if request_id == first && latest == second
        ));
        let current = store.dataset().await.unwrap();
        assert_eq!(current.version, second);
        assert_eq!(current.players().len(), 2);
    }

    #[tokio::test]
    async fn test_stale_failure_does_not_clobber_loading() {
        let store = PlayerStore::new();
        let first = store.begin_fetch().await;
        let second = store.begin_fetch().await;

        let result = store
            .complete_fetch(first, Err(AppError::network_timeout("http://x")))
            .await;
        assert!(matches!(result, Err(AppError::StaleResponse { .. })));
        assert!(matches!(
            store.state().await,
            FetchState::Loading { request_id } if request_id == second
        ));
    }

    #[tokio::test]
    async fn test_failure_offers_retry_when_retryable() {
        let store = PlayerStore::new();
        let result = store
            .refresh_with(|| async { Err(AppError::network_timeout("http://x")) })
            .await;
        assert!(result.is_err());
        assert!(store.state().await.can_retry());

        let result = store
            .refresh_with(|| async { Err(AppError::api_not_found("http://x")) })
            .await;
        assert!(result.is_err());
        let state = store.state().await;
        assert!(matches!(state, FetchState::Failed { .. }));
        assert!(!state.can_retry());
    }

    #[tokio::test]
    async fn test_failure_drops_previous_dataset() {
        let store = PlayerStore::new();
        store
            .refresh_with(|| async { Ok(TestDataBuilder::create_multiple_players(1)) })
            .await
            .unwrap();
        let _ = store
            .refresh_with(|| async { Err(AppError::network_timeout("http://x")) })
            .await;
        assert!(store.dataset().await.is_none());
    }

    #[tokio::test]
    async fn test_aggregates_are_memoized_per_dataset() {
        let store = PlayerStore::new();
        let first = store
            .refresh_with(|| async { Ok(TestDataBuilder::create_multiple_players(8)) })
            .await
            .unwrap();
        assert!(std::ptr::eq(first.aggregates(), first.aggregates()));
        assert_eq!(first.aggregates().schools.len(), 4);

        let second = store
            .refresh_with(|| async { Ok(TestDataBuilder::create_multiple_players(1)) })
            .await
            .unwrap();
        assert_eq!(second.aggregates().schools.len(), 1);
        // The old dataset keeps its own aggregates
        assert_eq!(first.aggregates().schools.len(), 4);
    }
}
