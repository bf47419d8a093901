use crate::config::Config;
use crate::constants::cache_ttl;
use crate::data_fetcher::cache::HttpResponseCache;
use crate::data_fetcher::models::PlayerRecord;
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{PlayerFilter, build_players_url};

/// Client for the player stats API.
///
/// Each client owns its HTTP connection pool and its response cache, so two
/// clients never observe each other's cached data.
#[derive(Debug)]
pub struct PlayerClient {
    client: Client,
    api_domain: String,
    cache: HttpResponseCache,
}

impl PlayerClient {
    /// Creates a client for the configured API domain and timeout
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, &config.api_domain))
    }

    /// Creates a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, api_domain: impl Into<String>) -> Self {
        Self {
            client,
            api_domain: api_domain.into(),
            cache: HttpResponseCache::default(),
        }
    }

    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }

    pub fn cache(&self) -> &HttpResponseCache {
        &self.cache
    }

    /// Fetches every player record, in the order the API serves them
    pub async fn fetch_all_players(&self) -> Result<Vec<PlayerRecord>, AppError> {
        self.fetch_players(&PlayerFilter::All).await
    }

    /// Fetches the player records matching a server-side filter
    #[instrument(skip(self))]
    pub async fn fetch_players(&self, filter: &PlayerFilter) -> Result<Vec<PlayerRecord>, AppError> {
        let url = build_players_url(&self.api_domain, filter)?;
        let ttl = if filter.is_all() {
            cache_ttl::PLAYER_LIST_SECONDS
        } else {
            cache_ttl::FILTERED_PLAYERS_SECONDS
        };

        let players: Vec<PlayerRecord> = fetch(&self.client, &self.cache, &url, ttl).await?;
        info!("Fetched {} player records from {}", players.len(), url);
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PlayerClient {
        PlayerClient::with_client(Client::new(), server.uri())
    }

    #[tokio::test]
    async fn test_fetch_all_players() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/player"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"playerName": "A", "school_name": "duke", "pts": 10.5},
                    {"playerName": "B", "school_name": null}]"#,
            ))
            .mount(&server)
            .await;

        let players = client_for(&server).fetch_all_players().await.unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].school_key(), Some("duke"));
        assert_eq!(players[1].school_key(), None);
    }

    #[tokio::test]
    async fn test_filter_is_sent_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/player"))
            .and(query_param("school", "gonzaga"))
            .and(query_param("position", "G"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let filter = PlayerFilter::SchoolAndPosition {
            school: "gonzaga".to_string(),
            position: "G".to_string(),
        };
        let players = client_for(&server).fetch_players(&filter).await.unwrap();
        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/player"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[{}]"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.fetch_all_players().await.unwrap();
        let players = client.fetch_all_players().await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(client.cache().len().await, 1);
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_all_players().await.unwrap_err();
        assert!(matches!(err, AppError::ApiServiceUnavailable { status: 503, .. }));
        assert!(err.is_retryable());
    }
}
