use cbb_insight::assets::{LogoResolver, MatchTier};
use cbb_insight::config::Config;
use cbb_insight::data_fetcher::{FetchState, PlayerClient, PlayerFilter, PlayerStore};
use cbb_insight::error::AppError;
use cbb_insight::table::{PlayerField, TableQuery, TableRow, view};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROSTER: &str = r#"[
    {"playerName": "Ava", "position": "G", "school_name": "ohio-st", "conference": "Big Ten", "pts": 18.2, "games_played": 30},
    {"playerName": "Ben", "position": "F", "school_name": "ohio-st", "conference": "Big Ten", "pts": null},
    {"playerName": "Cal", "position": "C", "school_name": "mount-st-marys", "conference": "Northeast", "pts": 9.0},
    {"playerName": "Dee", "position": "G", "school_name": null, "conference": null}
]"#;

fn client_for(server: &MockServer) -> PlayerClient {
    let config = Config {
        api_domain: server.uri(),
        http_timeout_seconds: 5,
        ..Config::default()
    };
    PlayerClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_aggregate_and_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/player"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ROSTER))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = PlayerStore::new();
    let dataset = store.refresh(&client).await.unwrap();

    assert_eq!(dataset.players().len(), 4);
    let aggregates = dataset.aggregates();
    let schools: Vec<_> = aggregates
        .schools
        .iter()
        .map(|s| (s.aggregate.display_name.as_str(), s.aggregate.count))
        .collect();
    assert_eq!(schools, vec![("Mount St. Marys", 1), ("Ohio State", 2)]);

    let big_ten = aggregates
        .conferences
        .iter()
        .find(|c| c.aggregate.key == "Big Ten")
        .unwrap();
    assert_eq!(big_ten.distinct_school_count, 1);

    let mut query = TableQuery::default().with_search("ohio");
    query.select_sort(PlayerField::Stat(cbb_insight::data_fetcher::StatField::Points));
    let result = view(dataset.players(), &query);
    assert_eq!(result.total_matches, 2);
    // Absent points sort as zero
    assert_eq!(result.rows[0].name(), Some("Ben"));
    assert_eq!(result.rows[0].display(PlayerField::School), "Ohio State");

    let logo = LogoResolver::default().resolve(&aggregates.schools[1].aggregate.display_name);
    assert_eq!(logo.tier, MatchTier::Exact);
}

#[tokio::test]
async fn test_server_filter_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/player"))
        .and(query_param("conference", "Big Ten"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = PlayerStore::new();
    let filter = PlayerFilter::Conference("Big Ten".to_string());
    let dataset = store
        .refresh_with(|| client.fetch_players(&filter))
        .await
        .unwrap();
    assert!(dataset.players().is_empty());
    assert!(dataset.aggregates().is_empty());
}

#[tokio::test]
async fn test_failed_fetch_offers_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = PlayerStore::new();
    let err = store.refresh(&client).await.unwrap_err();
    assert!(matches!(err, AppError::ApiServerError { status: 500, .. }));

    let state = store.state().await;
    assert!(state.can_retry());
    assert!(state.dataset().is_none());
}

#[tokio::test]
async fn test_missing_resource_is_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = PlayerStore::new();
    let err = store.refresh(&client_for(&server)).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!store.state().await.can_retry());
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let store = PlayerStore::new();
    let err = store.refresh(&client_for(&server)).await.unwrap_err();
    assert!(matches!(err, AppError::ApiMalformedJson { .. }));
    assert!(matches!(store.state().await, FetchState::Failed { .. }));
}

#[tokio::test]
async fn test_late_response_from_older_fetch_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/player"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ROSTER))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = PlayerStore::new();

    let older = store.begin_fetch().await;
    let newer = store.begin_fetch().await;

    let newer_players = client.fetch_all_players().await.unwrap();
    let dataset = store.complete_fetch(newer, Ok(newer_players)).await.unwrap();
    assert_eq!(dataset.version, newer);

    let older_players = client.fetch_all_players().await.unwrap();
    let err = store.complete_fetch(older, Ok(older_players)).await.unwrap_err();
    assert!(matches!(err, AppError::StaleResponse { .. }));

    let current = store.dataset().await.unwrap();
    assert_eq!(current.version, newer);
}
